//! Todo collection persisted as one JSON document in local storage
//!
//! The whole collection lives under a single key as
//! `{"todos": [{"id": .., "title": .., "completed": ..}, ...]}`. Every mutation
//! reads the document, changes it and writes the whole document back.

use crate::domain::{Todo, TodoId, TodoPatch, TodoQuery};
use crate::error::Result;
use crate::infrastructure::storage::{validate_key, LocalStorage};
use chrono::Utc;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Serialized form of a collection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Collection {
    pub todos: Vec<Todo>,
}

type Clock = Box<dyn Fn() -> TodoId>;

fn system_clock() -> TodoId {
    Utc::now().timestamp_millis()
}

/// Named todo collection on top of a storage backend
pub struct Store<S: LocalStorage> {
    name: String,
    storage: S,
    clock: Clock,
}

impl<S: LocalStorage> Store<S> {
    /// Open the collection stored under `name`, creating an empty one if none exists yet
    pub fn open(name: &str, mut storage: S) -> Result<Self> {
        validate_key(name)?;

        if storage.get_item(name)?.is_none() {
            debug!("creating empty collection '{}'", name);
            let empty = serde_json::to_string(&Collection::default())?;
            storage.set_item(name, &empty)?;
        }

        Ok(Store {
            name: name.to_string(),
            storage,
            clock: Box::new(system_clock),
        })
    }

    /// Replace the id source used for new items (epoch milliseconds by default)
    pub fn with_clock(mut self, clock: impl Fn() -> TodoId + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Items for which every set field of `query` matches
    pub fn find(&self, query: &TodoQuery) -> Result<Vec<Todo>> {
        let collection = self.load()?;
        Ok(collection
            .todos
            .into_iter()
            .filter(|todo| query.matches(todo))
            .collect())
    }

    /// The full collection, in insertion order
    pub fn find_all(&self) -> Result<Vec<Todo>> {
        Ok(self.load()?.todos)
    }

    /// Update or insert.
    ///
    /// With an `id`, the first item carrying that id gets the fields of `data`
    /// written over it and the whole collection is returned; an unknown id
    /// changes nothing. Without an `id`, a new item is appended with an id
    /// taken from the clock and only that item is returned.
    pub fn save(&mut self, data: TodoPatch, id: Option<TodoId>) -> Result<Vec<Todo>> {
        let mut collection = self.load()?;

        match id {
            Some(id) => {
                match collection.todos.iter_mut().find(|todo| todo.id == id) {
                    Some(todo) => todo.apply(&data),
                    None => debug!("save: no item {} in '{}'", id, self.name),
                }
                self.persist(&collection)?;
                Ok(collection.todos)
            }
            None => {
                let todo = Todo::from_patch((self.clock)(), &data);
                collection.todos.push(todo.clone());
                self.persist(&collection)?;
                Ok(vec![todo])
            }
        }
    }

    /// Remove the first item with `id` and return what is left
    pub fn remove(&mut self, id: TodoId) -> Result<Vec<Todo>> {
        let mut collection = self.load()?;

        if let Some(index) = collection.todos.iter().position(|todo| todo.id == id) {
            collection.todos.remove(index);
        }

        self.persist(&collection)?;
        Ok(collection.todos)
    }

    /// Replace the collection with an empty one
    pub fn drop(&mut self) -> Result<Vec<Todo>> {
        let collection = Collection::default();
        self.persist(&collection)?;
        Ok(collection.todos)
    }

    fn load(&self) -> Result<Collection> {
        match self.storage.get_item(&self.name)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => {
                warn!("collection '{}' vanished from storage; treating as empty", self.name);
                Ok(Collection::default())
            }
        }
    }

    fn persist(&mut self, collection: &Collection) -> Result<()> {
        let raw = serde_json::to_string(collection)?;
        self.storage.set_item(&self.name, &raw)?;
        debug!(
            "persisted {} item(s) to '{}'",
            collection.todos.len(),
            self.name
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::infrastructure::storage::{FileStorage, MemoryStorage};
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn counter_clock(start: TodoId) -> impl Fn() -> TodoId {
        let next = Rc::new(Cell::new(start));
        move || {
            let id = next.get();
            next.set(id + 1);
            id
        }
    }

    fn store() -> Store<MemoryStorage> {
        Store::open("todos", MemoryStorage::new())
            .unwrap()
            .with_clock(counter_clock(100))
    }

    fn add(store: &mut Store<MemoryStorage>, title: &str, completed: bool) -> Todo {
        let data = TodoPatch {
            title: Some(title.to_string()),
            completed: Some(completed),
        };
        store.save(data, None).unwrap().remove(0)
    }

    #[test]
    fn test_open_creates_empty_collection() {
        let store = Store::open("todos", MemoryStorage::new()).unwrap();
        assert_eq!(
            store.storage().get_item("todos").unwrap().as_deref(),
            Some(r#"{"todos":[]}"#)
        );
        assert!(store.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_open_keeps_existing_collection() {
        let mut storage = MemoryStorage::new();
        storage
            .set_item("todos", r#"{"todos":[{"id":1,"title":"a","completed":true}]}"#)
            .unwrap();

        let store = Store::open("todos", storage).unwrap();
        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_open_rejects_bad_name() {
        let result = Store::open("no/slashes", MemoryStorage::new());
        assert!(matches!(result, Err(TodoError::InvalidStoreName(_))));
    }

    #[test]
    fn test_save_without_id_appends_and_returns_new_item() {
        let mut store = store();
        let saved = store
            .save(TodoPatch::title("write tests"), None)
            .unwrap();

        assert_eq!(
            saved,
            vec![Todo {
                id: 100,
                title: "write tests".to_string(),
                completed: false,
            }]
        );
        assert_eq!(store.find_all().unwrap(), saved);
    }

    #[test]
    fn test_save_with_id_only_touches_that_item() {
        let mut store = store();
        let a = add(&mut store, "a", false);
        let b = add(&mut store, "b", false);
        let c = add(&mut store, "c", false);

        let all = store.save(TodoPatch::completed(true), Some(b.id)).unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(all[0], a);
        assert_eq!(
            all[1],
            Todo {
                completed: true,
                ..b
            }
        );
        assert_eq!(all[2], c);
    }

    #[test]
    fn test_save_with_unknown_id_changes_nothing() {
        let mut store = store();
        add(&mut store, "a", false);
        let before = store.find_all().unwrap();

        let after = store.save(TodoPatch::title("zzz"), Some(999)).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_find_by_completed_returns_exact_subset() {
        let mut store = store();
        add(&mut store, "a", true);
        add(&mut store, "b", false);
        add(&mut store, "c", true);

        let done = store.find(&TodoQuery::by_completed(true)).unwrap();
        let titles: Vec<_> = done.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert!(done.iter().all(|t| t.completed));
    }

    #[test]
    fn test_find_by_id() {
        let mut store = store();
        add(&mut store, "a", false);
        let b = add(&mut store, "b", false);

        assert_eq!(store.find(&TodoQuery::by_id(Some(b.id))).unwrap(), vec![b]);
        assert!(store.find(&TodoQuery::by_id(None)).unwrap().is_empty());
    }

    #[test]
    fn test_remove_present_and_missing() {
        let mut store = store();
        let a = add(&mut store, "a", false);
        add(&mut store, "b", false);

        assert_eq!(store.remove(a.id).unwrap().len(), 1);
        assert_eq!(store.remove(a.id).unwrap().len(), 1);
    }

    #[test]
    fn test_remove_only_first_duplicate() {
        let mut store = Store::open("todos", MemoryStorage::new())
            .unwrap()
            .with_clock(|| 7);
        add(&mut store, "first", false);
        add(&mut store, "second", false);

        let left = store.remove(7).unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].title, "second");
    }

    #[test]
    fn test_drop_empties_collection() {
        let mut store = store();
        add(&mut store, "a", false);
        add(&mut store, "b", true);

        assert!(store.drop().unwrap().is_empty());
        assert!(store.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_collection_is_an_error() {
        let mut storage = MemoryStorage::new();
        storage.set_item("todos", "{not json").unwrap();
        let store = Store::open("todos", storage).unwrap();

        assert!(matches!(store.find_all(), Err(TodoError::Json(_))));
    }

    #[test]
    fn test_missing_key_reads_as_empty() {
        let mut store = store();
        add(&mut store, "a", false);
        let mut storage = store.into_storage();
        storage.remove_item("todos").unwrap();

        let store = Store {
            name: "todos".to_string(),
            storage,
            clock: Box::new(system_clock),
        };
        assert!(store.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_system_clock_ids_are_epoch_millis() {
        let mut store = Store::open("todos", MemoryStorage::new()).unwrap();
        let before = Utc::now().timestamp_millis();
        let saved = store.save(TodoPatch::title("x"), None).unwrap();
        let after = Utc::now().timestamp_millis();

        assert!(saved[0].id >= before && saved[0].id <= after);
    }

    #[test]
    fn test_file_backed_store_survives_reopen() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().to_path_buf());
        let mut store = Store::open("todos", storage).unwrap().with_clock(|| 1);
        store.save(TodoPatch::title("persist me"), None).unwrap();

        let reopened = Store::open("todos", FileStorage::new(temp.path().to_path_buf())).unwrap();
        let all = reopened.find_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "persist me");

        let raw = std::fs::read_to_string(temp.path().join("todos.json")).unwrap();
        assert_eq!(raw, r#"{"todos":[{"id":1,"title":"persist me","completed":false}]}"#);
    }
}
