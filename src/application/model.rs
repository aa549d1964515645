//! Todo model: shapes input from the UI and delegates to the store

use crate::domain::{NewTodo, ReadQuery, Todo, TodoCount, TodoId, TodoPatch};
use crate::error::Result;
use crate::infrastructure::{LocalStorage, Store};
use log::info;

/// Mediates between a user interface and a `Store`
pub struct Model<S: LocalStorage> {
    store: Store<S>,
}

impl<S: LocalStorage> Model<S> {
    pub fn new(store: Store<S>) -> Self {
        Model { store }
    }

    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    /// Create an active todo with a trimmed title and return the saved item(s)
    pub fn create(&mut self, title: Option<&str>) -> Result<Vec<Todo>> {
        let data = NewTodo::from_title(title);
        let saved = self.store.save(data.into(), None)?;
        if let Some(todo) = saved.first() {
            info!("created todo {} in '{}'", todo.id, self.store.name());
        }
        Ok(saved)
    }

    /// Read todos.
    ///
    /// ```
    /// use todos::application::Model;
    /// use todos::domain::TodoQuery;
    /// use todos::infrastructure::{MemoryStorage, Store};
    ///
    /// let store = Store::open("todos", MemoryStorage::new()).unwrap();
    /// let mut model = Model::new(store);
    /// let id = model.create(Some("  read docs ")).unwrap()[0].id;
    ///
    /// assert_eq!(model.read(None::<i64>).unwrap().len(), 1);
    /// assert_eq!(model.read(id).unwrap()[0].title, "read docs");
    /// assert_eq!(model.read(id.to_string().as_str()).unwrap().len(), 1);
    /// assert!(model.read(TodoQuery::by_completed(true)).unwrap().is_empty());
    /// assert!(model.read("nope").unwrap().is_empty());
    /// ```
    pub fn read(&self, query: impl Into<ReadQuery>) -> Result<Vec<Todo>> {
        match query.into().resolve() {
            None => self.store.find_all(),
            Some(query) => self.store.find(&query),
        }
    }

    /// Merge `data` into the item with `id` and return the whole collection
    pub fn update(&mut self, id: TodoId, data: TodoPatch) -> Result<Vec<Todo>> {
        self.store.save(data, Some(id))
    }

    /// Delete the item with `id` and return what is left
    pub fn remove(&mut self, id: TodoId) -> Result<Vec<Todo>> {
        let left = self.store.remove(id)?;
        info!("removed todo {} from '{}'", id, self.store.name());
        Ok(left)
    }

    /// Drop the entire collection
    pub fn remove_all(&mut self) -> Result<Vec<Todo>> {
        info!("dropping collection '{}'", self.store.name());
        self.store.drop()
    }

    /// Tally active, completed and total items
    pub fn count(&self) -> Result<TodoCount> {
        Ok(TodoCount::tally(&self.store.find_all()?))
    }
}
