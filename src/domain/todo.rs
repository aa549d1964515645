//! Todo item definitions

use serde::{Deserialize, Serialize};

/// Identifier of a todo: the epoch-millisecond timestamp of its creation.
pub type TodoId = i64;

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Build a new item from save data; fields missing from `data` take their defaults.
    pub fn from_patch(id: TodoId, data: &TodoPatch) -> Self {
        Todo {
            id,
            title: data.title.clone().unwrap_or_default(),
            completed: data.completed.unwrap_or(false),
        }
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// A todo that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
}

impl NewTodo {
    /// Build a fresh, active todo. The title is trimmed; a missing title becomes empty.
    pub fn from_title(title: Option<&str>) -> Self {
        NewTodo {
            title: title.unwrap_or("").trim().to_string(),
            completed: false,
        }
    }
}

impl From<NewTodo> for TodoPatch {
    fn from(value: NewTodo) -> Self {
        TodoPatch {
            title: Some(value.title),
            completed: Some(value.completed),
        }
    }
}

/// Partial update: only `Some` fields are written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        TodoPatch {
            title: Some(title.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        TodoPatch {
            title: None,
            completed: Some(completed),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}

/// Tally of a collection by completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TodoCount {
    pub active: usize,
    pub completed: usize,
    pub total: usize,
}

impl TodoCount {
    pub fn tally<'a>(todos: impl IntoIterator<Item = &'a Todo>) -> Self {
        let mut count = TodoCount::default();
        for todo in todos {
            if todo.completed {
                count.completed += 1;
            } else {
                count.active += 1;
            }
            count.total += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: TodoId, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn test_from_title_trims() {
        let new = NewTodo::from_title(Some("  buy milk \t"));
        assert_eq!(new.title, "buy milk");
        assert!(!new.completed);
    }

    #[test]
    fn test_from_title_missing_is_empty() {
        assert_eq!(NewTodo::from_title(None).title, "");
    }

    #[test]
    fn test_from_patch_fills_defaults() {
        let item = Todo::from_patch(9, &TodoPatch::default());
        assert_eq!(item, todo(9, "", false));

        let item = Todo::from_patch(9, &NewTodo::from_title(Some(" x ")).into());
        assert_eq!(item, todo(9, "x", false));
    }

    #[test]
    fn test_apply_partial_patch() {
        let mut item = todo(1, "walk dog", false);
        item.apply(&TodoPatch::completed(true));
        assert_eq!(item, todo(1, "walk dog", true));

        item.apply(&TodoPatch::title("walk cat"));
        assert_eq!(item, todo(1, "walk cat", true));
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut item = todo(1, "walk dog", false);
        let patch = TodoPatch::default();
        assert!(patch.is_empty());
        item.apply(&patch);
        assert_eq!(item, todo(1, "walk dog", false));
    }

    #[test]
    fn test_tally() {
        let todos = vec![
            todo(1, "a", false),
            todo(2, "b", true),
            todo(3, "c", false),
        ];
        let count = TodoCount::tally(&todos);
        assert_eq!(
            count,
            TodoCount {
                active: 2,
                completed: 1,
                total: 3
            }
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_string(&todo(5, "x", true)).unwrap();
        assert_eq!(json, r#"{"id":5,"title":"x","completed":true}"#);
    }
}
