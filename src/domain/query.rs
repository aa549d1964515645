//! Todo queries
//!
//! A `TodoQuery` is a field-equality filter: every field that is set must equal
//! the item's field. `ReadQuery` is what callers hand to the model; it is
//! resolved into either "everything" or a `TodoQuery`.
//!
//! # Examples
//!
//! ```
//! use todos::domain::{parse_id, ReadQuery, TodoQuery};
//!
//! assert_eq!(parse_id(" 42abc"), Some(42));
//! assert_eq!(parse_id("abc"), None);
//!
//! let query = ReadQuery::from("7").resolve();
//! assert_eq!(query, Some(TodoQuery::by_id(Some(7))));
//! ```

use crate::domain::todo::{Todo, TodoId};

/// Field-equality filter over todo items
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoQuery {
    pub id: Option<TodoId>,
    pub title: Option<String>,
    pub completed: Option<bool>,
    /// Set when the caller asked for an id that could not be parsed
    unmatchable: bool,
}

impl TodoQuery {
    /// Query that matches every item
    pub fn any() -> Self {
        TodoQuery::default()
    }

    /// Query by id. `None` is an id that failed to parse and matches nothing.
    pub fn by_id(id: Option<TodoId>) -> Self {
        TodoQuery {
            id,
            unmatchable: id.is_none(),
            ..TodoQuery::default()
        }
    }

    pub fn by_completed(completed: bool) -> Self {
        TodoQuery {
            completed: Some(completed),
            ..TodoQuery::default()
        }
    }

    pub fn by_title(title: impl Into<String>) -> Self {
        TodoQuery {
            title: Some(title.into()),
            ..TodoQuery::default()
        }
    }

    pub fn and_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn and_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// True when every set field equals the corresponding field of `todo`
    pub fn matches(&self, todo: &Todo) -> bool {
        if self.unmatchable {
            return false;
        }
        if self.id.is_some_and(|id| id != todo.id) {
            return false;
        }
        if self.title.as_ref().is_some_and(|title| *title != todo.title) {
            return false;
        }
        if self.completed.is_some_and(|completed| completed != todo.completed) {
            return false;
        }
        true
    }
}

/// What a caller can ask the model for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadQuery {
    /// Every item in the collection
    All,
    /// An id given as text, coerced the way `parseInt(text, 10)` does
    Id(String),
    /// An id given as a number
    Number(TodoId),
    /// A field-equality filter passed through unchanged
    Fields(TodoQuery),
}

impl ReadQuery {
    /// `None` means "all items"
    pub fn resolve(self) -> Option<TodoQuery> {
        match self {
            ReadQuery::All => None,
            ReadQuery::Id(raw) => Some(TodoQuery::by_id(parse_id(&raw))),
            ReadQuery::Number(id) => Some(TodoQuery::by_id(Some(id))),
            ReadQuery::Fields(query) => Some(query),
        }
    }
}

impl From<&str> for ReadQuery {
    fn from(value: &str) -> Self {
        ReadQuery::Id(value.to_string())
    }
}

impl From<String> for ReadQuery {
    fn from(value: String) -> Self {
        ReadQuery::Id(value)
    }
}

impl From<TodoId> for ReadQuery {
    fn from(value: TodoId) -> Self {
        ReadQuery::Number(value)
    }
}

impl From<TodoQuery> for ReadQuery {
    fn from(value: TodoQuery) -> Self {
        ReadQuery::Fields(value)
    }
}

impl<T: Into<ReadQuery>> From<Option<T>> for ReadQuery {
    fn from(value: Option<T>) -> Self {
        value.map_or(ReadQuery::All, Into::into)
    }
}

/// Parse a decimal id leniently: leading whitespace and an optional sign are
/// accepted, parsing stops at the first non-digit, and text without leading
/// digits yields `None`.
pub fn parse_id(raw: &str) -> Option<TodoId> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value: TodoId = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}
