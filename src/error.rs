//! Error types for todos

use crate::domain::TodoId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the todos application
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Not a todos directory: {0}")]
    NotTodoDirectory(PathBuf),

    #[error("Invalid todo id: {0}")]
    InvalidId(String),

    #[error("Todo not found: {0}")]
    TodoNotFound(TodoId),

    #[error("Invalid store name: {0}")]
    InvalidStoreName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt collection data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TodoError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TodoError::NotTodoDirectory(_) => 2,
            TodoError::InvalidId(_) => 3,
            TodoError::TodoNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TodoError::NotTodoDirectory(path) => {
                format!(
                    "Not a todos directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'todos init' in this directory to create a new todo list\n\
                    • Navigate to an existing todos directory\n\
                    • Set TODOS_ROOT environment variable to your todo list path",
                    path.display()
                )
            }
            TodoError::InvalidId(raw) => {
                format!(
                    "Invalid todo id: '{}'\n\n\
                    Ids are the numbers shown by 'todos list'.\n\
                    Example: todos done 1737100000000",
                    raw
                )
            }
            TodoError::TodoNotFound(id) => {
                format!(
                    "No todo with id {}\n\n\
                    Suggestions:\n\
                    • Use 'todos list' to see existing ids\n\
                    • Check 'todos config name' if you switched collections",
                    id
                )
            }
            TodoError::InvalidStoreName(name) => {
                format!(
                    "Invalid store name: '{}'\n\n\
                    Store names start with a letter or digit and may contain\n\
                    letters, digits, '.', '_' and '-'.\n\
                    Example: todos config name groceries",
                    name
                )
            }
            TodoError::Json(err) => {
                format!(
                    "Corrupt collection data: {}\n\n\
                    The collection file under .todos/storage/ is not valid JSON.\n\
                    Fix or remove it, or run 'todos clear' to start fresh.",
                    err
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TodoError
pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(TodoError::NotTodoDirectory(PathBuf::from("/tmp")).exit_code(), 2);
        assert_eq!(TodoError::InvalidId("abc".to_string()).exit_code(), 3);
        assert_eq!(TodoError::TodoNotFound(7).exit_code(), 4);
        assert_eq!(TodoError::Config("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_not_todo_directory_suggestion() {
        let err = TodoError::NotTodoDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("todos init"));
        assert!(msg.contains("TODOS_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_todo_not_found_suggestions() {
        let err = TodoError::TodoNotFound(42);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("No todo with id 42"));
        assert!(msg.contains("todos list"));
    }

    #[test]
    fn test_invalid_store_name_example() {
        let err = TodoError::InvalidStoreName("../etc".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'../etc'"));
        assert!(msg.contains("todos config name"));
    }

    #[test]
    fn test_corrupt_json_suggestion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let msg = TodoError::from(json_err).display_with_suggestions();
        assert!(msg.contains("not valid JSON"));
        assert!(msg.contains("todos clear"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TodoError::Config("bad key".to_string());
        assert_eq!(err.display_with_suggestions(), "Configuration error: bad key");
    }
}
