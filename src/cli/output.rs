//! Output formatting utilities

use crate::domain::{Todo, TodoCount};

/// Format a list of todos for display
pub fn format_todo_list(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos found".to_string();
    }

    let mut output = String::new();
    for todo in todos {
        let mark = if todo.completed { 'x' } else { ' ' };
        output.push_str(&format!("[{}] {}  {}\n", mark, todo.id, todo.title));
    }
    output
}

/// Format counts as a single summary line
pub fn format_count(count: &TodoCount) -> String {
    format!(
        "{} total, {} active, {} completed",
        count.total, count.active, count.completed
    )
}

/// Format collection names, marking the active one.
pub fn format_store_list(stores: &[String], active: &str) -> String {
    if stores.is_empty() {
        return "No stores found".to_string();
    }

    let mut output = String::new();
    for store in stores {
        let marker = if store == active { '*' } else { ' ' };
        output.push_str(&format!("{} {}\n", marker, store));
    }

    output
}
