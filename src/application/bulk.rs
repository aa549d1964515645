//! Bulk actions over a whole collection

use crate::application::Model;
use crate::domain::{TodoPatch, TodoQuery};
use crate::error::Result;
use crate::infrastructure::LocalStorage;

/// Mark every item as `completed` (or active). Returns how many items changed.
pub fn toggle_all<S: LocalStorage>(model: &mut Model<S>, completed: bool) -> Result<usize> {
    let pending = model.read(TodoQuery::by_completed(!completed))?;
    for todo in &pending {
        model.update(todo.id, TodoPatch::completed(completed))?;
    }
    Ok(pending.len())
}

/// Remove every completed item. Returns how many were removed.
pub fn clear_completed<S: LocalStorage>(model: &mut Model<S>) -> Result<usize> {
    let completed = model.read(TodoQuery::by_completed(true))?;
    for todo in &completed {
        model.remove(todo.id)?;
    }
    Ok(completed.len())
}
