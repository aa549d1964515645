//! Domain layer - Todo items and queries

pub mod query;
pub mod todo;

pub use query::{parse_id, ReadQuery, TodoQuery};
pub use todo::{NewTodo, Todo, TodoCount, TodoId, TodoPatch};
