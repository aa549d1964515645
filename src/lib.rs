//! todos - Minimal terminal todo list
//!
//! A `Model` shapes user input and delegates to a `Store`, which keeps the
//! whole todo collection as one JSON document in a local key/value storage.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::TodoError;
