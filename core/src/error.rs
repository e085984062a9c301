//! Error types for the todo collection.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the todo does not exist" from "the storage file is broken." I/O and JSON
//! failures convert via `#[from]` so store and service code can use `?`
//! directly on `std::fs` and `serde_json` calls.

use thiserror::Error;

/// Errors returned by [`TodoStore`](crate::TodoStore) and
/// [`TodoService`](crate::TodoService) operations.
#[derive(Debug, Error)]
pub enum TodoError {
    /// No todo with the given id exists in the collection.
    #[error("todo {0} not found")]
    NotFound(u64),

    /// Reading or writing the backing file failed.
    #[error("failed to access todo file: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file does not contain a valid todo collection.
    #[error("failed to parse todo data: {0}")]
    Parse(#[from] serde_json::Error),
}
