//! Storage and domain logic for the todo service.
//!
//! # Overview
//! Persists a todo collection to a single flat JSON file and exposes the
//! CRUD-plus-search operations over it. The crate is fully synchronous;
//! the server crate owns the async runtime and wraps the service in a lock.
//!
//! # Design
//! - `TodoStore` is stateless — it holds only the file path. Every load and
//!   save goes back to disk, so the file is the one source of truth.
//! - `TodoService` layers the operations on top and takes `&mut self` for
//!   mutations, so a shared service serializes its read-modify-write cycles.
//! - Payload validation (non-empty titles, search query presence) belongs to
//!   the API layer; the core applies whatever it is handed.

pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::TodoError;
pub use service::TodoService;
pub use store::TodoStore;
pub use types::{CreateTodo, Priority, Todo, UpdateTodo};
