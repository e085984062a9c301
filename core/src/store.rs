//! Flat-file persistence for the todo collection.
//!
//! The entire collection lives in one JSON file: a bare array of todo
//! records, pretty-printed so the file stays readable (and editable) by
//! hand. There is no partial update: every save rewrites the whole file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TodoError;
use crate::types::Todo;

/// Handle to the JSON file holding the todo collection.
///
/// The store holds only the path. Each [`load`](TodoStore::load) and
/// [`save`](TodoStore::save) opens the file fresh, so two stores pointed
/// at the same path observe each other's writes.
#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    /// Creates a store backed by the file at `path`. The file is not
    /// touched until [`initialize`](TodoStore::initialize) or
    /// [`save`](TodoStore::save) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file with an empty collection, along with any
    /// missing parent directories. An existing file is left untouched.
    pub fn initialize(&self) -> Result<(), TodoError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        self.save(&[])
    }

    /// Reads and parses the whole collection. A missing file is an error;
    /// call [`initialize`](TodoStore::initialize) once at startup.
    pub fn load(&self) -> Result<Vec<Todo>, TodoError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Serializes `todos` and rewrites the whole file.
    pub fn save(&self, todos: &[Todo]) -> Result<(), TodoError> {
        let raw = serde_json::to_string_pretty(todos)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
