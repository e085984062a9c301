//! Domain types for the todo service.
//!
//! # Design
//! `Todo` is the persisted entity; `CreateTodo` and `UpdateTodo` are the
//! request-side payloads. Creation defaults live on the types themselves via
//! `#[serde(default)]`, so the schema layer fills them in before the service
//! ever sees a payload. `due_date` is a timezone-free `NaiveDateTime`: it
//! serializes as an ISO-8601 string and as an explicit `null` when unset,
//! which is what persisted files and API responses both carry.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Urgency bucket for a todo. Serializes as `"high"` / `"medium"` / `"low"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// A single todo item as stored on disk and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<NaiveDateTime>,
}

/// Request payload for creating a new todo. `title` and `description` are
/// required; every other field falls back to its default when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<NaiveDateTime>,
}

/// Request payload for partially updating an existing todo. Only the fields
/// present and non-null in the JSON are applied; omitted fields keep their
/// stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDateTime>,
}
