//! Domain models for the todo database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};

/// A stored todo item.
///
/// `id` and both timestamps are owned by the store and the service layer;
/// callers only ever supply [`TodoFields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Replace the caller-controlled fields and refresh `updated_at`.
    ///
    /// Every update moves `updated_at` strictly forward, by at least one
    /// microsecond, even if the clock stalls or goes backwards.
    pub fn apply(&mut self, fields: TodoFields, now: DateTime<Utc>) {
        self.title = fields.title;
        self.description = fields.description;
        self.completed = fields.completed;
        self.updated_at = now.max(self.updated_at + TimeDelta::microseconds(1));
    }
}

/// Caller-controlled todo fields, used both to create and to update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoFields {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl TodoFields {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// A todo needs a title with at least one non-whitespace character.
    pub fn validate(&self) -> DbResult<()> {
        if self.title.trim().is_empty() {
            return Err(DbError::Validation {
                message: "title must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Response envelope for a freshly created todo plus its enrichment text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoToolResponse {
    pub todo: Todo,
    /// Text generated by the client, empty when sampling was unavailable.
    pub fact: String,
}
