//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::db::{
    DbResult,
    models::{Todo, TodoFields},
};

/// Repository for Todo operations.
///
/// Absence is reported through `Option`/`bool` rather than an error.
pub trait TodoRepository {
    /// Insert a new todo stamped with `now` for both timestamps.
    fn create(
        &self,
        fields: &TodoFields,
        now: DateTime<Utc>,
    ) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Get a todo by ID.
    fn get(&self, id: i64) -> impl Future<Output = DbResult<Option<Todo>>> + Send;

    /// Get all todos in insertion order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Todo>>> + Send;

    /// Persist the mutable fields and `updated_at`. Returns false if no row matched.
    fn update(&self, todo: &Todo) -> impl Future<Output = DbResult<bool>> + Send;

    /// Delete a todo by ID. Returns false if no row matched.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<bool>> + Send;

    /// Number of stored todos.
    fn count(&self) -> impl Future<Output = DbResult<i64>> + Send;
}

/// Combined database interface.
///
/// Repositories are exposed via associated types to avoid dynamic dispatch.
pub trait Database: Send + Sync {
    type Todos<'a>: TodoRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the todo repository.
    fn todos(&self) -> Self::Todos<'_>;
}
