//! Todo service: timestamp stamping and absence mapping over the store.

use std::sync::Arc;

use tracing::{debug, info};

use crate::db::utils::current_timestamp;
use crate::db::{Database, DbResult, Todo, TodoFields, TodoRepository};

/// Façade over the todo repository.
///
/// Generic over `D: Database`; the store is injected at construction.
pub struct TodoService<D: Database> {
    db: Arc<D>,
}

impl<D: Database> Clone for TodoService<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> TodoService<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    /// Every stored todo, in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<Todo>> {
        let todos = self.db.todos().list().await?;
        debug!(count = todos.len(), "Listed todos");
        Ok(todos)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Todo>> {
        let todo = self.db.todos().get(id).await?;
        debug!(id, found = todo.is_some(), "Fetched todo");
        Ok(todo)
    }

    /// Persist a new todo with fresh `created_at`/`updated_at` stamps.
    pub async fn create(&self, fields: TodoFields) -> DbResult<Todo> {
        let todo = self.db.todos().create(&fields, current_timestamp()).await?;
        info!(id = todo.id, title = %todo.title, "Created todo");
        Ok(todo)
    }

    /// Replace title, description and completion state of an existing todo.
    ///
    /// Returns `None` without writing when the todo does not exist.
    pub async fn update(&self, id: i64, fields: TodoFields) -> DbResult<Option<Todo>> {
        let repo = self.db.todos();

        let Some(mut todo) = repo.get(id).await? else {
            debug!(id, "Update skipped, todo not found");
            return Ok(None);
        };

        todo.apply(fields, current_timestamp());

        // The row may have been deleted between the read and the write.
        if !repo.update(&todo).await? {
            debug!(id, "Update skipped, todo deleted concurrently");
            return Ok(None);
        }

        info!(id, "Updated todo");
        Ok(Some(todo))
    }

    /// Remove a todo. Returns whether it existed.
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        let deleted = self.db.todos().delete(id).await?;
        if deleted {
            info!(id, "Deleted todo");
        } else {
            debug!(id, "Delete skipped, todo not found");
        }
        Ok(deleted)
    }

    pub async fn count(&self) -> DbResult<i64> {
        self.db.todos().count().await
    }
}
