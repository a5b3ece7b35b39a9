//! SQLite TodoRepository implementation.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::db::{DbError, DbResult, Todo, TodoFields, TodoRepository};

/// SQLx-backed todo repository.
pub struct SqliteTodoRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn todo_from_row(row: &SqliteRow) -> Result<Todo, sqlx::Error> {
    Ok(Todo {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        completed: row.try_get("completed")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn database_error(e: sqlx::Error) -> DbError {
    DbError::Database {
        message: e.to_string(),
    }
}

impl TodoRepository for SqliteTodoRepository<'_> {
    async fn create(&self, fields: &TodoFields, now: DateTime<Utc>) -> DbResult<Todo> {
        let result = sqlx::query(
            "INSERT INTO todo (title, description, completed, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.completed)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await
        .map_err(database_error)?;

        Ok(Todo {
            id: result.last_insert_rowid(),
            title: fields.title.clone(),
            description: fields.description.clone(),
            completed: fields.completed,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get(&self, id: i64) -> DbResult<Option<Todo>> {
        let row = sqlx::query(
            "SELECT id, title, description, completed, created_at, updated_at FROM todo WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref()
            .map(todo_from_row)
            .transpose()
            .map_err(database_error)
    }

    async fn list(&self) -> DbResult<Vec<Todo>> {
        let rows = sqlx::query(
            "SELECT id, title, description, completed, created_at, updated_at FROM todo ORDER BY id ASC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(database_error)?;

        rows.iter()
            .map(todo_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(database_error)
    }

    async fn update(&self, todo: &Todo) -> DbResult<bool> {
        let result = sqlx::query(
            "UPDATE todo SET title = ?, description = ?, completed = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .bind(todo.updated_at)
        .bind(todo.id)
        .execute(self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM todo WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> DbResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM todo")
            .fetch_one(self.pool)
            .await
            .map_err(database_error)
    }
}
