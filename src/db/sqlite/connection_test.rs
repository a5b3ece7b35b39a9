//! Tests for SQLite database connection and migrations.

use tempfile::TempDir;

use crate::db::{Database, SqliteDatabase, TodoFields, TodoRepository};

#[tokio::test(flavor = "multi_thread")]
async fn migrate_creates_todo_table() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("Migration should succeed");

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    // _sqlx_migrations is created by sqlx for migration tracking.
    // sqlite_sequence exists because the todo table uses AUTOINCREMENT.
    for table in ["_sqlx_migrations", "sqlite_sequence", "todo"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("First migration should succeed");
    db.migrate().await.expect("Second migration should succeed");
}

#[tokio::test(flavor = "multi_thread")]
async fn in_memory_data_survives_across_queries() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();

    db.todos()
        .create(&TodoFields::new("Persist me"), chrono::Utc::now())
        .await
        .unwrap();

    // Give the pool a chance to recycle connections; the single pinned
    // connection must keep the in-memory database alive.
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    assert_eq!(db.todos().count().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_file_and_persists_between_connections() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("todos.db");

    {
        let db = SqliteDatabase::open(&path).await.expect("Open should succeed");
        db.migrate().await.unwrap();
        db.todos()
            .create(&TodoFields::new("On disk"), chrono::Utc::now())
            .await
            .unwrap();
        db.pool().close().await;
    }

    assert!(path.exists());

    let reopened = SqliteDatabase::open(&path).await.unwrap();
    reopened.migrate().await.unwrap();
    let todos = reopened.todos().list().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title, "On disk");
}

#[tokio::test(flavor = "multi_thread")]
async fn open_fails_for_unwritable_location() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("dir").join("todos.db");

    let result = SqliteDatabase::open(&path).await;
    assert!(matches!(result, Err(crate::db::DbError::Connection { .. })));
}
