//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn validation_error_displays_correctly() {
    let err = DbError::Validation {
        message: "title must not be empty".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Validation error: title must not be empty"
    );
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "disk I/O error".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: disk I/O error");
}

#[test]
fn connection_error_has_help() {
    use miette::Diagnostic;

    let err = DbError::Connection {
        message: "unable to open database file".to_string(),
    };
    assert!(err.help().is_some());
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("todo_mcp::db::connection_error".to_string())
    );
}

#[test]
fn db_result_propagates_with_question_mark() {
    fn inner() -> DbResult<()> {
        Err(DbError::Migration {
            message: "bad checksum".to_string(),
        })
    }

    fn outer() -> DbResult<u8> {
        inner()?;
        Ok(1)
    }

    let err = outer().unwrap_err();
    assert!(matches!(err, DbError::Migration { .. }));
}
