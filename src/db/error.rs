//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Validation error: {message}")]
    #[diagnostic(code(todo_mcp::db::validation_error))]
    Validation { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(todo_mcp::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(todo_mcp::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(todo_mcp::db::connection_error),
        help("Check that the database path is writable, or omit --db to use an in-memory store.")
    )]
    Connection { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
