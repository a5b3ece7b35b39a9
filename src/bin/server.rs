//! Todo MCP server binary.
//!
//! Opens the SQLite store (a file when `--db`/`TODO_MCP_DB` is given,
//! in-memory otherwise), applies migrations, and hands the database to the
//! selected transport.

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use todo_mcp::api::{self, ApiError, Config, ServeArgs};
use todo_mcp::db::{Database, DbError, SqliteDatabase};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(todo_mcp::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(todo_mcp::binary::io))]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    #[diagnostic(code(todo_mcp::binary::api))]
    Api(#[from] ApiError),
}

async fn open_database(config: &Config) -> Result<SqliteDatabase, BinaryError> {
    let db = match &config.db_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            SqliteDatabase::open(path).await?
        }
        None => SqliteDatabase::in_memory().await?,
    };

    db.migrate().await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let args = ServeArgs::parse();
    let config = args.to_config();

    // Before opening the database so its startup events are recorded
    api::init_tracing(&config, args.stdio)?;

    let db = open_database(&config).await?;

    if args.stdio {
        api::run_stdio(config, db).await?;
    } else {
        api::run(config, db).await?;
    }

    Ok(())
}
