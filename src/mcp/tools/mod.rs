//! MCP tool implementations
//!
//! Tool logic lives here, independent of the rmcp router, so it can be
//! exercised directly in tests. The router wrappers are in `server`.

mod todos;


use rmcp::{ErrorData as McpError, model::CallToolResult, model::Content};
use serde::Serialize;

use crate::db::DbError;

pub use todos::{
    ChangeTodoParams, FetchTodoParams, MakeTodoParams, RemoveTodoParams, TodoTools,
    FACT_SYSTEM_PROMPT, fact_user_prompt,
};

/// Map a database error onto the closest MCP error code.
pub(crate) fn map_db_error(err: DbError) -> McpError {
    match err {
        DbError::Validation { message } => McpError::invalid_params(
            "validation_error",
            Some(serde_json::json!({"error": message})),
        ),
        other => McpError::internal_error(
            "database_error",
            Some(serde_json::json!({"error": other.to_string()})),
        ),
    }
}

/// Render a value as a pretty-printed JSON text result.
pub(crate) fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(
            "serialization_error",
            Some(serde_json::json!({"error": e.to_string()})),
        )
    })?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
