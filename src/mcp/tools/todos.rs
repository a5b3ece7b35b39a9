//! MCP tools for Todo management.

use rmcp::{ErrorData as McpError, model::CallToolResult, schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::db::{Database, TodoFields, TodoToolResponse};
use crate::mcp::sampling::{EnrichmentClient, SamplingPeer};
use crate::mcp::tools::{json_result, map_db_error};
use crate::service::TodoService;

/// System instruction for the fact generated alongside a new todo.
pub const FACT_SYSTEM_PROMPT: &str = "You are an expert productivity assistant. Provide one interesting fact related to the submitted todo item.";

/// User instruction for the fact generated alongside a new todo.
pub fn fact_user_prompt(title: &str) -> String {
    format!("Share an interesting fact about this todo item: {}", title)
}

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FetchTodoParams {
    #[schemars(description = "id for the Item")]
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MakeTodoParams {
    #[schemars(description = "Title for the Todo")]
    pub title: String,
    #[schemars(description = "Description for the Todo")]
    #[serde(default)]
    pub description: Option<String>,
    #[schemars(description = "Is the Todo completed?")]
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ChangeTodoParams {
    #[schemars(description = "id for the Item")]
    pub id: i64,
    #[schemars(description = "Title for the Todo")]
    pub title: String,
    #[schemars(description = "Description for the Todo")]
    #[serde(default)]
    pub description: Option<String>,
    #[schemars(description = "Is the Todo completed?")]
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RemoveTodoParams {
    #[schemars(description = "id for the Item")]
    pub id: i64,
}

// =============================================================================
// Todo Tools
// =============================================================================

/// Todo tool handlers.
///
/// Generic over `D: Database`; every call goes through [`TodoService`].
pub struct TodoTools<D: Database> {
    service: TodoService<D>,
    enrichment: EnrichmentClient,
}

impl<D: Database> Clone for TodoTools<D> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            enrichment: self.enrichment,
        }
    }
}

impl<D: Database + 'static> TodoTools<D> {
    pub fn new(db: Arc<D>, enrichment: EnrichmentClient) -> Self {
        Self {
            service: TodoService::new(db),
            enrichment,
        }
    }

    pub fn service(&self) -> &TodoService<D> {
        &self.service
    }

    pub async fn fetch_all_todos(&self) -> Result<CallToolResult, McpError> {
        let todos = self.service.list_all().await.map_err(map_db_error)?;
        json_result(&todos)
    }

    /// Absent todos are reported as JSON `null`, not as an error.
    pub async fn fetch_todo_by_id(
        &self,
        params: FetchTodoParams,
    ) -> Result<CallToolResult, McpError> {
        let todo = self
            .service
            .get_by_id(params.id)
            .await
            .map_err(map_db_error)?;
        json_result(&todo)
    }

    /// Create a todo, then ask the client for a related fact.
    ///
    /// The todo is persisted before sampling starts; a failed or timed out
    /// sampling request leaves it intact and yields an empty fact.
    pub async fn make_todo<P: SamplingPeer>(
        &self,
        params: MakeTodoParams,
        peer: &P,
    ) -> Result<CallToolResult, McpError> {
        let fields = TodoFields {
            title: params.title,
            description: params.description,
            completed: params.completed,
        };
        fields.validate().map_err(map_db_error)?;

        let todo = self.service.create(fields).await.map_err(map_db_error)?;

        let fact = match self
            .enrichment
            .request_enrichment(peer, FACT_SYSTEM_PROMPT, &fact_user_prompt(&todo.title))
            .await
        {
            Ok(fact) => fact,
            Err(e) => {
                warn!(id = todo.id, error = %e, "Enrichment failed, returning empty fact");
                String::new()
            }
        };

        json_result(&TodoToolResponse { todo, fact })
    }

    /// Absent todos are reported as JSON `null`, not as an error.
    pub async fn change_todo(&self, params: ChangeTodoParams) -> Result<CallToolResult, McpError> {
        let fields = TodoFields {
            title: params.title,
            description: params.description,
            completed: params.completed,
        };
        fields.validate().map_err(map_db_error)?;

        let todo = self
            .service
            .update(params.id, fields)
            .await
            .map_err(map_db_error)?;
        json_result(&todo)
    }

    pub async fn remove_todo(&self, params: RemoveTodoParams) -> Result<CallToolResult, McpError> {
        let deleted = self
            .service
            .delete(params.id)
            .await
            .map_err(map_db_error)?;
        json_result(&deleted)
    }
}
