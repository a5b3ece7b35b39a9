//! MCP server implementation
//!
//! `McpServer` is the rmcp `ServerHandler`. It registers the five todo tools
//! and the two prompt templates; the tool bodies live in [`TodoTools`] and the
//! prompt texts in [`super::prompts`].

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{
        router::{prompt::PromptRouter, tool::ToolRouter},
        wrapper::Parameters,
    },
    model::{CallToolResult, GetPromptResult, Implementation, ServerCapabilities, ServerInfo},
    prompt, prompt_handler, prompt_router,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::db::Database;

use super::prompts::{self, CreateTodoPromptArgs};
use super::sampling::{EnrichmentClient, McpSamplingPeer};
use super::tools::{ChangeTodoParams, FetchTodoParams, MakeTodoParams, RemoveTodoParams, TodoTools};

pub const SERVER_NAME: &str = "todo-mcp";

const SERVER_INSTRUCTIONS: &str = "Todo MCP Server - Manage todo items. \
Tools: fetch-all-todos, fetch-todo-by-id, make-todo, change-todo, remove-todo. \
Prompts: create-todo-prompt, list-todos-prompt.";

/// Main MCP server coordinator
///
/// Generic over `D: Database` for zero-cost abstraction (no dynamic dispatch).
pub struct McpServer<D: Database> {
    tools: TodoTools<D>,
    tool_router: ToolRouter<Self>,
    prompt_router: PromptRouter<Self>,
}

// Manual Clone impl - D itself does not need to be Clone, only the Arc inside
impl<D: Database + 'static> Clone for McpServer<D> {
    fn clone(&self) -> Self {
        Self {
            tools: self.tools.clone(),
            tool_router: self.tool_router.clone(),
            prompt_router: self.prompt_router.clone(),
        }
    }
}

#[tool_router]
impl<D: Database + 'static> McpServer<D> {
    /// Create a new MCP server over the given database.
    pub fn new(db: impl Into<Arc<D>>, enrichment: EnrichmentClient) -> Self {
        Self {
            tools: TodoTools::new(db.into(), enrichment),
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    /// Tool logic, callable without a request context.
    pub fn tools(&self) -> &TodoTools<D> {
        &self.tools
    }

    /// Get the tool router for this handler
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    /// Get the prompt router for this handler
    pub fn prompt_routes(&self) -> &PromptRouter<Self> {
        &self.prompt_router
    }

    #[tool(name = "fetch-all-todos", description = "Gets all Todo items")]
    pub async fn fetch_all_todos(&self) -> Result<CallToolResult, McpError> {
        self.tools.fetch_all_todos().await
    }

    #[tool(
        name = "fetch-todo-by-id",
        description = "Gets a Todo item by ID. Returns null when no item has that ID."
    )]
    pub async fn fetch_todo_by_id(
        &self,
        params: Parameters<FetchTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        self.tools.fetch_todo_by_id(params.0).await
    }

    #[tool(
        name = "make-todo",
        description = "Creates a new Todo item. The response holds the stored todo and, if the client supports sampling, an interesting fact about it."
    )]
    pub async fn make_todo(
        &self,
        params: Parameters<MakeTodoParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let peer = McpSamplingPeer::new(context.peer);
        self.tools.make_todo(params.0, &peer).await
    }

    #[tool(
        name = "change-todo",
        description = "Updates an existing Todo item, replacing title, description and completion state. Returns null when no item has that ID."
    )]
    pub async fn change_todo(
        &self,
        params: Parameters<ChangeTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        self.tools.change_todo(params.0).await
    }

    #[tool(
        name = "remove-todo",
        description = "Deletes a Todo item by ID. Returns true if it existed, false otherwise."
    )]
    pub async fn remove_todo(
        &self,
        params: Parameters<RemoveTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        self.tools.remove_todo(params.0).await
    }
}

#[prompt_router]
impl<D: Database + 'static> McpServer<D> {
    #[prompt(
        name = "create-todo-prompt",
        description = "Prompt to create a new Todo item"
    )]
    async fn create_todo_prompt(
        &self,
        Parameters(args): Parameters<CreateTodoPromptArgs>,
    ) -> Result<GetPromptResult, McpError> {
        Ok(prompts::create_todo_prompt(&args))
    }

    #[prompt(name = "list-todos-prompt", description = "Prompt to list all Todo items")]
    async fn list_todos_prompt(&self) -> Result<GetPromptResult, McpError> {
        Ok(prompts::list_todos_prompt())
    }
}

#[tool_handler]
#[prompt_handler]
impl<D: Database + 'static> ServerHandler for McpServer<D> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_logging()
                .enable_prompts()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}
