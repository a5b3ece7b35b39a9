//! HTTP route configuration.

use axum::Router;
use axum::routing::get;
use rmcp::transport::streamable_http_server::StreamableHttpService;

use super::handlers;
use crate::db::Database;
use crate::mcp::McpServer;

/// Create the HTTP router: MCP endpoint plus health check.
pub fn create_router<D: Database + 'static>(
    mcp_service: StreamableHttpService<McpServer<D>>,
) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest_service("/mcp", mcp_service)
}
