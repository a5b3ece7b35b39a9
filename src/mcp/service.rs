//! MCP Streamable HTTP service creation
//!
//! This module provides functions to create the MCP service
//! that can be integrated with an Axum router.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::db::Database;

use super::sampling::EnrichmentClient;
use super::server::McpServer;

/// Create MCP Streamable HTTP service
///
/// Every session gets its own `McpServer`, all sharing one database.
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use todo_mcp::db::{Database, SqliteDatabase};
/// # use todo_mcp::mcp::{EnrichmentClient, create_mcp_service};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let db = SqliteDatabase::in_memory().await?;
/// # db.migrate().await?;
///
/// let ct = CancellationToken::new();
/// let mcp_service = create_mcp_service(db, EnrichmentClient::default(), ct);
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service<D: Database + 'static>(
    db: impl Into<Arc<D>>,
    enrichment: EnrichmentClient,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<D>> {
    let db = db.into();

    // Service factory: creates new McpServer instance per session
    // Note: Returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<McpServer<D>, std::io::Error> {
        Ok(McpServer::new(Arc::clone(&db), enrichment))
    };

    let config = StreamableHttpServerConfig {
        stateful_mode: true,
        cancellation_token,
        ..Default::default()
    };

    // Create service with local session manager
    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
