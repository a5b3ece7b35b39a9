//! Server runtime: configuration, tracing, and transports.
//!
//! The binary picks one of two transports:
//! - [`run`]: Streamable HTTP MCP endpoint at `/mcp` plus `/health`
//! - [`run_stdio`]: a single MCP session over stdin/stdout

mod args;
mod handlers;
mod routes;

#[cfg(test)]
mod mod_test;

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use miette::Diagnostic;
use rmcp::ServiceExt;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::{Database, DbError};
use crate::mcp::{EnrichmentClient, McpServer, create_mcp_service};
use crate::mcp::sampling::DEFAULT_SAMPLING_TIMEOUT;

pub use args::ServeArgs;
pub use routes::create_router;

pub const HOST_ENV: &str = "TODO_MCP_HOST";
pub const PORT_ENV: &str = "TODO_MCP_PORT";
pub const DB_ENV: &str = "TODO_MCP_DB";
pub const SAMPLING_TIMEOUT_ENV: &str = "TODO_MCP_SAMPLING_TIMEOUT";

pub(crate) const DEFAULT_HOST: [u8; 4] = [127, 0, 0, 1];
pub(crate) const DEFAULT_PORT: u16 = 8080;

/// Server runtime errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(todo_mcp::api::io))]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    #[diagnostic(code(todo_mcp::api::database))]
    Database(#[from] DbError),

    #[error("MCP transport error: {message}")]
    #[diagnostic(code(todo_mcp::api::transport))]
    Transport { message: String },

    #[error("Failed to initialize tracing: {message}")]
    #[diagnostic(code(todo_mcp::api::tracing))]
    Tracing { message: String },
}

/// Server configuration.
///
/// Built from [`ServeArgs`], which resolves CLI flag > environment variable > default.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// SQLite file; `None` keeps everything in memory
    pub db_path: Option<PathBuf>,
    /// Upper bound for a single sampling request
    pub sampling_timeout: Duration,
    /// Log verbosity from repeated `-v` flags (used when RUST_LOG is unset)
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            db_path: None,
            sampling_timeout: DEFAULT_SAMPLING_TIMEOUT,
            verbosity: 0,
        }
    }
}

impl Config {
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_db_path(mut self, db_path: PathBuf) -> Self {
        self.db_path = Some(db_path);
        self
    }

    pub fn with_sampling_timeout(mut self, timeout: Duration) -> Self {
        self.sampling_timeout = timeout;
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn enrichment(&self) -> EnrichmentClient {
        EnrichmentClient::new(self.sampling_timeout)
    }

    /// Default log filter for this verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "todo_mcp=info,rmcp=info,tower_http=info",
            1 => "todo_mcp=debug,rmcp=info,tower_http=debug",
            _ => "todo_mcp=trace,rmcp=debug,tower_http=trace",
        }
    }
}

/// Initialize tracing subscriber with env filter
///
/// Call once, before opening the database. STDIO mode writes logs to stderr
/// without colors so stdout carries only protocol messages.
pub fn init_tracing(config: &Config, stdio: bool) -> Result<(), ApiError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter().into());

    let registry = tracing_subscriber::registry().with(filter);

    let result = if stdio {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| ApiError::Tracing {
        message: e.to_string(),
    })
}

/// Serve MCP over Streamable HTTP until Ctrl-C.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    let ct = CancellationToken::new();
    let mcp_service = create_mcp_service(db, config.enrichment(), ct.clone());
    let app = create_router(mcp_service).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("MCP server listening on http://{}/mcp", addr);

    let shutdown = ct.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutting down");
            shutdown.cancel();
        })
        .await?;

    Ok(())
}

/// Serve a single MCP session over stdin/stdout.
pub async fn run_stdio<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    let server = McpServer::new(db, config.enrichment());
    info!("MCP server running on stdio");

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ApiError::Transport {
            message: e.to_string(),
        })?;

    let reason = service.waiting().await.map_err(|e| ApiError::Transport {
        message: e.to_string(),
    })?;
    info!(?reason, "MCP session ended");

    Ok(())
}
