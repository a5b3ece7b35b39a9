//! Sampling ("enrichment") requests to the connected MCP client.
//!
//! The server can ask the client to generate text on its behalf, but only if
//! the client advertised the `sampling` capability during initialization.
//! [`SamplingPeer`] abstracts the three peer interactions involved so the
//! enrichment flow can be exercised without a live client.

use std::future::Future;
use std::time::Duration;

use miette::Diagnostic;
use rmcp::model::{
    Content, CreateMessageRequestParam, LoggingLevel, LoggingMessageNotificationParam, Role,
    SamplingMessage,
};
use rmcp::{Peer, RoleServer};
use thiserror::Error;
use tracing::{debug, info};

#[cfg(test)]
use mockall::automock;

/// Notice sent to the client right before a sampling request.
pub const START_SAMPLING_NOTICE: &str = "Start sampling";

/// Default upper bound for a single sampling round-trip.
pub const DEFAULT_SAMPLING_TIMEOUT: Duration = Duration::from_secs(30);

const SAMPLING_MAX_TOKENS: u32 = 256;
const LOGGER_NAME: &str = "todo-mcp";

/// Sampling failures.
#[derive(Error, Diagnostic, Debug)]
pub enum SamplingError {
    #[error("Sampling request failed: {message}")]
    #[diagnostic(code(todo_mcp::sampling::transport))]
    Transport { message: String },

    #[error("Sampling request timed out after {millis}ms")]
    #[diagnostic(
        code(todo_mcp::sampling::timeout),
        help("Raise --sampling-timeout if the client's model is slow to respond.")
    )]
    Timeout { millis: u128 },

    #[error("Sampling response did not contain text content")]
    #[diagnostic(code(todo_mcp::sampling::unexpected_content))]
    UnexpectedContent,
}

/// The client-side capabilities needed for enrichment. Can be mocked in tests.
#[cfg_attr(test, automock)]
pub trait SamplingPeer: Send + Sync {
    /// Whether the client advertised the sampling capability.
    fn supports_sampling(&self) -> bool;

    /// Send an informational logging notification.
    fn notify(&self, message: &str) -> impl Future<Output = Result<(), SamplingError>> + Send;

    /// Single-turn generation: system prompt plus one user message in, text out.
    fn create_message(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> impl Future<Output = Result<String, SamplingError>> + Send;
}

/// [`SamplingPeer`] backed by a live rmcp server-side peer.
pub struct McpSamplingPeer {
    peer: Peer<RoleServer>,
}

impl McpSamplingPeer {
    pub fn new(peer: Peer<RoleServer>) -> Self {
        Self { peer }
    }
}

impl SamplingPeer for McpSamplingPeer {
    fn supports_sampling(&self) -> bool {
        self.peer
            .peer_info()
            .is_some_and(|info| info.capabilities.sampling.is_some())
    }

    async fn notify(&self, message: &str) -> Result<(), SamplingError> {
        self.peer
            .notify_logging_message(LoggingMessageNotificationParam {
                level: LoggingLevel::Info,
                logger: Some(LOGGER_NAME.to_string()),
                data: serde_json::Value::String(message.to_string()),
            })
            .await
            .map_err(|e| SamplingError::Transport {
                message: e.to_string(),
            })
    }

    async fn create_message(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, SamplingError> {
        let request = CreateMessageRequestParam {
            messages: vec![SamplingMessage {
                role: Role::User,
                content: Content::text(user_prompt),
            }],
            model_preferences: None,
            system_prompt: Some(system_prompt.to_string()),
            include_context: None,
            temperature: None,
            max_tokens: SAMPLING_MAX_TOKENS,
            stop_sequences: None,
            metadata: None,
        };

        let result =
            self.peer
                .create_message(request)
                .await
                .map_err(|e| SamplingError::Transport {
                    message: e.to_string(),
                })?;

        result
            .message
            .content
            .as_text()
            .map(|text| text.text.clone())
            .ok_or(SamplingError::UnexpectedContent)
    }
}

/// Capability-gated, time-bounded sampling.
#[derive(Debug, Clone, Copy)]
pub struct EnrichmentClient {
    timeout: Duration,
}

impl Default for EnrichmentClient {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLING_TIMEOUT)
    }
}

impl EnrichmentClient {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ask the peer to generate text.
    ///
    /// Returns an empty string, without contacting the peer, when sampling is
    /// not supported. Transport failures and timeouts are returned to the
    /// caller.
    pub async fn request_enrichment<P: SamplingPeer>(
        &self,
        peer: &P,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, SamplingError> {
        if !peer.supports_sampling() {
            debug!("Client does not support sampling, skipping enrichment");
            return Ok(String::new());
        }

        info!("Creating sampling request");

        // Fire-and-forget: a lost notice must not block the request itself.
        if let Err(e) = peer.notify(START_SAMPLING_NOTICE).await {
            debug!(error = %e, "Failed to send sampling notice");
        }

        tokio::time::timeout(self.timeout, peer.create_message(system_prompt, user_prompt))
            .await
            .map_err(|_| SamplingError::Timeout {
                millis: self.timeout.as_millis(),
            })?
    }
}
