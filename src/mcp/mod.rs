//! Model Context Protocol (MCP) server implementation
//!
//! The server exposes the todo tools and prompts over Streamable HTTP or STDIO.
//!
//! # Architecture
//!
//! - **server**: `ServerHandler` that registers tools and prompts
//! - **tools**: Tool logic over the todo service
//! - **prompts**: Static prompt templates
//! - **sampling**: Capability-gated sampling requests to the client
//! - **service**: Streamable HTTP service factory

pub mod prompts;
pub mod sampling;
pub mod server;
mod service;
pub mod tools;

#[cfg(test)]
mod prompts_test;
#[cfg(test)]
mod service_test;

pub use sampling::{EnrichmentClient, McpSamplingPeer, SamplingError, SamplingPeer};
pub use server::McpServer;
pub use service::create_mcp_service;
