//! Command-line arguments for the server binary.
//!
//! Every option can also come from a `TODO_MCP_*` environment variable;
//! clap rejects unparseable values from either source.

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use super::{
    Config, DB_ENV, DEFAULT_HOST, DEFAULT_PORT, HOST_ENV, PORT_ENV, SAMPLING_TIMEOUT_ENV,
};
use crate::mcp::sampling::DEFAULT_SAMPLING_TIMEOUT;

#[derive(Parser, Debug)]
#[command(name = "todo-mcp")]
#[command(author, version, about = "Todo MCP server", long_about = None)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long, env = HOST_ENV, default_value_t = IpAddr::from(DEFAULT_HOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SQLite database file (in-memory when omitted)
    #[arg(long, env = DB_ENV)]
    pub db: Option<PathBuf>,

    /// Serve a single session over stdin/stdout instead of HTTP
    #[arg(long)]
    pub stdio: bool,

    /// Seconds to wait for a sampling response
    #[arg(
        long,
        env = SAMPLING_TIMEOUT_ENV,
        value_name = "SECS",
        default_value_t = DEFAULT_SAMPLING_TIMEOUT.as_secs()
    )]
    pub sampling_timeout: u64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ServeArgs {
    pub fn to_config(&self) -> Config {
        let config = Config::default()
            .with_host(self.host)
            .with_port(self.port)
            .with_sampling_timeout(Duration::from_secs(self.sampling_timeout))
            .with_verbosity(self.verbose);

        match &self.db {
            Some(path) => config.with_db_path(path.clone()),
            None => config,
        }
    }
}
