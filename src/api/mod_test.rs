use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use super::{ApiError, Config, init_tracing};

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.host, "127.0.0.1".parse::<IpAddr>().unwrap());
    assert_eq!(config.port, 8080);
    assert_eq!(config.db_path, None);
    assert_eq!(config.sampling_timeout, Duration::from_secs(30));
    assert_eq!(config.verbosity, 0);
}

#[test]
fn test_config_builders() {
    let config = Config::default()
        .with_host("0.0.0.0".parse().unwrap())
        .with_port(7000)
        .with_db_path(PathBuf::from("/tmp/todos.db"));

    assert_eq!(config.host, "0.0.0.0".parse::<IpAddr>().unwrap());
    assert_eq!(config.port, 7000);
    assert_eq!(config.db_path, Some(PathBuf::from("/tmp/todos.db")));
}

#[test]
fn test_log_filter_follows_verbosity() {
    let quiet = Config::default();
    let verbose = Config::default().with_verbosity(1);
    let very_verbose = Config::default().with_verbosity(3);

    assert!(quiet.log_filter().contains("todo_mcp=info"));
    assert!(verbose.log_filter().contains("todo_mcp=debug"));
    assert!(very_verbose.log_filter().contains("todo_mcp=trace"));
}

#[test]
fn test_enrichment_uses_configured_timeout() {
    let config = Config::default().with_sampling_timeout(Duration::from_secs(3));

    assert_eq!(config.enrichment().timeout(), Duration::from_secs(3));
}

#[test]
fn test_init_tracing_installs_subscriber_once() {
    let config = Config::default();

    // The first call may lose to another test that already installed one.
    let _ = init_tracing(&config, true);

    // Once a subscriber exists, later calls report it instead of panicking.
    let second = init_tracing(&config, false);
    assert!(matches!(second, Err(ApiError::Tracing { .. })));
}
