//! Tests for MCP Streamable HTTP service integration

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use crate::db::{Database, SqliteDatabase};
use crate::mcp::{EnrichmentClient, create_mcp_service};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Failed to run migrations");
    db
}

#[tokio::test]
async fn test_create_mcp_service() {
    let db = setup_db().await;
    let ct = CancellationToken::new();

    let service = create_mcp_service(db, EnrichmentClient::default(), ct);

    drop(service);
}

#[tokio::test]
async fn test_mcp_service_accepts_initialize() {
    let db = setup_db().await;
    let ct = CancellationToken::new();
    let service = create_mcp_service(db, EnrichmentClient::default(), ct.clone());
    let app = Router::new().nest_service("/mcp", service);

    let body = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2025-03-26",
            "capabilities": {},
            "clientInfo": {"name": "test-client", "version": "0.0.1"}
        }
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .header("host", "localhost")
                .header(CONTENT_TYPE, "application/json")
                .header("accept", "application/json, text/event-stream")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("mcp-session-id"));

    ct.cancel();
}

#[tokio::test]
async fn test_mcp_service_rejects_get_without_session() {
    let db = setup_db().await;
    let ct = CancellationToken::new();
    let service = create_mcp_service(db, EnrichmentClient::default(), ct.clone());
    let app = Router::new().nest_service("/mcp", service);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/mcp")
                .header("host", "localhost")
                .header("accept", "text/event-stream")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());

    ct.cancel();
}
