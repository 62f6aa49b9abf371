//! Shared test harness: production router over a per-test database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use crewcall_api::config::ServerConfig;
use crewcall_api::router::build_app_router;
use crewcall_api::state::AppState;
use crewcall_beam::{BeamClient, SyndicationGateway};
use crewcall_events::EventBus;

/// Build a test `ServerConfig` with safe defaults.
///
/// The BEAM base URL points at an unbound local port so any background
/// sync fails fast instead of reaching the network.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        beam_base_url: "http://127.0.0.1:9".to_string(),
        chat_webhook_url: None,
        push_gateway_url: None,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Uses the same [`build_app_router`] as `main.rs`, so integration tests
/// exercise the production middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let beam = Arc::new(SyndicationGateway::new(BeamClient::new(
        config.beam_base_url.clone(),
    )));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::new(EventBus::default()),
        beam,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, path: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::PUT)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Create a client and return its id.
pub async fn seed_client(app: &Router, email: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/clients",
        serde_json::json!({
            "name": "Acme Collective",
            "email": email,
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "seed_client failed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create an operator of type 1 (General Ops, 40h base) and return its id.
pub async fn seed_operator(app: &Router, email: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/operators",
        serde_json::json!({
            "name": "Sam Ortiz",
            "email": email,
            "operator_type_id": 1,
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "seed_operator failed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a Draft role owned by `client_id` and return its id.
///
/// Pay `$500-$1000` estimates to 30 hours against the 40-hour default
/// operator type.
pub async fn seed_draft_role(app: &Router, client_id: i64, title: &str) -> i64 {
    seed_draft_role_with_pay(app, client_id, title, "$500-$1000").await
}

/// Create a Draft role with a specific pay range.
pub async fn seed_draft_role_with_pay(
    app: &Router,
    client_id: i64,
    title: &str,
    pay_range: &str,
) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/roles",
        serde_json::json!({
            "client_id": client_id,
            "category": "web_dev",
            "workstream": "creative",
            "title": title,
            "description": "Replace the legacy landing page with the new brand kit.",
            "skills": ["html", "css"],
            "pay_range": pay_range,
            "deadline": "2030-01-15",
            "tags": ["storefront"],
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "seed_draft_role failed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create and publish a role, returning its id.
pub async fn seed_live_role(app: &Router, client_id: i64, title: &str) -> i64 {
    let role_id = seed_draft_role(app, client_id, title).await;
    let response = post_json(
        app.clone(),
        &format!("/api/v1/roles/{role_id}/publish"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), 200, "seed_live_role publish failed");
    role_id
}
