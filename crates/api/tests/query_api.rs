//! Integration tests for the read path: the role query facade and the
//! advisory classification endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Ordering and empty results
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let client_id = common::seed_client(&app, "acme@example.com").await;

    let first = common::seed_draft_role(&app, client_id, "First").await;
    let second = common::seed_draft_role(&app, client_id, "Second").await;
    let third = common::seed_draft_role(&app, client_id, "Third").await;

    let response = get(app.clone(), "/api/v1/roles").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![third, second, first]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unmatched_filters_return_empty_list_not_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let client_id = common::seed_client(&app, "acme@example.com").await;
    common::seed_draft_role(&app, client_id, "Only draft").await;

    let response = get(app.clone(), "/api/v1/roles?status=completed").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn filters_compose_across_axes(pool: PgPool) {
    let app = common::build_test_app(pool);
    let client_a = common::seed_client(&app, "acme@example.com").await;
    let client_b = common::seed_client(&app, "birch@example.com").await;

    let a_role = common::seed_draft_role(&app, client_a, "A web role").await;
    common::seed_draft_role(&app, client_b, "B web role").await;

    // By client.
    let response = get(app.clone(), &format!("/api/v1/roles?client_id={client_a}")).await;
    let json = body_json(response).await;
    let roles = json["data"].as_array().unwrap();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0]["id"].as_i64().unwrap(), a_role);

    // By category + workstream (both seeded as web_dev/creative).
    let response = get(
        app.clone(),
        "/api/v1/roles?category=web_dev&workstream=creative",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // By status.
    let response = get(app.clone(), "/api/v1/roles?status=draft").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn operator_filter_matches_claimed_roles(pool: PgPool) {
    let app = common::build_test_app(pool);
    let client_id = common::seed_client(&app, "acme@example.com").await;
    let operator_id = common::seed_operator(&app, "sam@example.com").await;
    let role_id = common::seed_live_role(&app, client_id, "Claimed one").await;
    common::seed_live_role(&app, client_id, "Unclaimed one").await;

    post_json(
        app.clone(),
        &format!("/api/v1/roles/{role_id}/claim"),
        serde_json::json!({ "operator_id": operator_id }),
    )
    .await;

    let response = get(
        app.clone(),
        &format!("/api/v1/roles?operator_id={operator_id}"),
    )
    .await;
    let json = body_json(response).await;
    let roles = json["data"].as_array().unwrap();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0]["id"].as_i64().unwrap(), role_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_status_slug_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/roles?status=archived").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Advisory classification
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn suggest_returns_advisory_classification(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/roles/suggest",
        serde_json::json!({ "text": "Need a new website landing page, HTML and CSS" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["category"], "web_dev");
    let skills = json["data"]["skills"].as_array().unwrap();
    assert!(skills.iter().any(|s| s == "html"));
}
