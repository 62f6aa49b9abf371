//! Handlers for the `/roles` resource.
//!
//! Thin adapters: parse and resolve request input, delegate to the
//! lifecycle engine, wrap the result in the standard envelope.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crewcall_core::error::CoreError;
use crewcall_core::types::DbId;
use crewcall_db::models::role::{
    AdvanceRole, CancelRole, ClaimRole, CreateRole, RoleFeedback, RoleListQuery, UpdateRole,
};
use crewcall_db::models::status::RoleStatus;
use crewcall_db::repositories::RoleRepo;

use crate::classify::{Classifier, KeywordClassifier};
use crate::engine::lifecycle;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// POST /api/v1/roles
///
/// Create a role in Draft. Returns 201 with the created role, or 400 when
/// a required field is missing or a category/workstream slug is unknown.
pub async fn create_role(
    State(state): State<AppState>,
    Json(input): Json<CreateRole>,
) -> AppResult<impl IntoResponse> {
    let role = lifecycle::create(&state, &input).await?;

    tracing::info!(
        role_id = role.id,
        client_id = role.client_id,
        category = %role.category,
        "Role created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: role })))
}

// ---------------------------------------------------------------------------
// Query facade
// ---------------------------------------------------------------------------

/// GET /api/v1/roles
///
/// Filter by any combination of `client_id`, `operator_id`, `status`,
/// `category`, and `workstream`; newest first. No filters returns the
/// newest page of everything; an unmatched filter set returns an empty
/// list, never an error.
pub async fn list_roles(
    State(state): State<AppState>,
    Query(params): Query<RoleListQuery>,
) -> AppResult<impl IntoResponse> {
    // Resolve slugs up front so typos read as 400s, not empty results.
    let status_id = params
        .status
        .as_deref()
        .map(RoleStatus::parse)
        .transpose()?
        .map(|s| s.id());
    if let Some(category) = params.category.as_deref() {
        crewcall_core::taxonomy::Category::parse(category)?;
    }
    if let Some(workstream) = params.workstream.as_deref() {
        crewcall_core::taxonomy::Workstream::parse(workstream)?;
    }

    let roles = RoleRepo::list(&state.pool, &params, status_id).await?;
    Ok(Json(DataResponse { data: roles }))
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

/// GET /api/v1/roles/{id}
pub async fn get_role(
    State(state): State<AppState>,
    Path(role_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let role = RoleRepo::find_by_id(&state.pool, role_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Role",
            id: role_id,
        }))?;
    Ok(Json(DataResponse { data: role }))
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// PUT /api/v1/roles/{id}
///
/// Full-field edit, permitted while Draft or Live. 409 once an operator
/// holds the role.
pub async fn update_role(
    State(state): State<AppState>,
    Path(role_id): Path<DbId>,
    Json(patch): Json<UpdateRole>,
) -> AppResult<impl IntoResponse> {
    let role = lifecycle::update(&state, role_id, &patch).await?;
    Ok(Json(DataResponse { data: role }))
}

// ---------------------------------------------------------------------------
// Lifecycle transitions
// ---------------------------------------------------------------------------

/// POST /api/v1/roles/{id}/publish
pub async fn publish_role(
    State(state): State<AppState>,
    Path(role_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let role = lifecycle::publish(&state, role_id).await?;
    Ok(Json(DataResponse { data: role }))
}

/// POST /api/v1/roles/{id}/claim
///
/// Bind an operator to a Live role, capacity permitting. 409 with a
/// distinct code for each failure mode: `INVALID_TRANSITION`,
/// `OPERATOR_UNAVAILABLE`, or `CAPACITY_EXCEEDED`.
pub async fn claim_role(
    State(state): State<AppState>,
    Path(role_id): Path<DbId>,
    Json(input): Json<ClaimRole>,
) -> AppResult<impl IntoResponse> {
    let role = lifecycle::claim(&state, role_id, input.operator_id).await?;
    Ok(Json(DataResponse { data: role }))
}

/// POST /api/v1/roles/{id}/advance
///
/// Strict forward order: `in_progress`, `review`, `completed`. Skipping a
/// step is a 409.
pub async fn advance_role(
    State(state): State<AppState>,
    Path(role_id): Path<DbId>,
    Json(input): Json<AdvanceRole>,
) -> AppResult<impl IntoResponse> {
    let target = RoleStatus::parse(&input.status)?;
    if !matches!(
        target,
        RoleStatus::InProgress | RoleStatus::Review | RoleStatus::Completed
    ) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Cannot advance to \"{}\"; valid targets are in_progress, review, completed",
            input.status
        ))));
    }

    let role = lifecycle::advance(&state, role_id, target).await?;
    Ok(Json(DataResponse { data: role }))
}

/// POST /api/v1/roles/{id}/fill
///
/// Mark a Live role Filled: BEAM stops routing external applicants.
pub async fn fill_role(
    State(state): State<AppState>,
    Path(role_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let role = lifecycle::fill(&state, role_id).await?;
    Ok(Json(DataResponse { data: role }))
}

/// POST /api/v1/roles/{id}/cancel
pub async fn cancel_role(
    State(state): State<AppState>,
    Path(role_id): Path<DbId>,
    Json(input): Json<CancelRole>,
) -> AppResult<impl IntoResponse> {
    let role = lifecycle::cancel(&state, role_id, &input.reason).await?;
    Ok(Json(DataResponse { data: role }))
}

/// POST /api/v1/roles/{id}/feedback
pub async fn leave_feedback(
    State(state): State<AppState>,
    Path(role_id): Path<DbId>,
    Json(input): Json<RoleFeedback>,
) -> AppResult<impl IntoResponse> {
    let role = lifecycle::feedback(&state, role_id, input.rating, input.comment.as_deref()).await?;
    Ok(Json(DataResponse { data: role }))
}

// ---------------------------------------------------------------------------
// Syndication
// ---------------------------------------------------------------------------

/// POST /api/v1/roles/{id}/sync
///
/// Explicit, idempotent BEAM sync. Re-sending an unchanged role is a
/// no-op (`unchanged` outcome) without any external call. A downstream
/// failure answers 502 and leaves the role's lifecycle state untouched.
pub async fn sync_role(
    State(state): State<AppState>,
    Path(role_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let outcome = state.beam.sync_role(&state.pool, role_id).await?;
    Ok(Json(DataResponse { data: outcome }))
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Body for `POST /api/v1/roles/suggest`.
#[derive(Debug, Deserialize)]
pub struct SuggestInput {
    pub text: String,
}

/// POST /api/v1/roles/suggest
///
/// Advisory classification of free text. The caller may ignore any or
/// all of it; `create` never consults the classifier.
pub async fn suggest_classification(
    Json(input): Json<SuggestInput>,
) -> AppResult<impl IntoResponse> {
    let suggestion = KeywordClassifier.suggest(&input.text);
    Ok(Json(DataResponse { data: suggestion }))
}
