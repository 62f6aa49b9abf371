//! Handlers for the `/operators` and `/operator-types` resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crewcall_core::error::CoreError;
use crewcall_core::types::DbId;
use crewcall_core::operator as operator_rules;
use crewcall_db::models::operator::{CreateOperator, OperatorWithType, UpdateOperator};
use crewcall_db::models::status::OperatorStatus;
use crewcall_db::repositories::{OperatorRepo, OperatorTypeRepo};

use crate::engine::allocator::{self, OperatorLoad};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Default efficiency rating for a freshly onboarded operator.
const DEFAULT_EFFICIENCY_RATING: f64 = 3.0;

/// An operator plus its derived load, the standard read shape.
#[derive(Debug, Serialize)]
pub struct OperatorView {
    #[serde(flatten)]
    pub operator: OperatorWithType,
    pub load: OperatorLoad,
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// POST /api/v1/operators
///
/// Register an operator. Validates name/email/rating/override shape and
/// that the referenced operator type exists. New operators start
/// `available`.
pub async fn create_operator(
    State(state): State<AppState>,
    Json(input): Json<CreateOperator>,
) -> AppResult<impl IntoResponse> {
    operator_rules::validate_name(&input.name)?;
    operator_rules::validate_email(&input.email)?;
    let rating = input.efficiency_rating.unwrap_or(DEFAULT_EFFICIENCY_RATING);
    operator_rules::validate_efficiency_rating(rating)?;
    if let Some(hours) = input.capacity_override {
        operator_rules::validate_capacity_override(hours)?;
    }

    OperatorTypeRepo::find_by_id(&state.pool, input.operator_type_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "OperatorType",
            id: input.operator_type_id,
        }))?;

    let operator = OperatorRepo::create(&state.pool, &input, rating).await?;

    tracing::info!(
        operator_id = operator.id,
        operator_type_id = operator.operator_type_id,
        "Operator registered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: operator })))
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// GET /api/v1/operators
///
/// List all operators with their derived load. The allocation percentage
/// is recomputed from live assignments on every call, never cached.
pub async fn list_operators(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let operators = OperatorRepo::list_with_type(&state.pool).await?;

    let mut views = Vec::with_capacity(operators.len());
    for operator in operators {
        let load = allocator::operator_load(&state.pool, &operator).await?;
        views.push(OperatorView { operator, load });
    }

    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/operators/{id}
pub async fn get_operator(
    State(state): State<AppState>,
    Path(operator_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let operator = find_with_type(&state, operator_id).await?;
    let load = allocator::operator_load(&state.pool, &operator).await?;
    Ok(Json(DataResponse {
        data: OperatorView { operator, load },
    }))
}

/// GET /api/v1/operators/{id}/load
///
/// Just the derived allocation figures, for capacity dashboards.
pub async fn operator_load(
    State(state): State<AppState>,
    Path(operator_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let operator = find_with_type(&state, operator_id).await?;
    let load = allocator::operator_load(&state.pool, &operator).await?;
    Ok(Json(DataResponse { data: load }))
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// PUT /api/v1/operators/{id}
///
/// Merge-patch of name, email, status, rating, and capacity override.
/// Sending `"capacity_override": null` clears the override so the type's
/// base hours apply again.
pub async fn update_operator(
    State(state): State<AppState>,
    Path(operator_id): Path<DbId>,
    Json(patch): Json<UpdateOperator>,
) -> AppResult<impl IntoResponse> {
    let current = OperatorRepo::find_by_id(&state.pool, operator_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Operator",
            id: operator_id,
        }))?;

    let name = patch.name.unwrap_or(current.name);
    let email = patch.email.unwrap_or(current.email);
    operator_rules::validate_name(&name)?;
    operator_rules::validate_email(&email)?;

    let status_id = match patch.status.as_deref() {
        Some(slug) => OperatorStatus::parse(slug)?.id(),
        None => current.status_id,
    };

    let rating = patch.efficiency_rating.unwrap_or(current.efficiency_rating);
    operator_rules::validate_efficiency_rating(rating)?;

    let capacity_override = match patch.capacity_override {
        Some(value) => {
            if let Some(hours) = value {
                operator_rules::validate_capacity_override(hours)?;
            }
            value
        }
        None => current.capacity_override,
    };

    let updated = OperatorRepo::update(
        &state.pool,
        operator_id,
        &name,
        &email,
        status_id,
        rating,
        capacity_override,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Operator",
        id: operator_id,
    }))?;

    tracing::info!(
        operator_id,
        status = operator_rules::status_name(updated.status_id),
        "Operator updated",
    );

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// Operator types
// ---------------------------------------------------------------------------

/// GET /api/v1/operator-types
pub async fn list_operator_types(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let types = OperatorTypeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: types }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_with_type(state: &AppState, operator_id: DbId) -> AppResult<OperatorWithType> {
    OperatorRepo::find_with_type(&state.pool, operator_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Operator",
            id: operator_id,
        }))
}
