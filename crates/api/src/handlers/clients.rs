//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crewcall_core::error::CoreError;
use crewcall_core::operator as operator_rules;
use crewcall_core::types::DbId;
use crewcall_db::models::client::{Client, ClientStats, CreateClient};
use crewcall_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Accepted subscription tiers.
const VALID_TIERS: &[&str] = &["free", "member", "agency"];

/// A client plus its aggregate role stats.
#[derive(Debug, Serialize)]
pub struct ClientView {
    #[serde(flatten)]
    pub client: Client,
    pub stats: ClientStats,
}

/// POST /api/v1/clients
pub async fn create_client(
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Client name must not be empty".to_string(),
        )));
    }
    operator_rules::validate_email(&input.email)?;

    let tier = input.subscription_tier.as_deref().unwrap_or("free");
    if !VALID_TIERS.contains(&tier) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown subscription tier \"{tier}\". Must be one of: {}",
            VALID_TIERS.join(", ")
        ))));
    }

    let client = ClientRepo::create(&state.pool, &input, tier).await?;

    tracing::info!(client_id = client.id, tier, "Client registered");

    Ok((StatusCode::CREATED, Json(DataResponse { data: client })))
}

/// GET /api/v1/clients
pub async fn list_clients(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: clients }))
}

/// GET /api/v1/clients/{id}
///
/// Client detail with aggregate role counts, computed by query on demand.
pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let client = ClientRepo::find_by_id(&state.pool, client_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id: client_id,
        }))?;

    let stats = ClientRepo::stats(&state.pool, client_id).await?;

    Ok(Json(DataResponse {
        data: ClientView { client, stats },
    }))
}
