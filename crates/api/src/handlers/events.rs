//! Handlers for the `/events` audit trail.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crewcall_db::repositories::EventRepo;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default page size for the audit listing.
const DEFAULT_LIMIT: i64 = 50;

/// GET /api/v1/events
///
/// Most recent platform events, newest first. Purely an audit read.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list_recent(
        &state.pool,
        params.limit.unwrap_or(DEFAULT_LIMIT),
        params.offset.unwrap_or(0),
    )
    .await?;
    Ok(Json(DataResponse { data: events }))
}
