//! Route definitions for the `/events` audit resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`. Read-only.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(events::list_events))
}
