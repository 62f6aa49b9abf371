//! Route definitions for the `/roles` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::roles;
use crate::state::AppState;

/// Routes mounted at `/roles`.
///
/// ```text
/// GET    /                 -> list_roles (query facade)
/// POST   /                 -> create_role
/// POST   /suggest          -> suggest_classification
/// GET    /{id}             -> get_role
/// PUT    /{id}             -> update_role
/// POST   /{id}/publish     -> publish_role
/// POST   /{id}/claim       -> claim_role
/// POST   /{id}/advance     -> advance_role
/// POST   /{id}/fill        -> fill_role
/// POST   /{id}/cancel      -> cancel_role
/// POST   /{id}/feedback    -> leave_feedback
/// POST   /{id}/sync        -> sync_role
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(roles::list_roles).post(roles::create_role))
        .route("/suggest", post(roles::suggest_classification))
        .route("/{id}", get(roles::get_role).put(roles::update_role))
        .route("/{id}/publish", post(roles::publish_role))
        .route("/{id}/claim", post(roles::claim_role))
        .route("/{id}/advance", post(roles::advance_role))
        .route("/{id}/fill", post(roles::fill_role))
        .route("/{id}/cancel", post(roles::cancel_role))
        .route("/{id}/feedback", post(roles::leave_feedback))
        .route("/{id}/sync", post(roles::sync_role))
}
