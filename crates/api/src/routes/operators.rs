//! Route definitions for the `/operators` and `/operator-types` resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::operators;
use crate::state::AppState;

/// Routes mounted at `/operators`.
///
/// ```text
/// GET    /            -> list_operators (with derived load)
/// POST   /            -> create_operator
/// GET    /{id}        -> get_operator (with derived load)
/// PUT    /{id}        -> update_operator
/// GET    /{id}/load   -> operator_load
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(operators::list_operators).post(operators::create_operator),
        )
        .route("/{id}", get(operators::get_operator).put(operators::update_operator))
        .route("/{id}/load", get(operators::operator_load))
}

/// Routes mounted at `/operator-types`. Read-only reference data.
pub fn types_router() -> Router<AppState> {
    Router::new().route("/", get(operators::list_operator_types))
}
