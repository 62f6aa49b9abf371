//! Route tree for `/api/v1`.

pub mod clients;
pub mod events;
pub mod health;
pub mod operators;
pub mod roles;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /roles                      create, query facade
/// /roles/{id}                 get, update (Draft|Live only)
/// /roles/{id}/publish         Draft -> Live
/// /roles/{id}/claim           Live -> Claimed (capacity-checked)
/// /roles/{id}/advance         InProgress -> Review -> Completed
/// /roles/{id}/fill            Live -> Filled
/// /roles/{id}/cancel          any non-terminal -> Cancelled
/// /roles/{id}/feedback        rating + comment on Completed
/// /roles/{id}/sync            explicit BEAM (re-)sync
/// /roles/suggest              advisory classification
///
/// /operators                  create, list (with derived load)
/// /operators/{id}             get, update
/// /operators/{id}/load        derived allocation figures
/// /operator-types             reference data
///
/// /clients                    create, list
/// /clients/{id}               get (with aggregate stats)
///
/// /events                     audit trail (read-only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/roles", roles::router())
        .nest("/operators", operators::router())
        .nest("/operator-types", operators::types_router())
        .nest("/clients", clients::router())
        .nest("/events", events::router())
}
