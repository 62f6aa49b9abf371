use crate::types::DbId;

/// Domain-level error type shared across all workspace crates.
///
/// Every variant carries enough identifying detail for the caller to
/// correct the request (or pick a different operator). The API layer maps
/// each variant to a distinct HTTP status and error code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A lifecycle write was attempted against a role in the wrong state.
    /// Callers must re-fetch the role to observe its current status.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// The operator's remaining capacity cannot absorb the role.
    #[error(
        "Operator {operator_id} has {available_hours:.1}h available but the role needs {requested_hours:.1}h"
    )]
    CapacityExceeded {
        operator_id: DbId,
        requested_hours: f64,
        available_hours: f64,
    },

    /// The operator's status excludes it from taking on work, regardless
    /// of numeric capacity.
    #[error("Operator {operator_id} is {status} and cannot take on work")]
    OperatorUnavailable {
        operator_id: DbId,
        status: &'static str,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
