//! Role lifecycle state machine.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! the repository layer, the API engine, and the syndication gateway. The
//! status ids match the `role_statuses` seed data (1-based SMALLSERIAL) in
//! the db crate's migrations.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status ids
// ---------------------------------------------------------------------------

/// Authored but not yet visible to operators or BEAM.
pub const STATUS_DRAFT: i16 = 1;
/// Published and open for claiming / syndication.
pub const STATUS_LIVE: i16 = 2;
/// Bound to an operator via a successful capacity reservation.
pub const STATUS_CLAIMED: i16 = 3;
/// Work underway.
pub const STATUS_IN_PROGRESS: i16 = 4;
/// Deliverable submitted, awaiting client review.
pub const STATUS_REVIEW: i16 = 5;
/// Terminal: work accepted.
pub const STATUS_COMPLETED: i16 = 6;
/// Terminal: withdrawn by the client or the platform.
pub const STATUS_CANCELLED: i16 = 7;
/// Claimed's syndication-facing twin: signals BEAM to stop routing
/// external applicants. Internally equivalent to `Claimed`.
pub const STATUS_FILLED: i16 = 8;

/// Statuses that count against an operator's capacity.
pub const ACTIVE_ASSIGNMENT_STATUSES: [i16; 4] = [
    STATUS_CLAIMED,
    STATUS_IN_PROGRESS,
    STATUS_REVIEW,
    STATUS_FILLED,
];

/// Statuses in which a full-field edit is still permitted. Once an
/// operator is bound, the scope is frozen.
pub const EDITABLE_STATUSES: [i16; 2] = [STATUS_DRAFT, STATUS_LIVE];

/// Statuses eligible for syndication to BEAM (visibility permitting).
pub const SYNDICATION_STATUSES: [i16; 2] = [STATUS_LIVE, STATUS_FILLED];

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Returns the set of valid target status ids reachable from `from_status`.
///
/// Terminal states (Completed, Cancelled) return an empty slice because no
/// further transitions are allowed.
pub fn valid_transitions(from_status: i16) -> &'static [i16] {
    match from_status {
        // Draft -> Live, Cancelled
        STATUS_DRAFT => &[STATUS_LIVE, STATUS_CANCELLED],
        // Live -> Claimed, Filled, Cancelled
        STATUS_LIVE => &[STATUS_CLAIMED, STATUS_FILLED, STATUS_CANCELLED],
        // Claimed -> InProgress, Cancelled
        STATUS_CLAIMED => &[STATUS_IN_PROGRESS, STATUS_CANCELLED],
        // Filled behaves like Claimed internally.
        STATUS_FILLED => &[STATUS_IN_PROGRESS, STATUS_CANCELLED],
        // InProgress -> Review, Cancelled
        STATUS_IN_PROGRESS => &[STATUS_REVIEW, STATUS_CANCELLED],
        // Review -> Completed, Cancelled
        STATUS_REVIEW => &[STATUS_COMPLETED, STATUS_CANCELLED],
        // Terminal states: Completed, Cancelled
        STATUS_COMPLETED | STATUS_CANCELLED => &[],
        // Unknown status: no transitions allowed
        _ => &[],
    }
}

/// Check whether a transition from `from` to `to` is valid.
pub fn can_transition(from: i16, to: i16) -> bool {
    valid_transitions(from).contains(&to)
}

/// Validate a state transition, producing a [`CoreError::InvalidTransition`]
/// naming both states for invalid ones.
pub fn validate_transition(from: i16, to: i16) -> Result<(), CoreError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition(format!(
            "{} -> {}",
            status_name(from),
            status_name(to)
        )))
    }
}

/// True once a role can never re-enter the machine.
pub fn is_terminal(status: i16) -> bool {
    matches!(status, STATUS_COMPLETED | STATUS_CANCELLED)
}

/// True while a full-field edit is still permitted.
pub fn is_editable(status: i16) -> bool {
    EDITABLE_STATUSES.contains(&status)
}

/// True if the status counts against operator capacity.
pub fn is_active_assignment(status: i16) -> bool {
    ACTIVE_ASSIGNMENT_STATUSES.contains(&status)
}

/// Human-readable name for a status id (for error messages and logs).
pub fn status_name(id: i16) -> &'static str {
    match id {
        STATUS_DRAFT => "Draft",
        STATUS_LIVE => "Live",
        STATUS_CLAIMED => "Claimed",
        STATUS_IN_PROGRESS => "InProgress",
        STATUS_REVIEW => "Review",
        STATUS_COMPLETED => "Completed",
        STATUS_CANCELLED => "Cancelled",
        STATUS_FILLED => "Filled",
        _ => "Unknown",
    }
}
