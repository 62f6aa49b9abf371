//! Capacity accounting: can operator X take on role Y?
//!
//! Pure math over values the caller has already fetched. The allocation
//! percentage is always derived from live assignment data at read time;
//! nothing here is ever cached or persisted.

use crate::error::CoreError;
use crate::operator;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Capacity math
// ---------------------------------------------------------------------------

/// Effective weekly capacity in hours: the per-operator override when
/// present, else the operator type's base.
pub fn effective_capacity(base_weekly_hours: f64, capacity_override: Option<f64>) -> f64 {
    capacity_override.unwrap_or(base_weekly_hours)
}

/// Hours still available after subtracting committed work. May go negative
/// when an operator is overcommitted (e.g. after a capacity override was
/// lowered); callers compare against it, they do not display it raw.
pub fn available_capacity(effective_capacity: f64, committed_hours: f64) -> f64 {
    effective_capacity - committed_hours
}

/// Current allocation as a fraction of effective capacity, clamped to
/// `[0, 1]`. An operator with no capacity at all reads as fully allocated.
pub fn allocation_percentage(effective_capacity: f64, committed_hours: f64) -> f64 {
    if effective_capacity <= 0.0 {
        return 1.0;
    }
    (1.0 - available_capacity(effective_capacity, committed_hours) / effective_capacity)
        .clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Reservation check
// ---------------------------------------------------------------------------

/// Decide whether an operator can absorb a role of `requested_hours`.
///
/// The status gate runs before the numeric test: a busy/offline/on-leave
/// operator fails with [`CoreError::OperatorUnavailable`] no matter how
/// much capacity the numbers would show.
pub fn check_reservation(
    operator_id: DbId,
    operator_status: i16,
    effective_capacity: f64,
    committed_hours: f64,
    requested_hours: f64,
) -> Result<(), CoreError> {
    if !operator::is_eligible(operator_status) {
        return Err(CoreError::OperatorUnavailable {
            operator_id,
            status: operator::status_name(operator_status),
        });
    }

    let available = available_capacity(effective_capacity, committed_hours);
    if requested_hours > available {
        return Err(CoreError::CapacityExceeded {
            operator_id,
            requested_hours,
            available_hours: available,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::{STATUS_AVAILABLE, STATUS_BUSY, STATUS_ON_LEAVE};

    // -----------------------------------------------------------------------
    // Capacity math
    // -----------------------------------------------------------------------

    #[test]
    fn override_supersedes_base() {
        assert_eq!(effective_capacity(40.0, Some(25.0)), 25.0);
        assert_eq!(effective_capacity(40.0, None), 40.0);
    }

    #[test]
    fn available_is_effective_minus_committed() {
        assert_eq!(available_capacity(40.0, 30.0), 10.0);
        assert_eq!(available_capacity(40.0, 0.0), 40.0);
    }

    #[test]
    fn available_can_go_negative_when_overcommitted() {
        assert_eq!(available_capacity(20.0, 30.0), -10.0);
    }

    #[test]
    fn allocation_percentage_basic() {
        assert_eq!(allocation_percentage(40.0, 10.0), 0.25);
        assert_eq!(allocation_percentage(40.0, 0.0), 0.0);
        assert_eq!(allocation_percentage(40.0, 40.0), 1.0);
    }

    #[test]
    fn allocation_percentage_clamps_overcommit_to_one() {
        assert_eq!(allocation_percentage(40.0, 400.0), 1.0);
    }

    #[test]
    fn allocation_percentage_never_negative() {
        // Committed can't be negative in practice, but the clamp holds anyway.
        assert_eq!(allocation_percentage(40.0, -5.0), 0.0);
    }

    #[test]
    fn zero_capacity_reads_fully_allocated() {
        assert_eq!(allocation_percentage(0.0, 0.0), 1.0);
    }

    // -----------------------------------------------------------------------
    // Reservation check
    // -----------------------------------------------------------------------

    #[test]
    fn reservation_fits() {
        assert!(check_reservation(1, STATUS_AVAILABLE, 40.0, 10.0, 20.0).is_ok());
    }

    #[test]
    fn reservation_exactly_filling_capacity_fits() {
        assert!(check_reservation(1, STATUS_AVAILABLE, 40.0, 10.0, 30.0).is_ok());
    }

    #[test]
    fn oversized_role_is_rejected_even_with_zero_commitments() {
        // Base capacity 40, role estimated at 50 hours.
        let err = check_reservation(7, STATUS_AVAILABLE, 40.0, 0.0, 50.0).unwrap_err();
        match err {
            CoreError::CapacityExceeded {
                operator_id,
                requested_hours,
                available_hours,
            } => {
                assert_eq!(operator_id, 7);
                assert_eq!(requested_hours, 50.0);
                assert_eq!(available_hours, 40.0);
            }
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
    }

    #[test]
    fn status_gate_runs_before_numeric_test() {
        // Plenty of numeric headroom, but on leave: must be
        // OperatorUnavailable, not CapacityExceeded.
        let err = check_reservation(3, STATUS_ON_LEAVE, 40.0, 0.0, 1.0).unwrap_err();
        match err {
            CoreError::OperatorUnavailable {
                operator_id,
                status,
            } => {
                assert_eq!(operator_id, 3);
                assert_eq!(status, "on_leave");
            }
            other => panic!("expected OperatorUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn busy_operator_is_unavailable() {
        assert!(matches!(
            check_reservation(3, STATUS_BUSY, 40.0, 0.0, 1.0),
            Err(CoreError::OperatorUnavailable { .. })
        ));
    }

    #[test]
    fn reserve_then_release_restores_available_capacity() {
        let effective = 40.0;
        let before = available_capacity(effective, 10.0);
        // Reserving adds the role's hours to the committed set...
        let during = available_capacity(effective, 10.0 + 12.5);
        // ...and releasing removes them again.
        let after = available_capacity(effective, 10.0);
        assert_eq!(during, before - 12.5);
        assert_eq!(after, before);
    }

    #[test]
    fn release_is_idempotent() {
        // Release is "the role leaves the active set": removing the same
        // role twice leaves the committed total identical to removing it once.
        let mut assignments = vec![(101i64, 10.0), (102i64, 15.0)];
        assignments.retain(|(id, _)| *id != 102);
        let once: f64 = assignments.iter().map(|(_, h)| h).sum();
        assignments.retain(|(id, _)| *id != 102);
        let twice: f64 = assignments.iter().map(|(_, h)| h).sum();
        assert_eq!(
            available_capacity(40.0, once),
            available_capacity(40.0, twice)
        );
    }
}
