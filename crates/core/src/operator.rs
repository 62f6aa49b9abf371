//! Operator status ids and attribute validation.
//!
//! The status ids match the `operator_statuses` seed data (1-based
//! SMALLSERIAL) in the db crate's migrations. They are duplicated here
//! because `core` must keep zero internal deps.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status ids
// ---------------------------------------------------------------------------

/// Eligible for new assignments.
pub const STATUS_AVAILABLE: i16 = 1;
/// Temporarily saturated; excluded from eligibility regardless of numbers.
pub const STATUS_BUSY: i16 = 2;
/// Not reachable; excluded from eligibility.
pub const STATUS_OFFLINE: i16 = 3;
/// On leave; excluded from eligibility.
pub const STATUS_ON_LEAVE: i16 = 4;

/// Efficiency ratings are bounded to this inclusive range.
pub const MIN_EFFICIENCY_RATING: f64 = 0.0;
pub const MAX_EFFICIENCY_RATING: f64 = 5.0;

/// Maximum length of an operator name.
const MAX_NAME_LEN: usize = 128;

/// Human-readable name for an operator status id.
pub fn status_name(id: i16) -> &'static str {
    match id {
        STATUS_AVAILABLE => "available",
        STATUS_BUSY => "busy",
        STATUS_OFFLINE => "offline",
        STATUS_ON_LEAVE => "on_leave",
        _ => "unknown",
    }
}

/// Whether the status admits new assignments at all. The numeric capacity
/// test only runs for eligible operators.
pub fn is_eligible(status: i16) -> bool {
    status == STATUS_AVAILABLE
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an operator display name.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Operator name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Operator name must not exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an operator email address. Minimal shape check only; delivery
/// failures are the notification layer's concern.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
    });
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid email address: \"{email}\""
        )))
    }
}

/// Validate an efficiency rating.
pub fn validate_efficiency_rating(rating: f64) -> Result<(), CoreError> {
    if (MIN_EFFICIENCY_RATING..=MAX_EFFICIENCY_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Efficiency rating must be between {MIN_EFFICIENCY_RATING} and {MAX_EFFICIENCY_RATING}"
        )))
    }
}

/// Validate a capacity override, when present.
pub fn validate_capacity_override(hours: f64) -> Result<(), CoreError> {
    if hours > 0.0 {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Capacity override must be a positive number of hours".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_available_is_eligible() {
        assert!(is_eligible(STATUS_AVAILABLE));
        assert!(!is_eligible(STATUS_BUSY));
        assert!(!is_eligible(STATUS_OFFLINE));
        assert!(!is_eligible(STATUS_ON_LEAVE));
    }

    #[test]
    fn status_names() {
        assert_eq!(status_name(STATUS_ON_LEAVE), "on_leave");
        assert_eq!(status_name(42), "unknown");
    }

    #[test]
    fn empty_name_rejected() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn long_name_rejected() {
        assert!(validate_name(&"x".repeat(129)).is_err());
        assert!(validate_name(&"x".repeat(128)).is_ok());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("ops@example.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("a@nodot").is_err());
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_efficiency_rating(0.0).is_ok());
        assert!(validate_efficiency_rating(5.0).is_ok());
        assert!(validate_efficiency_rating(5.1).is_err());
        assert!(validate_efficiency_rating(-0.1).is_err());
    }

    #[test]
    fn capacity_override_must_be_positive() {
        assert!(validate_capacity_override(12.5).is_ok());
        assert!(validate_capacity_override(0.0).is_err());
        assert!(validate_capacity_override(-4.0).is_err());
    }
}
