//! Status helper enums mapping to SMALLSERIAL/SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding `*_statuses` database table. The core crate keeps
//! its own i16 constants for the same ids because it must stay free of
//! internal deps; the two are kept in sync by the tests below.

use crewcall_core::error::CoreError;

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Role lifecycle status.
    RoleStatus {
        Draft = 1,
        Live = 2,
        Claimed = 3,
        InProgress = 4,
        Review = 5,
        Completed = 6,
        Cancelled = 7,
        Filled = 8,
    }
}

define_status_enum! {
    /// Operator availability status.
    OperatorStatus {
        Available = 1,
        Busy = 2,
        Offline = 3,
        OnLeave = 4,
    }
}

impl RoleStatus {
    /// Parse the lookup-table slug used in API payloads.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "draft" => Ok(Self::Draft),
            "live" => Ok(Self::Live),
            "claimed" => Ok(Self::Claimed),
            "in_progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "filled" => Ok(Self::Filled),
            other => Err(CoreError::Validation(format!(
                "Unknown role status: \"{other}\""
            ))),
        }
    }
}

impl OperatorStatus {
    /// Parse the lookup-table slug used in API payloads.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "available" => Ok(Self::Available),
            "busy" => Ok(Self::Busy),
            "offline" => Ok(Self::Offline),
            "on_leave" => Ok(Self::OnLeave),
            other => Err(CoreError::Validation(format!(
                "Unknown operator status: \"{other}\""
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewcall_core::{lifecycle, operator};

    #[test]
    fn role_status_ids_match_core_constants() {
        assert_eq!(RoleStatus::Draft.id(), lifecycle::STATUS_DRAFT);
        assert_eq!(RoleStatus::Live.id(), lifecycle::STATUS_LIVE);
        assert_eq!(RoleStatus::Claimed.id(), lifecycle::STATUS_CLAIMED);
        assert_eq!(RoleStatus::InProgress.id(), lifecycle::STATUS_IN_PROGRESS);
        assert_eq!(RoleStatus::Review.id(), lifecycle::STATUS_REVIEW);
        assert_eq!(RoleStatus::Completed.id(), lifecycle::STATUS_COMPLETED);
        assert_eq!(RoleStatus::Cancelled.id(), lifecycle::STATUS_CANCELLED);
        assert_eq!(RoleStatus::Filled.id(), lifecycle::STATUS_FILLED);
    }

    #[test]
    fn operator_status_ids_match_core_constants() {
        assert_eq!(OperatorStatus::Available.id(), operator::STATUS_AVAILABLE);
        assert_eq!(OperatorStatus::Busy.id(), operator::STATUS_BUSY);
        assert_eq!(OperatorStatus::Offline.id(), operator::STATUS_OFFLINE);
        assert_eq!(OperatorStatus::OnLeave.id(), operator::STATUS_ON_LEAVE);
    }

    #[test]
    fn role_status_parses_slugs() {
        assert_eq!(RoleStatus::parse("in_progress").unwrap(), RoleStatus::InProgress);
        assert!(RoleStatus::parse("archived").is_err());
    }

    #[test]
    fn operator_status_parses_slugs() {
        assert_eq!(OperatorStatus::parse("on_leave").unwrap(), OperatorStatus::OnLeave);
        assert!(OperatorStatus::parse("retired").is_err());
    }
}
