//! Capacity allocation over live assignment data.
//!
//! The numbers here are always derived at read time from the operator's
//! current active assignments. Nothing is cached between requests, so a
//! completed or cancelled role releases its hours the instant its status
//! row changes.

use serde::Serialize;

use crewcall_core::types::DbId;
use crewcall_core::{capacity, estimation};
use crewcall_db::models::operator::OperatorWithType;
use crewcall_db::models::role::Role;
use crewcall_db::repositories::RoleRepo;

use crate::error::AppResult;

/// An operator's derived load, shipped with operator detail responses.
#[derive(Debug, Clone, Serialize)]
pub struct OperatorLoad {
    pub operator_id: DbId,
    pub effective_capacity_hours: f64,
    pub committed_hours: f64,
    pub available_hours: f64,
    /// `1 - available/effective`, clamped to `[0, 1]`.
    pub allocation_percentage: f64,
    pub active_assignments: usize,
}

/// Sum of estimated hours across a set of active assignments.
pub fn committed_hours(assignments: &[Role]) -> f64 {
    assignments
        .iter()
        .map(|role| estimation::estimated_hours_for(&role.pay_range))
        .sum()
}

/// Assemble the derived load figures for an operator.
pub fn build_load(operator: &OperatorWithType, assignments: &[Role]) -> OperatorLoad {
    let effective =
        capacity::effective_capacity(operator.base_weekly_hours, operator.capacity_override);
    let committed = committed_hours(assignments);
    OperatorLoad {
        operator_id: operator.id,
        effective_capacity_hours: effective,
        committed_hours: committed,
        available_hours: capacity::available_capacity(effective, committed),
        allocation_percentage: capacity::allocation_percentage(effective, committed),
        active_assignments: assignments.len(),
    }
}

/// Fetch active assignments and compute the operator's current load.
pub async fn operator_load(
    pool: &crewcall_db::DbPool,
    operator: &OperatorWithType,
) -> AppResult<OperatorLoad> {
    let assignments = RoleRepo::active_assignments(pool, operator.id).await?;
    Ok(build_load(operator, &assignments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn operator(base: f64, override_hours: Option<f64>) -> OperatorWithType {
        let now = chrono::Utc::now();
        OperatorWithType {
            id: 5,
            name: "Sam Ortiz".into(),
            email: "sam@example.com".into(),
            status_id: 1,
            efficiency_rating: 4.0,
            capacity_override: override_hours,
            operator_type_id: 1,
            type_name: "General Ops".into(),
            base_weekly_hours: base,
            created_at: now,
            updated_at: now,
        }
    }

    fn assignment(pay_range: &str) -> Role {
        let now = chrono::Utc::now();
        Role {
            id: 1,
            client_id: 1,
            operator_id: Some(5),
            category: "admin".into(),
            workstream: "operations".into(),
            title: "Inbox triage".into(),
            description: "Weekly inbox triage".into(),
            skills: vec![],
            pay_range: pay_range.into(),
            deadline: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            location: None,
            visibility: "public".into(),
            tags: vec![],
            media_url: None,
            status_id: crewcall_core::lifecycle::STATUS_CLAIMED,
            cancel_reason: None,
            feedback_rating: None,
            feedback_comment: None,
            beam_ref: None,
            beam_synced_at: None,
            beam_payload_hash: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    #[test]
    fn load_with_no_assignments_is_zero() {
        let load = build_load(&operator(40.0, None), &[]);
        assert_eq!(load.committed_hours, 0.0);
        assert_eq!(load.available_hours, 40.0);
        assert_eq!(load.allocation_percentage, 0.0);
    }

    #[test]
    fn committed_hours_sum_over_assignments() {
        // $500-$1000 -> 30h, $250 -> 10h.
        let assignments = vec![assignment("$500-$1000"), assignment("$250")];
        assert_eq!(committed_hours(&assignments), 40.0);
    }

    #[test]
    fn override_narrows_effective_capacity() {
        let assignments = vec![assignment("$500-$1000")]; // 30h
        let load = build_load(&operator(40.0, Some(30.0)), &assignments);
        assert_eq!(load.effective_capacity_hours, 30.0);
        assert_eq!(load.available_hours, 0.0);
        assert_eq!(load.allocation_percentage, 1.0);
    }

    #[test]
    fn allocation_percentage_stays_in_unit_interval_when_overcommitted() {
        let assignments: Vec<Role> = (0..10).map(|_| assignment("$2000")).collect();
        let load = build_load(&operator(40.0, None), &assignments);
        assert_eq!(load.allocation_percentage, 1.0);
    }
}
