//! Operator type reference data. Seeded by migration, shared by many
//! operators, never mutated through the API.

use crewcall_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `operator_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OperatorType {
    pub id: DbId,
    pub name: String,
    pub icon: String,
    pub color: String,
    /// Base hourly capacity per week for operators of this type, unless an
    /// operator carries a personal override.
    pub base_weekly_hours: f64,
    pub created_at: Timestamp,
}
