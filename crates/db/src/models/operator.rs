//! Operator entity model and DTOs.

use crewcall_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::StatusId;

/// A row from the `operators` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Operator {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub status_id: StatusId,
    pub efficiency_rating: f64,
    /// Supersedes the type's base weekly hours when present.
    pub capacity_override: Option<f64>,
    pub operator_type_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An operator joined with its type's capacity attributes. Everything the
/// allocator needs in one row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OperatorWithType {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub status_id: StatusId,
    pub efficiency_rating: f64,
    pub capacity_override: Option<f64>,
    pub operator_type_id: DbId,
    pub type_name: String,
    pub base_weekly_hours: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an operator via `POST /api/v1/operators`.
#[derive(Debug, Deserialize)]
pub struct CreateOperator {
    pub name: String,
    pub email: String,
    pub operator_type_id: DbId,
    pub efficiency_rating: Option<f64>,
    pub capacity_override: Option<f64>,
}

/// DTO for `PUT /api/v1/operators/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateOperator {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Lookup-table slug: `available`, `busy`, `offline`, `on_leave`.
    pub status: Option<String>,
    pub efficiency_rating: Option<f64>,
    /// `Some(None)` clears the override; absent leaves it untouched.
    #[serde(default, with = "double_option")]
    pub capacity_override: Option<Option<f64>>,
}

/// Distinguishes "field absent" from "field explicitly null" for the
/// capacity override patch.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<f64>::deserialize(deserializer).map(Some)
    }
}
