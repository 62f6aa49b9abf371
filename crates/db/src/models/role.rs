//! Role entity model and DTOs for the marketplace lifecycle.

use chrono::NaiveDate;
use crewcall_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::StatusId;

/// A row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub client_id: DbId,
    pub operator_id: Option<DbId>,
    pub category: String,
    pub workstream: String,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub pay_range: String,
    pub deadline: NaiveDate,
    pub location: Option<String>,
    pub visibility: String,
    pub tags: Vec<String>,
    pub media_url: Option<String>,
    pub status_id: StatusId,
    pub cancel_reason: Option<String>,
    pub feedback_rating: Option<i16>,
    pub feedback_comment: Option<String>,
    /// External BEAM listing id, recorded as metadata after a successful
    /// sync. Never a lifecycle state.
    pub beam_ref: Option<String>,
    pub beam_synced_at: Option<Timestamp>,
    /// Hash of the last payload pushed to BEAM; the gateway's local
    /// de-duplication ledger.
    pub beam_payload_hash: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// DTO for creating a role via `POST /api/v1/roles`.
#[derive(Debug, Deserialize)]
pub struct CreateRole {
    pub client_id: DbId,
    pub category: String,
    pub workstream: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub pay_range: String,
    pub deadline: NaiveDate,
    pub location: Option<String>,
    /// Defaults to `public`.
    pub visibility: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub media_url: Option<String>,
}

/// DTO for the full-field edit via `PUT /api/v1/roles/{id}`.
///
/// Only set fields are written. Edits are rejected once the role leaves
/// Draft/Live; scope cannot silently change under an assigned operator.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRole {
    pub category: Option<String>,
    pub workstream: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
    pub pay_range: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub location: Option<String>,
    pub visibility: Option<String>,
    pub tags: Option<Vec<String>>,
    pub media_url: Option<String>,
}

/// Query parameters for `GET /api/v1/roles` (the query facade).
#[derive(Debug, Default, Deserialize)]
pub struct RoleListQuery {
    pub client_id: Option<DbId>,
    pub operator_id: Option<DbId>,
    /// Lookup-table slug, e.g. `live`.
    pub status: Option<String>,
    pub category: Option<String>,
    pub workstream: Option<String>,
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

/// Body for `POST /api/v1/roles/{id}/claim`.
#[derive(Debug, Deserialize)]
pub struct ClaimRole {
    pub operator_id: DbId,
}

/// Body for `POST /api/v1/roles/{id}/advance`.
#[derive(Debug, Deserialize)]
pub struct AdvanceRole {
    /// Target status slug: `in_progress`, `review`, or `completed`.
    pub status: String,
}

/// Body for `POST /api/v1/roles/{id}/cancel`.
#[derive(Debug, Deserialize)]
pub struct CancelRole {
    pub reason: String,
}

/// Body for `POST /api/v1/roles/{id}/feedback`.
#[derive(Debug, Deserialize)]
pub struct RoleFeedback {
    pub rating: i16,
    pub comment: Option<String>,
}
