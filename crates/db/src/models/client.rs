//! Client entity model and DTOs. Roles reference clients by id only; a
//! client owns none of the role lifecycle.

use crewcall_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subscription_tier: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Aggregate role counts for a client, computed by query, never stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientStats {
    pub total_roles: i64,
    pub open_roles: i64,
    pub completed_roles: i64,
}

/// DTO for creating a client via `POST /api/v1/clients`.
#[derive(Debug, Deserialize)]
pub struct CreateClient {
    pub name: String,
    pub email: String,
    /// Defaults to `free`.
    pub subscription_tier: Option<String>,
}
