//! Persisted platform event rows (audit trail).

use crewcall_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventRow {
    pub id: DbId,
    pub event_type: String,
    pub source_entity_type: Option<String>,
    pub source_entity_id: Option<DbId>,
    pub actor_client_id: Option<DbId>,
    pub payload: serde_json::Value,
    pub created_at: Timestamp,
}
