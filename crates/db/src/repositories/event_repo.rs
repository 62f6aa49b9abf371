//! Repository for the `events` audit table.

use sqlx::PgPool;

use crewcall_core::types::DbId;

use crate::models::event::EventRow;

const COLUMNS: &str = "\
    id, event_type, source_entity_type, source_entity_id, actor_client_id, \
    payload, created_at";

/// Maximum page size for event listing.
const MAX_LIMIT: i64 = 200;

pub struct EventRepo;

impl EventRepo {
    /// Append an event. Called by the persistence subscriber only.
    pub async fn insert(
        pool: &PgPool,
        event_type: &str,
        source_entity_type: Option<&str>,
        source_entity_id: Option<DbId>,
        actor_client_id: Option<DbId>,
        payload: &serde_json::Value,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO events (event_type, source_entity_type, source_entity_id, \
             actor_client_id, payload) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(event_type)
        .bind(source_entity_type)
        .bind(source_entity_id)
        .bind(actor_client_id)
        .bind(payload)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Most recent events, newest first.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<EventRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY id DESC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, EventRow>(&query)
            .bind(limit.clamp(1, MAX_LIMIT))
            .bind(offset.max(0))
            .fetch_all(pool)
            .await
    }
}
