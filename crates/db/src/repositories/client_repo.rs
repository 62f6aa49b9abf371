//! Repository for the `clients` table.

use sqlx::PgPool;

use crewcall_core::lifecycle;
use crewcall_core::types::DbId;

use crate::models::client::{Client, ClientStats, CreateClient};
use crate::models::status::RoleStatus;

const COLUMNS: &str = "id, name, email, subscription_tier, created_at, updated_at";

pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client.
    pub async fn create(
        pool: &PgPool,
        input: &CreateClient,
        subscription_tier: &str,
    ) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, email, subscription_tier) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(subscription_tier)
            .fetch_one(pool)
            .await
    }

    /// Fetch a client by id.
    pub async fn find_by_id(pool: &PgPool, client_id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(client_id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Aggregate role counts for a client, computed on demand.
    pub async fn stats(pool: &PgPool, client_id: DbId) -> Result<ClientStats, sqlx::Error> {
        sqlx::query_as::<_, ClientStats>(
            "SELECT \
                 COUNT(*) AS total_roles, \
                 COUNT(*) FILTER (WHERE status_id = ANY($2)) AS open_roles, \
                 COUNT(*) FILTER (WHERE status_id = $3) AS completed_roles \
             FROM roles WHERE client_id = $1",
        )
        .bind(client_id)
        .bind(open_statuses())
        .bind(RoleStatus::Completed.id())
        .fetch_one(pool)
        .await
    }
}

/// Statuses counted as "open" in client stats: anything non-terminal.
fn open_statuses() -> Vec<i16> {
    [
        lifecycle::STATUS_DRAFT,
        lifecycle::STATUS_LIVE,
        lifecycle::STATUS_CLAIMED,
        lifecycle::STATUS_IN_PROGRESS,
        lifecycle::STATUS_REVIEW,
        lifecycle::STATUS_FILLED,
    ]
    .to_vec()
}
