//! Repository for the `roles` table.
//!
//! Uses `RoleStatus` from `models::status` for all status transitions.
//! Lifecycle writes are compare-and-set: `UPDATE ... WHERE status_id =
//! $expected ... RETURNING`, so of two concurrent writers exactly one
//! observes a row and the loser gets `None` back.

use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use crewcall_core::lifecycle;
use crewcall_core::types::DbId;

use crate::models::role::{CreateRole, Role, RoleListQuery, UpdateRole};
use crate::models::status::{RoleStatus, StatusId};

/// Column list for `roles` queries.
const COLUMNS: &str = "\
    id, client_id, operator_id, category, workstream, title, description, \
    skills, pay_range, deadline, location, visibility, tags, media_url, \
    status_id, cancel_reason, feedback_rating, feedback_comment, \
    beam_ref, beam_synced_at, beam_payload_hash, \
    created_at, updated_at, completed_at";

/// Maximum page size for role listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for role listing.
const DEFAULT_LIMIT: i64 = 50;

/// Provides CRUD and lifecycle operations for roles.
pub struct RoleRepo;

impl RoleRepo {
    /// Insert a new Draft role. The category/workstream/visibility slugs
    /// must already be canonicalized by the caller.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRole,
        category: &str,
        workstream: &str,
        visibility: &str,
    ) -> Result<Role, sqlx::Error> {
        let query = format!(
            "INSERT INTO roles (client_id, category, workstream, title, description, \
             skills, pay_range, deadline, location, visibility, tags, media_url, status_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(input.client_id)
            .bind(category)
            .bind(workstream)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.skills)
            .bind(&input.pay_range)
            .bind(input.deadline)
            .bind(&input.location)
            .bind(visibility)
            .bind(&input.tags)
            .bind(&input.media_url)
            .bind(RoleStatus::Draft.id())
            .fetch_one(pool)
            .await
    }

    /// Fetch a role by id. Works on the pool or inside a transaction.
    pub async fn find_by_id(
        executor: impl sqlx::PgExecutor<'_>,
        role_id: DbId,
    ) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE id = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(role_id)
            .fetch_optional(executor)
            .await
    }

    /// The query facade: filter by any combination of client, operator,
    /// status, category, and workstream; newest first.
    pub async fn list(
        pool: &PgPool,
        params: &RoleListQuery,
        status_id: Option<StatusId>,
    ) -> Result<Vec<Role>, sqlx::Error> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM roles WHERE TRUE"));

        if let Some(client_id) = params.client_id {
            builder.push(" AND client_id = ").push_bind(client_id);
        }
        if let Some(operator_id) = params.operator_id {
            builder.push(" AND operator_id = ").push_bind(operator_id);
        }
        if let Some(status_id) = status_id {
            builder.push(" AND status_id = ").push_bind(status_id);
        }
        if let Some(category) = &params.category {
            builder.push(" AND category = ").push_bind(category);
        }
        if let Some(workstream) = &params.workstream {
            builder.push(" AND workstream = ").push_bind(workstream);
        }

        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0);
        builder
            .push(" ORDER BY created_at DESC, id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        builder.build_query_as::<Role>().fetch_all(pool).await
    }

    /// Full-field edit, permitted only while the role is still Draft or
    /// Live. Returns `None` when the role is missing or no longer
    /// editable; the caller distinguishes by re-fetching.
    pub async fn update(
        pool: &PgPool,
        role_id: DbId,
        patch: &UpdateRole,
    ) -> Result<Option<Role>, sqlx::Error> {
        let query = format!(
            "UPDATE roles SET \
                 category = COALESCE($2, category), \
                 workstream = COALESCE($3, workstream), \
                 title = COALESCE($4, title), \
                 description = COALESCE($5, description), \
                 skills = COALESCE($6, skills), \
                 pay_range = COALESCE($7, pay_range), \
                 deadline = COALESCE($8, deadline), \
                 location = COALESCE($9, location), \
                 visibility = COALESCE($10, visibility), \
                 tags = COALESCE($11, tags), \
                 media_url = COALESCE($12, media_url), \
                 updated_at = NOW() \
             WHERE id = $1 AND status_id = ANY($13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(role_id)
            .bind(&patch.category)
            .bind(&patch.workstream)
            .bind(&patch.title)
            .bind(&patch.description)
            .bind(&patch.skills)
            .bind(&patch.pay_range)
            .bind(patch.deadline)
            .bind(&patch.location)
            .bind(&patch.visibility)
            .bind(&patch.tags)
            .bind(&patch.media_url)
            .bind(lifecycle::EDITABLE_STATUSES.to_vec())
            .fetch_optional(pool)
            .await
    }

    /// Compare-and-set status transition. Returns `None` when the role is
    /// missing or not currently in `from`; the loser of a race lands
    /// here, never on a double-write.
    pub async fn transition(
        pool: &PgPool,
        role_id: DbId,
        from: RoleStatus,
        to: RoleStatus,
    ) -> Result<Option<Role>, sqlx::Error> {
        let query = format!(
            "UPDATE roles SET status_id = $3, updated_at = NOW() \
             WHERE id = $1 AND status_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(role_id)
            .bind(from.id())
            .bind(to.id())
            .fetch_optional(pool)
            .await
    }

    /// Terminal Review -> Completed transition; records the completion
    /// timestamp in the same atomic write.
    pub async fn complete(pool: &PgPool, role_id: DbId) -> Result<Option<Role>, sqlx::Error> {
        let query = format!(
            "UPDATE roles SET status_id = $2, completed_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND status_id = $3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(role_id)
            .bind(RoleStatus::Completed.id())
            .bind(RoleStatus::Review.id())
            .fetch_optional(pool)
            .await
    }

    /// Cancel from any non-terminal state, recording the reason. Returns
    /// `None` when the role is missing or already terminal.
    pub async fn cancel(
        pool: &PgPool,
        role_id: DbId,
        reason: &str,
    ) -> Result<Option<Role>, sqlx::Error> {
        let query = format!(
            "UPDATE roles SET status_id = $2, cancel_reason = $3, updated_at = NOW() \
             WHERE id = $1 AND status_id NOT IN ($4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(role_id)
            .bind(RoleStatus::Cancelled.id())
            .bind(reason)
            .bind(RoleStatus::Completed.id())
            .bind(RoleStatus::Cancelled.id())
            .fetch_optional(pool)
            .await
    }

    /// Bind an operator to a Live role. Runs inside the claim transaction
    /// after the capacity check; the `operator_id IS NULL` guard is the
    /// single-reservation invariant (one operator per role, ever).
    pub async fn claim(
        conn: &mut PgConnection,
        role_id: DbId,
        operator_id: DbId,
    ) -> Result<Option<Role>, sqlx::Error> {
        let query = format!(
            "UPDATE roles SET status_id = $3, operator_id = $2, updated_at = NOW() \
             WHERE id = $1 AND status_id = $4 AND operator_id IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(role_id)
            .bind(operator_id)
            .bind(RoleStatus::Claimed.id())
            .bind(RoleStatus::Live.id())
            .fetch_optional(&mut *conn)
            .await
    }

    /// Roles currently counting against an operator's capacity.
    pub async fn active_assignments(
        executor: impl sqlx::PgExecutor<'_>,
        operator_id: DbId,
    ) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM roles \
             WHERE operator_id = $1 AND status_id = ANY($2) \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(operator_id)
            .bind(lifecycle::ACTIVE_ASSIGNMENT_STATUSES.to_vec())
            .fetch_all(executor)
            .await
    }

    /// Record a successful BEAM sync: external listing id plus the payload
    /// hash used for local de-duplication. Metadata only: status_id is
    /// deliberately untouched.
    pub async fn mark_synced(
        pool: &PgPool,
        role_id: DbId,
        beam_ref: &str,
        payload_hash: &str,
    ) -> Result<Option<Role>, sqlx::Error> {
        let query = format!(
            "UPDATE roles SET beam_ref = $2, beam_payload_hash = $3, \
                 beam_synced_at = NOW(), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(role_id)
            .bind(beam_ref)
            .bind(payload_hash)
            .fetch_optional(pool)
            .await
    }

    /// Attach completion feedback. Only a Completed role accepts it.
    pub async fn set_feedback(
        pool: &PgPool,
        role_id: DbId,
        rating: i16,
        comment: Option<&str>,
    ) -> Result<Option<Role>, sqlx::Error> {
        let query = format!(
            "UPDATE roles SET feedback_rating = $2, feedback_comment = $3, updated_at = NOW() \
             WHERE id = $1 AND status_id = $4 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(role_id)
            .bind(rating)
            .bind(comment)
            .bind(RoleStatus::Completed.id())
            .fetch_optional(pool)
            .await
    }
}
