//! Repository for the `operators` table.
//!
//! The allocator always reads operators joined with their type so the
//! effective capacity (override or type base) is available in one row.
//! The claim path locks the operator row for the duration of the capacity
//! check so two concurrent claims cannot both pass it.

use sqlx::{PgConnection, PgPool};

use crewcall_core::types::DbId;

use crate::models::operator::{CreateOperator, Operator, OperatorWithType};
use crate::models::status::{OperatorStatus, StatusId};

/// Column list for bare `operators` queries.
const COLUMNS: &str = "\
    id, name, email, status_id, efficiency_rating, capacity_override, \
    operator_type_id, created_at, updated_at";

/// Column list for operator-with-type joins.
const JOINED_COLUMNS: &str = "\
    o.id, o.name, o.email, o.status_id, o.efficiency_rating, o.capacity_override, \
    o.operator_type_id, t.name AS type_name, t.base_weekly_hours, \
    o.created_at, o.updated_at";

/// Provides CRUD operations for operators.
pub struct OperatorRepo;

impl OperatorRepo {
    /// Insert a new operator, defaulting to `available`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOperator,
        efficiency_rating: f64,
    ) -> Result<Operator, sqlx::Error> {
        let query = format!(
            "INSERT INTO operators (name, email, status_id, efficiency_rating, \
             capacity_override, operator_type_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Operator>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(OperatorStatus::Available.id())
            .bind(efficiency_rating)
            .bind(input.capacity_override)
            .bind(input.operator_type_id)
            .fetch_one(pool)
            .await
    }

    /// Fetch an operator by id.
    pub async fn find_by_id(
        pool: &PgPool,
        operator_id: DbId,
    ) -> Result<Option<Operator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM operators WHERE id = $1");
        sqlx::query_as::<_, Operator>(&query)
            .bind(operator_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch an operator joined with its type.
    pub async fn find_with_type(
        executor: impl sqlx::PgExecutor<'_>,
        operator_id: DbId,
    ) -> Result<Option<OperatorWithType>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM operators o \
             JOIN operator_types t ON t.id = o.operator_type_id \
             WHERE o.id = $1"
        );
        sqlx::query_as::<_, OperatorWithType>(&query)
            .bind(operator_id)
            .fetch_optional(executor)
            .await
    }

    /// Fetch an operator joined with its type, locking the operator row
    /// until the surrounding transaction ends. Serializes concurrent
    /// capacity checks against the same operator.
    pub async fn lock_with_type(
        conn: &mut PgConnection,
        operator_id: DbId,
    ) -> Result<Option<OperatorWithType>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM operators o \
             JOIN operator_types t ON t.id = o.operator_type_id \
             WHERE o.id = $1 \
             FOR UPDATE OF o"
        );
        sqlx::query_as::<_, OperatorWithType>(&query)
            .bind(operator_id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List all operators joined with their types, newest first.
    pub async fn list_with_type(pool: &PgPool) -> Result<Vec<OperatorWithType>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM operators o \
             JOIN operator_types t ON t.id = o.operator_type_id \
             ORDER BY o.created_at DESC, o.id DESC"
        );
        sqlx::query_as::<_, OperatorWithType>(&query)
            .fetch_all(pool)
            .await
    }

    /// Write the merged final values of a patch. The handler resolves
    /// slugs and merge semantics; this is a plain full-row update.
    pub async fn update(
        pool: &PgPool,
        operator_id: DbId,
        name: &str,
        email: &str,
        status_id: StatusId,
        efficiency_rating: f64,
        capacity_override: Option<f64>,
    ) -> Result<Option<Operator>, sqlx::Error> {
        let query = format!(
            "UPDATE operators SET name = $2, email = $3, status_id = $4, \
                 efficiency_rating = $5, capacity_override = $6, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Operator>(&query)
            .bind(operator_id)
            .bind(name)
            .bind(email)
            .bind(status_id)
            .bind(efficiency_rating)
            .bind(capacity_override)
            .fetch_optional(pool)
            .await
    }
}
