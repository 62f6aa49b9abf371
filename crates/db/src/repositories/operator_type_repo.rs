//! Repository for the `operator_types` reference table. Read-only: the
//! rows are seeded by migration and shared by every operator of a type.

use sqlx::PgPool;

use crewcall_core::types::DbId;

use crate::models::operator_type::OperatorType;

const COLUMNS: &str = "id, name, icon, color, base_weekly_hours, created_at";

pub struct OperatorTypeRepo;

impl OperatorTypeRepo {
    /// List all operator types in seed order.
    pub async fn list(pool: &PgPool) -> Result<Vec<OperatorType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM operator_types ORDER BY id");
        sqlx::query_as::<_, OperatorType>(&query)
            .fetch_all(pool)
            .await
    }

    /// Fetch a single type by id.
    pub async fn find_by_id(
        pool: &PgPool,
        type_id: DbId,
    ) -> Result<Option<OperatorType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM operator_types WHERE id = $1");
        sqlx::query_as::<_, OperatorType>(&query)
            .bind(type_id)
            .fetch_optional(pool)
            .await
    }
}
