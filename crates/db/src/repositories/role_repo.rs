//! Repository for the `roles` table.

use hr_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::role::{NewRole, Role};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, role_code, role_name, unique_name, delete_flag, \
                       created_at, created_by, modified_at, modified_by";

/// Provides CRUD operations for roles.
pub struct RoleRepo;

impl RoleRepo {
    /// Insert a new role. Returns the number of inserted rows.
    pub async fn create(pool: &PgPool, input: &NewRole) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO roles (role_code, role_name, unique_name, created_by)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&input.role_code)
        .bind(&input.role_name)
        .bind(&input.unique_name)
        .bind(&input.created_by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// List all roles ordered by ID ascending. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE delete_flag = FALSE ORDER BY id ASC");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }

    /// Find a role by its code. Excludes soft-deleted rows.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Role>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM roles WHERE role_code = $1 AND delete_flag = FALSE");
        sqlx::query_as::<_, Role>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the mutable columns of the live role identified by `role.id`.
    pub async fn update(pool: &PgPool, role: &Role) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE roles SET
                role_name = $2,
                unique_name = $3,
                modified_at = $4,
                modified_by = $5
             WHERE id = $1 AND delete_flag = FALSE",
        )
        .bind(role.id)
        .bind(&role.role_name)
        .bind(&role.unique_name)
        .bind(role.modified_at)
        .bind(&role.modified_by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Soft-delete a role by ID. Returns the number of rows flagged.
    pub async fn soft_delete(
        pool: &PgPool,
        id: DbId,
        modified_at: Timestamp,
        modified_by: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE roles SET delete_flag = TRUE, modified_at = $2, modified_by = $3
             WHERE id = $1 AND delete_flag = FALSE",
        )
        .bind(id)
        .bind(modified_at)
        .bind(modified_by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
