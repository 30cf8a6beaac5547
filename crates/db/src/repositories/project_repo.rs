//! Repository for the `projects` table.

use hr_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::project::{NewProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_code, project_name, project_description, start_date, end_date, \
                       status_id, delete_flag, created_at, created_by, modified_at, modified_by";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project. Returns the number of inserted rows.
    ///
    /// A duplicate `project_code` fails with the `uq_projects_project_code`
    /// unique violation.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO projects
                (project_code, project_name, project_description, start_date, end_date,
                 status_id, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&input.project_code)
        .bind(&input.project_name)
        .bind(&input.project_description)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.status_id)
        .bind(&input.created_by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Code of the most recently created project, soft-deleted rows included.
    pub async fn last_code(pool: &PgPool) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT project_code FROM projects ORDER BY created_at DESC, id DESC LIMIT 1",
        )
        .fetch_optional(pool)
        .await
    }

    /// List all projects ordered by most recently created first. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE delete_flag = FALSE
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Find a project by its code. Excludes soft-deleted rows.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE project_code = $1 AND delete_flag = FALSE"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the mutable columns of the live project identified by `project.id`.
    pub async fn update(pool: &PgPool, project: &Project) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET
                project_name = $2,
                project_description = $3,
                start_date = $4,
                end_date = $5,
                status_id = $6,
                modified_at = $7,
                modified_by = $8
             WHERE id = $1 AND delete_flag = FALSE",
        )
        .bind(project.id)
        .bind(&project.project_name)
        .bind(&project.project_description)
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(project.status_id)
        .bind(project.modified_at)
        .bind(&project.modified_by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Soft-delete a project by ID. Returns the number of rows flagged.
    pub async fn soft_delete(
        pool: &PgPool,
        id: DbId,
        modified_at: Timestamp,
        modified_by: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET delete_flag = TRUE, modified_at = $2, modified_by = $3
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
