//! Repository for the `tasks` table.

use hr_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::task::{NewTask, Task};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, task_code, employee_code, project_code, task_name, task_description, \
                       start_date, end_date, status_id, working_hour, delete_flag, \
                       created_at, created_by, modified_at, modified_by";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task. Returns the number of inserted rows.
    pub async fn create(pool: &PgPool, input: &NewTask) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO tasks
                (task_code, employee_code, project_code, task_name, task_description,
                 start_date, end_date, status_id, working_hour, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(&input.task_code)
        .bind(&input.employee_code)
        .bind(&input.project_code)
        .bind(&input.task_name)
        .bind(&input.task_description)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.status_id)
        .bind(input.working_hour)
        .bind(&input.created_by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Code of the most recently created task, soft-deleted rows included.
    pub async fn last_code(pool: &PgPool) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT task_code FROM tasks ORDER BY created_at DESC, id DESC LIMIT 1",
        )
        .fetch_optional(pool)
        .await
    }

    /// List all tasks ordered by most recently created first. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE delete_flag = FALSE
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// List the live tasks of one project, most recently created first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_code: &str,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE project_code = $1 AND delete_flag = FALSE
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_code)
            .fetch_all(pool)
            .await
    }

    /// Find a task by its code. Excludes soft-deleted rows.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Task>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM tasks WHERE task_code = $1 AND delete_flag = FALSE");
        sqlx::query_as::<_, Task>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the mutable columns of the live task identified by `task.id`.
    pub async fn update(pool: &PgPool, task: &Task) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tasks SET
                employee_code = $2,
                project_code = $3,
                task_name = $4,
                task_description = $5,
                start_date = $6,
                end_date = $7,
                status_id = $8,
                working_hour = $9,
                modified_at = $10,
                modified_by = $11
             WHERE id = $1 AND delete_flag = FALSE",
        )
        .bind(task.id)
        .bind(&task.employee_code)
        .bind(&task.project_code)
        .bind(&task.task_name)
        .bind(&task.task_description)
        .bind(task.start_date)
        .bind(task.end_date)
        .bind(task.status_id)
        .bind(task.working_hour)
        .bind(task.modified_at)
        .bind(&task.modified_by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Soft-delete a task by ID. Returns the number of rows flagged.
    pub async fn soft_delete(
        pool: &PgPool,
        id: DbId,
        modified_at: Timestamp,
        modified_by: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tasks SET delete_flag = TRUE, modified_at = $2, modified_by = $3
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
