//! Task entity model and DTOs.

use hr_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::models::{check_date_range, not_blank};
use crate::models::status::{StatusId, TaskStatus, UNKNOWN_STATUS};

/// A task row from the `tasks` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub task_code: String,
    pub employee_code: String,
    pub project_code: String,
    pub task_name: String,
    pub task_description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status_id: StatusId,
    pub working_hour: Option<f64>,
    pub delete_flag: bool,
    pub created_at: Timestamp,
    pub created_by: Option<String>,
    pub modified_at: Option<Timestamp>,
    pub modified_by: Option<String>,
}

/// Request body for creating or updating a task.
///
/// Tasks reference their employee and project by code, not by id.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_task_dates"))]
pub struct TaskCreateRequest {
    #[validate(required, length(min = 1, max = 50), custom(function = "not_blank"))]
    pub employee_code: Option<String>,
    #[validate(required, length(min = 1, max = 50), custom(function = "not_blank"))]
    pub project_code: Option<String>,
    #[validate(required, length(min = 1, max = 200), custom(function = "not_blank"))]
    pub task_name: Option<String>,
    #[validate(length(max = 2000))]
    pub task_description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    /// Defaults to 1 (Todo) if omitted.
    pub status_id: Option<StatusId>,
    #[validate(range(min = 0.0, max = 24.0))]
    pub working_hour: Option<f64>,
}

fn validate_task_dates(request: &TaskCreateRequest) -> Result<(), ValidationError> {
    check_date_range(request.start_date, request.end_date)
}

impl TaskCreateRequest {
    /// The requested status, or `None` when the id is not a known status.
    pub fn status(&self) -> Option<TaskStatus> {
        match self.status_id {
            None => Some(TaskStatus::Todo),
            Some(id) => TaskStatus::from_id(id),
        }
    }

    /// Build the insert record. Returns `None` if a required field is missing,
    /// which [`Validate::validate`] already rejects.
    pub fn to_new_task(
        &self,
        task_code: String,
        status: TaskStatus,
        created_by: &str,
    ) -> Option<NewTask> {
        Some(NewTask {
            task_code,
            employee_code: self.employee_code.clone()?,
            project_code: self.project_code.clone()?,
            task_name: self.task_name.clone()?,
            task_description: self.task_description.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            status_id: status.id(),
            working_hour: self.working_hour,
            created_by: created_by.to_string(),
        })
    }
}

/// Insert record for the `tasks` table.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub task_code: String,
    pub employee_code: String,
    pub project_code: String,
    pub task_name: String,
    pub task_description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status_id: StatusId,
    pub working_hour: Option<f64>,
    pub created_by: String,
}

/// Response shape for a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskResponse {
    pub task_code: String,
    pub employee_code: String,
    pub project_code: String,
    pub task_name: String,
    pub task_description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status_id: StatusId,
    pub status: &'static str,
    pub working_hour: Option<f64>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        let status = TaskStatus::from_id(task.status_id)
            .map(TaskStatus::name)
            .unwrap_or(UNKNOWN_STATUS);
        Self {
            task_code: task.task_code,
            employee_code: task.employee_code,
            project_code: task.project_code,
            task_name: task.task_name,
            task_description: task.task_description,
            start_date: task.start_date,
            end_date: task.end_date,
            status_id: task.status_id,
            status,
            working_hour: task.working_hour,
        }
    }
}
