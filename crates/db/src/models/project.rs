//! Project entity model and DTOs.

use hr_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::models::{check_date_range, not_blank};
use crate::models::status::{ProjectStatus, StatusId, UNKNOWN_STATUS};

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub project_code: String,
    pub project_name: String,
    pub project_description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status_id: StatusId,
    pub delete_flag: bool,
    pub created_at: Timestamp,
    pub created_by: Option<String>,
    pub modified_at: Option<Timestamp>,
    pub modified_by: Option<String>,
}

/// Request body for creating or updating a project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_project_dates"))]
pub struct ProjectRequest {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub project_name: String,
    #[validate(length(max = 2000))]
    pub project_description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    /// Defaults to 1 (NotStarted) if omitted.
    pub status_id: Option<StatusId>,
}

fn validate_project_dates(request: &ProjectRequest) -> Result<(), ValidationError> {
    check_date_range(request.start_date, request.end_date)
}

impl ProjectRequest {
    /// The requested status, or `None` when the id is not a known status.
    pub fn status(&self) -> Option<ProjectStatus> {
        match self.status_id {
            None => Some(ProjectStatus::NotStarted),
            Some(id) => ProjectStatus::from_id(id),
        }
    }

    /// Build the insert record for a freshly generated code.
    pub fn to_new_project(
        &self,
        project_code: String,
        status: ProjectStatus,
        created_by: &str,
    ) -> NewProject {
        NewProject {
            project_code,
            project_name: self.project_name.clone(),
            project_description: self.project_description.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            status_id: status.id(),
            created_by: created_by.to_string(),
        }
    }
}

/// Insert record for the `projects` table.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub project_code: String,
    pub project_name: String,
    pub project_description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status_id: StatusId,
    pub created_by: String,
}

/// Response shape for a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectResponse {
    pub project_code: String,
    pub project_name: String,
    pub project_description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status_id: StatusId,
    pub status: &'static str,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        let status = ProjectStatus::from_id(project.status_id)
            .map(ProjectStatus::name)
            .unwrap_or(UNKNOWN_STATUS);
        Self {
            project_code: project.project_code,
            project_name: project.project_name,
            project_description: project.project_description,
            start_date: project.start_date,
            end_date: project.end_date,
            status_id: project.status_id,
            status,
        }
    }
}
