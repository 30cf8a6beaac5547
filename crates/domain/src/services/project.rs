//! Data-access service for projects.

use std::sync::Arc;

use chrono::Utc;
use hr_core::code_generator::CodeGenerator;
use hr_core::error::CoreError;
use hr_core::outcome::{Outcome, Success};
use hr_db::models::project::{Project, ProjectRequest, ProjectResponse};
use hr_db::models::status::ProjectStatus;

use super::{store_failure, validate_request, DEFAULT_ACTOR};
use crate::store::{ProjectStore, StoreError};

/// Resolve the request's status id, rejecting ids with no seed row.
fn requested_status(request: &ProjectRequest) -> Result<ProjectStatus, CoreError> {
    request.status().ok_or_else(|| {
        CoreError::validation(format!(
            "unknown project status id {}",
            request.status_id.unwrap_or_default()
        ))
    })
}

pub struct ProjectService<S: ?Sized> {
    store: Arc<S>,
    codes: CodeGenerator,
    actor: String,
}

impl<S: ProjectStore + ?Sized> ProjectService<S> {
    pub fn new(store: Arc<S>, codes: CodeGenerator) -> Self {
        Self {
            store,
            codes,
            actor: DEFAULT_ACTOR.to_string(),
        }
    }

    /// Stamp `created_by` / `modified_by` with `actor` instead of the default.
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = actor.into();
        self
    }

    /// Create a project under the next sequential code and return that code.
    ///
    /// The code is derived from the most recently created project. Two
    /// concurrent creates can derive the same code; the store's unique
    /// constraint rejects the second one, reported as `DuplicateRecord`.
    pub async fn create(&self, request: &ProjectRequest) -> Outcome<String> {
        validate_request(request)?;
        let status = requested_status(request)?;

        let last_code = self
            .store
            .last_project_code()
            .await
            .map_err(|e| store_failure("creating project", e))?;
        let project_code = self.codes.next_code(last_code.as_deref())?;

        let new_project = request.to_new_project(project_code.clone(), status, &self.actor);
        match self.store.insert_project(&new_project).await {
            Ok(0) => Err(CoreError::internal("fail to create project!")),
            Ok(_) => {
                tracing::info!(code = %project_code, "Project created");
                Ok(Success::with_message(project_code, "project created success"))
            }
            Err(StoreError::UniqueViolation { constraint }) => {
                tracing::warn!(code = %project_code, %constraint, "Generated project code already taken");
                Err(CoreError::duplicate_record(format!(
                    "A project with code '{project_code}' already exists!"
                )))
            }
            Err(e) => Err(store_failure("creating project", e)),
        }
    }

    /// All live projects, most recently created first.
    pub async fn get_all(&self) -> Outcome<Vec<ProjectResponse>> {
        let projects = self
            .store
            .list_projects()
            .await
            .map_err(|e| store_failure("retrieving projects", e))?;

        if projects.is_empty() {
            return Err(CoreError::not_found("no projects found!"));
        }

        Ok(Success::new(
            projects.into_iter().map(ProjectResponse::from).collect(),
        ))
    }

    pub async fn get_by_code(&self, code: &str) -> Outcome<ProjectResponse> {
        let project = self
            .store
            .find_project_by_code(code)
            .await
            .map_err(|e| store_failure("retrieving project", e))?
            .ok_or_else(|| CoreError::not_found("no project found!"))?;

        Ok(Success::new(ProjectResponse::from(project)))
    }

    /// Overwrite name, description, dates and status of a live project.
    pub async fn update(&self, code: &str, request: &ProjectRequest) -> Outcome<()> {
        validate_request(request)?;
        let status = requested_status(request)?;

        let existing = self
            .store
            .find_project_by_code(code)
            .await
            .map_err(|e| store_failure("updating project", e))?
            .ok_or_else(|| CoreError::not_found("no project found to update!"))?;

        let merged = Project {
            project_name: request.project_name.clone(),
            project_description: request.project_description.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
            status_id: status.id(),
            modified_at: Some(Utc::now()),
            modified_by: Some(self.actor.clone()),
            ..existing
        };

        match self.store.update_project(&merged).await {
            Ok(0) => Err(CoreError::internal("fail to update project!")),
            Ok(_) => {
                tracing::info!(code, "Project updated");
                Ok(Success::with_message((), "project updated success"))
            }
            Err(e) => Err(store_failure("updating project", e)),
        }
    }

    /// Flag a live project as deleted. The row itself is kept.
    pub async fn delete(&self, code: &str) -> Outcome<()> {
        let project = self
            .store
            .find_project_by_code(code)
            .await
            .map_err(|e| store_failure("deleting project", e))?
            .ok_or_else(|| CoreError::not_found("no project found to delete!"))?;

        match self
            .store
            .soft_delete_project(project.id, Utc::now(), &self.actor)
            .await
        {
            Ok(0) => Err(CoreError::internal("fail to delete project!")),
            Ok(_) => {
                tracing::info!(code, id = project.id, "Project soft-deleted");
                Ok(Success::with_message((), "project deleted success."))
            }
            Err(e) => Err(store_failure("deleting project", e)),
        }
    }
}
