//! Data-access service for tasks.

use std::sync::Arc;

use chrono::Utc;
use hr_core::code_generator::CodeGenerator;
use hr_core::error::CoreError;
use hr_core::outcome::{Outcome, Success};
use hr_db::models::status::TaskStatus;
use hr_db::models::task::{Task, TaskCreateRequest, TaskResponse};

use super::{store_failure, validate_request, DEFAULT_ACTOR};
use crate::store::{ProjectStore, StoreError, TaskStore};

pub struct TaskService<S: ?Sized> {
    store: Arc<S>,
    codes: CodeGenerator,
    actor: String,
}

fn requested_status(request: &TaskCreateRequest) -> Result<TaskStatus, CoreError> {
    request.status().ok_or_else(|| {
        CoreError::validation(format!(
            "unknown task status id {}",
            request.status_id.unwrap_or_default()
        ))
    })
}

fn missing_fields() -> CoreError {
    CoreError::validation("employee code, project code and task name are required")
}

impl<S: TaskStore + ProjectStore + ?Sized> TaskService<S> {
    pub fn new(store: Arc<S>, codes: CodeGenerator) -> Self {
        Self {
            store,
            codes,
            actor: DEFAULT_ACTOR.to_string(),
        }
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = actor.into();
        self
    }

    /// Tasks may only point at live projects.
    async fn ensure_project_exists(&self, project_code: &str, action: &str) -> Result<(), CoreError> {
        let project = self
            .store
            .find_project_by_code(project_code)
            .await
            .map_err(|e| store_failure(action, e))?;

        match project {
            Some(_) => Ok(()),
            None => Err(CoreError::validation(format!(
                "project '{project_code}' does not exist"
            ))),
        }
    }

    /// Create a task under the next sequential task code and return that code.
    pub async fn create(&self, request: &TaskCreateRequest) -> Outcome<String> {
        validate_request(request)?;
        let status = requested_status(request)?;

        let last_code = self
            .store
            .last_task_code()
            .await
            .map_err(|e| store_failure("creating task", e))?;
        let task_code = self.codes.next_code(last_code.as_deref())?;

        let Some(new_task) = request.to_new_task(task_code.clone(), status, &self.actor) else {
            return Err(missing_fields());
        };
        self.ensure_project_exists(&new_task.project_code, "creating task")
            .await?;

        match self.store.insert_task(&new_task).await {
            Ok(0) => Err(CoreError::internal("fail to create task!")),
            Ok(_) => {
                tracing::info!(code = %task_code, project = %new_task.project_code, "Task created");
                Ok(Success::with_message(task_code, "task created success"))
            }
            Err(StoreError::UniqueViolation { constraint }) => {
                tracing::warn!(code = %task_code, %constraint, "Generated task code already taken");
                Err(CoreError::duplicate_record(format!(
                    "A task with code '{task_code}' already exists!"
                )))
            }
            Err(e) => Err(store_failure("creating task", e)),
        }
    }

    /// All live tasks, most recently created first.
    pub async fn get_all(&self) -> Outcome<Vec<TaskResponse>> {
        let tasks = self
            .store
            .list_tasks()
            .await
            .map_err(|e| store_failure("retrieving tasks", e))?;

        if tasks.is_empty() {
            return Err(CoreError::not_found("no tasks found!"));
        }

        Ok(Success::new(tasks.into_iter().map(TaskResponse::from).collect()))
    }

    /// Live tasks of one project.
    pub async fn get_by_project(&self, project_code: &str) -> Outcome<Vec<TaskResponse>> {
        let tasks = self
            .store
            .list_tasks_by_project(project_code)
            .await
            .map_err(|e| store_failure("retrieving tasks", e))?;

        if tasks.is_empty() {
            return Err(CoreError::not_found(format!(
                "no tasks found for project '{project_code}'!"
            )));
        }

        Ok(Success::new(tasks.into_iter().map(TaskResponse::from).collect()))
    }

    pub async fn get_by_code(&self, code: &str) -> Outcome<TaskResponse> {
        let task = self
            .store
            .find_task_by_code(code)
            .await
            .map_err(|e| store_failure("retrieving task", e))?
            .ok_or_else(|| CoreError::not_found("no task found!"))?;

        Ok(Success::new(TaskResponse::from(task)))
    }

    /// Overwrite every mutable field of a live task.
    pub async fn update(&self, code: &str, request: &TaskCreateRequest) -> Outcome<()> {
        validate_request(request)?;
        let status = requested_status(request)?;
        let (Some(employee_code), Some(project_code), Some(task_name)) = (
            request.employee_code.as_deref(),
            request.project_code.as_deref(),
            request.task_name.as_deref(),
        ) else {
            return Err(missing_fields());
        };

        let existing = self
            .store
            .find_task_by_code(code)
            .await
            .map_err(|e| store_failure("updating task", e))?
            .ok_or_else(|| CoreError::not_found("no task found to update!"))?;

        if existing.project_code != project_code {
            self.ensure_project_exists(project_code, "updating task").await?;
        }

        let merged = Task {
            employee_code: employee_code.to_string(),
            project_code: project_code.to_string(),
            task_name: task_name.to_string(),
            task_description: request.task_description.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
            status_id: status.id(),
            working_hour: request.working_hour,
            modified_at: Some(Utc::now()),
            modified_by: Some(self.actor.clone()),
            ..existing
        };

        match self.store.update_task(&merged).await {
            Ok(0) => Err(CoreError::internal("fail to update task!")),
            Ok(_) => {
                tracing::info!(code, "Task updated");
                Ok(Success::with_message((), "task updated success"))
            }
            Err(e) => Err(store_failure("updating task", e)),
        }
    }

    /// Flag a live task as deleted. The row itself is kept.
    pub async fn delete(&self, code: &str) -> Outcome<()> {
        let task = self
            .store
            .find_task_by_code(code)
            .await
            .map_err(|e| store_failure("deleting task", e))?
            .ok_or_else(|| CoreError::not_found("no task found to delete!"))?;

        match self
            .store
            .soft_delete_task(task.id, Utc::now(), &self.actor)
            .await
        {
            Ok(0) => Err(CoreError::internal("fail to delete task!")),
            Ok(_) => {
                tracing::info!(code, id = task.id, "Task soft-deleted");
                Ok(Success::with_message((), "task deleted success."))
            }
            Err(e) => Err(store_failure("deleting task", e)),
        }
    }
}
