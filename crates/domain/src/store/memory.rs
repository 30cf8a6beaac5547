//! In-memory store.
//!
//! Mirrors the Postgres schema closely enough for service and HTTP tests:
//! the same unique constraints, the `tasks.project_code` foreign key,
//! soft-delete filtering and "most recently created" ordering. A failure can
//! be injected, and writes can be told to touch no rows, so every error path
//! is reachable without a database.

use async_trait::async_trait;
use chrono::Utc;
use hr_core::types::{DbId, Timestamp};
use hr_db::models::company_rule::{CompanyRule, CompanyRuleRow};
use hr_db::models::project::{NewProject, Project};
use hr_db::models::role::{NewRole, Role};
use hr_db::models::task::{NewTask, Task};
use tokio::sync::RwLock;

use super::{
    CompanyRuleStore, HrStore, ProjectStore, RoleStore, StoreError, StoreResult, TaskStore,
};

#[derive(Debug, Default)]
struct Tables {
    next_id: DbId,
    company_rules: Vec<CompanyRuleRow>,
    projects: Vec<Project>,
    roles: Vec<Role>,
    tasks: Vec<Task>,
}

impl Tables {
    fn allocate_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn check_project_reference(&self, project_code: &str) -> StoreResult<()> {
        if self.projects.iter().any(|p| p.project_code == project_code) {
            Ok(())
        } else {
            Err(StoreError::Database(format!(
                "insert or update on table \"tasks\" violates foreign key constraint: \
                 project_code '{project_code}' is not present in \"projects\""
            )))
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    failure: RwLock<Option<String>>,
    no_rows: RwLock<bool>,
}

fn unique_violation(constraint: &str) -> StoreError {
    StoreError::UniqueViolation {
        constraint: constraint.to_string(),
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with `message`.
    pub async fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write().await = Some(message.into());
    }

    pub async fn clear_failure(&self) {
        *self.failure.write().await = None;
    }

    /// Make every subsequent write report zero affected rows without
    /// touching the tables.
    pub async fn affect_no_rows(&self) {
        *self.no_rows.write().await = true;
    }

    pub async fn affect_rows(&self) {
        *self.no_rows.write().await = false;
    }

    /// Insert a company rule row as-is, assigning a fresh id. Returns the id.
    pub async fn seed_company_rule(&self, mut row: CompanyRuleRow) -> DbId {
        let mut tables = self.tables.write().await;
        row.id = tables.allocate_id();
        let id = row.id;
        tables.company_rules.push(row);
        id
    }

    /// Insert a project row as-is (any code, any flag), assigning a fresh id.
    pub async fn seed_project(&self, mut project: Project) -> DbId {
        let mut tables = self.tables.write().await;
        project.id = tables.allocate_id();
        let id = project.id;
        tables.projects.push(project);
        id
    }

    async fn check(&self) -> StoreResult<()> {
        match self.failure.read().await.as_ref() {
            Some(message) => Err(StoreError::Database(message.clone())),
            None => Ok(()),
        }
    }

    async fn skips_writes(&self) -> bool {
        *self.no_rows.read().await
    }
}

#[async_trait]
impl CompanyRuleStore for MemoryStore {
    async fn list_company_rules(&self) -> StoreResult<Vec<CompanyRuleRow>> {
        self.check().await?;
        Ok(self.tables.read().await.company_rules.clone())
    }

    async fn find_company_rule(&self, id: DbId) -> StoreResult<Option<CompanyRuleRow>> {
        self.check().await?;
        let tables = self.tables.read().await;
        Ok(tables.company_rules.iter().find(|r| r.id == id).cloned())
    }

    async fn update_company_rule(&self, rule: &CompanyRule) -> StoreResult<u64> {
        self.check().await?;
        if self.skips_writes().await {
            return Ok(0);
        }
        let mut tables = self.tables.write().await;
        let Some(row) = tables.company_rules.iter_mut().find(|r| r.id == rule.id) else {
            return Ok(0);
        };
        row.company_rule_code = rule.company_rule_code.clone();
        row.description = rule.description.clone();
        row.value = rule.value.clone();
        row.is_active = Some(rule.is_active);
        row.delete_flag = Some(rule.delete_flag);
        row.modified_at = rule.modified_at;
        row.modified_by = rule.modified_by.clone();
        Ok(1)
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn insert_project(&self, project: &NewProject) -> StoreResult<u64> {
        self.check().await?;
        if self.skips_writes().await {
            return Ok(0);
        }
        let mut tables = self.tables.write().await;
        if tables
            .projects
            .iter()
            .any(|p| p.project_code == project.project_code)
        {
            return Err(unique_violation("uq_projects_project_code"));
        }
        let id = tables.allocate_id();
        tables.projects.push(Project {
            id,
            project_code: project.project_code.clone(),
            project_name: project.project_name.clone(),
            project_description: project.project_description.clone(),
            start_date: project.start_date,
            end_date: project.end_date,
            status_id: project.status_id,
            delete_flag: false,
            created_at: Utc::now(),
            created_by: Some(project.created_by.clone()),
            modified_at: None,
            modified_by: None,
        });
        Ok(1)
    }

    async fn last_project_code(&self) -> StoreResult<Option<String>> {
        self.check().await?;
        let tables = self.tables.read().await;
        Ok(tables
            .projects
            .iter()
            .max_by_key(|p| (p.created_at, p.id))
            .map(|p| p.project_code.clone()))
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        self.check().await?;
        let tables = self.tables.read().await;
        let mut projects: Vec<Project> = tables
            .projects
            .iter()
            .filter(|p| !p.delete_flag)
            .cloned()
            .collect();
        projects.sort_by_key(|p| std::cmp::Reverse((p.created_at, p.id)));
        Ok(projects)
    }

    async fn find_project_by_code(&self, code: &str) -> StoreResult<Option<Project>> {
        self.check().await?;
        let tables = self.tables.read().await;
        Ok(tables
            .projects
            .iter()
            .find(|p| p.project_code == code && !p.delete_flag)
            .cloned())
    }

    async fn find_project_by_id_include_deleted(&self, id: DbId) -> StoreResult<Option<Project>> {
        self.check().await?;
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn update_project(&self, project: &Project) -> StoreResult<u64> {
        self.check().await?;
        if self.skips_writes().await {
            return Ok(0);
        }
        let mut tables = self.tables.write().await;
        let Some(row) = tables
            .projects
            .iter_mut()
            .find(|p| p.id == project.id && !p.delete_flag)
        else {
            return Ok(0);
        };
        row.project_name = project.project_name.clone();
        row.project_description = project.project_description.clone();
        row.start_date = project.start_date;
        row.end_date = project.end_date;
        row.status_id = project.status_id;
        row.modified_at = project.modified_at;
        row.modified_by = project.modified_by.clone();
        Ok(1)
    }

    async fn soft_delete_project(
        &self,
        id: DbId,
        modified_at: Timestamp,
        modified_by: &str,
    ) -> StoreResult<u64> {
        self.check().await?;
        if self.skips_writes().await {
            return Ok(0);
        }
        let mut tables = self.tables.write().await;
        let Some(row) = tables
            .projects
            .iter_mut()
            .find(|p| p.id == id && !p.delete_flag)
        else {
            return Ok(0);
        };
        row.delete_flag = true;
        row.modified_at = Some(modified_at);
        row.modified_by = Some(modified_by.to_string());
        Ok(1)
    }
}

#[async_trait]
impl RoleStore for MemoryStore {
    async fn insert_role(&self, role: &NewRole) -> StoreResult<u64> {
        self.check().await?;
        if self.skips_writes().await {
            return Ok(0);
        }
        let mut tables = self.tables.write().await;
        if tables.roles.iter().any(|r| r.role_code == role.role_code) {
            return Err(unique_violation("uq_roles_role_code"));
        }
        if tables.roles.iter().any(|r| r.unique_name == role.unique_name) {
            return Err(unique_violation("uq_roles_unique_name"));
        }
        let id = tables.allocate_id();
        tables.roles.push(Role {
            id,
            role_code: role.role_code.clone(),
            role_name: role.role_name.clone(),
            unique_name: role.unique_name.clone(),
            delete_flag: false,
            created_at: Utc::now(),
            created_by: Some(role.created_by.clone()),
            modified_at: None,
            modified_by: None,
        });
        Ok(1)
    }

    async fn list_roles(&self) -> StoreResult<Vec<Role>> {
        self.check().await?;
        let tables = self.tables.read().await;
        Ok(tables
            .roles
            .iter()
            .filter(|r| !r.delete_flag)
            .cloned()
            .collect())
    }

    async fn find_role_by_code(&self, code: &str) -> StoreResult<Option<Role>> {
        self.check().await?;
        let tables = self.tables.read().await;
        Ok(tables
            .roles
            .iter()
            .find(|r| r.role_code == code && !r.delete_flag)
            .cloned())
    }

    async fn update_role(&self, role: &Role) -> StoreResult<u64> {
        self.check().await?;
        if self.skips_writes().await {
            return Ok(0);
        }
        let mut tables = self.tables.write().await;
        if tables
            .roles
            .iter()
            .any(|r| r.id != role.id && r.unique_name == role.unique_name)
        {
            return Err(unique_violation("uq_roles_unique_name"));
        }
        let Some(row) = tables
            .roles
            .iter_mut()
            .find(|r| r.id == role.id && !r.delete_flag)
        else {
            return Ok(0);
        };
        row.role_name = role.role_name.clone();
        row.unique_name = role.unique_name.clone();
        row.modified_at = role.modified_at;
        row.modified_by = role.modified_by.clone();
        Ok(1)
    }

    async fn soft_delete_role(
        &self,
        id: DbId,
        modified_at: Timestamp,
        modified_by: &str,
    ) -> StoreResult<u64> {
        self.check().await?;
        if self.skips_writes().await {
            return Ok(0);
        }
        let mut tables = self.tables.write().await;
        let Some(row) = tables
            .roles
            .iter_mut()
            .find(|r| r.id == id && !r.delete_flag)
        else {
            return Ok(0);
        };
        row.delete_flag = true;
        row.modified_at = Some(modified_at);
        row.modified_by = Some(modified_by.to_string());
        Ok(1)
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn insert_task(&self, task: &NewTask) -> StoreResult<u64> {
        self.check().await?;
        if self.skips_writes().await {
            return Ok(0);
        }
        let mut tables = self.tables.write().await;
        if tables.tasks.iter().any(|t| t.task_code == task.task_code) {
            return Err(unique_violation("uq_tasks_task_code"));
        }
        tables.check_project_reference(&task.project_code)?;
        let id = tables.allocate_id();
        tables.tasks.push(Task {
            id,
            task_code: task.task_code.clone(),
            employee_code: task.employee_code.clone(),
            project_code: task.project_code.clone(),
            task_name: task.task_name.clone(),
            task_description: task.task_description.clone(),
            start_date: task.start_date,
            end_date: task.end_date,
            status_id: task.status_id,
            working_hour: task.working_hour,
            delete_flag: false,
            created_at: Utc::now(),
            created_by: Some(task.created_by.clone()),
            modified_at: None,
            modified_by: None,
        });
        Ok(1)
    }

    async fn last_task_code(&self) -> StoreResult<Option<String>> {
        self.check().await?;
        let tables = self.tables.read().await;
        Ok(tables
            .tasks
            .iter()
            .max_by_key(|t| (t.created_at, t.id))
            .map(|t| t.task_code.clone()))
    }

    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        self.check().await?;
        let tables = self.tables.read().await;
        let mut tasks: Vec<Task> = tables
            .tasks
            .iter()
            .filter(|t| !t.delete_flag)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| std::cmp::Reverse((t.created_at, t.id)));
        Ok(tasks)
    }

    async fn list_tasks_by_project(&self, project_code: &str) -> StoreResult<Vec<Task>> {
        let mut tasks = self.list_tasks().await?;
        tasks.retain(|t| t.project_code == project_code);
        Ok(tasks)
    }

    async fn find_task_by_code(&self, code: &str) -> StoreResult<Option<Task>> {
        self.check().await?;
        let tables = self.tables.read().await;
        Ok(tables
            .tasks
            .iter()
            .find(|t| t.task_code == code && !t.delete_flag)
            .cloned())
    }

    async fn update_task(&self, task: &Task) -> StoreResult<u64> {
        self.check().await?;
        if self.skips_writes().await {
            return Ok(0);
        }
        let mut tables = self.tables.write().await;
        tables.check_project_reference(&task.project_code)?;
        let Some(row) = tables
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id && !t.delete_flag)
        else {
            return Ok(0);
        };
        row.employee_code = task.employee_code.clone();
        row.project_code = task.project_code.clone();
        row.task_name = task.task_name.clone();
        row.task_description = task.task_description.clone();
        row.start_date = task.start_date;
        row.end_date = task.end_date;
        row.status_id = task.status_id;
        row.working_hour = task.working_hour;
        row.modified_at = task.modified_at;
        row.modified_by = task.modified_by.clone();
        Ok(1)
    }

    async fn soft_delete_task(
        &self,
        id: DbId,
        modified_at: Timestamp,
        modified_by: &str,
    ) -> StoreResult<u64> {
        self.check().await?;
        if self.skips_writes().await {
            return Ok(0);
        }
        let mut tables = self.tables.write().await;
        let Some(row) = tables
            .tasks
            .iter_mut()
            .find(|t| t.id == id && !t.delete_flag)
        else {
            return Ok(0);
        };
        row.delete_flag = true;
        row.modified_at = Some(modified_at);
        row.modified_by = Some(modified_by.to_string());
        Ok(1)
    }
}

#[async_trait]
impl HrStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        self.check().await
    }
}
