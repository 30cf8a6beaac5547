//! Postgres-backed store delegating to the `hr-db` repositories.

use async_trait::async_trait;
use hr_core::types::{DbId, Timestamp};
use hr_db::models::company_rule::{CompanyRule, CompanyRuleRow};
use hr_db::models::project::{NewProject, Project};
use hr_db::models::role::{NewRole, Role};
use hr_db::models::task::{NewTask, Task};
use hr_db::repositories::{CompanyRuleRepo, ProjectRepo, RoleRepo, TaskRepo};
use hr_db::DbPool;

use super::{CompanyRuleStore, HrStore, ProjectStore, RoleStore, StoreResult, TaskStore};

/// Store over a shared connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl CompanyRuleStore for PgStore {
    async fn list_company_rules(&self) -> StoreResult<Vec<CompanyRuleRow>> {
        Ok(CompanyRuleRepo::list(&self.pool).await?)
    }

    async fn find_company_rule(&self, id: DbId) -> StoreResult<Option<CompanyRuleRow>> {
        Ok(CompanyRuleRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update_company_rule(&self, rule: &CompanyRule) -> StoreResult<u64> {
        Ok(CompanyRuleRepo::update(&self.pool, rule).await?)
    }
}

#[async_trait]
impl ProjectStore for PgStore {
    async fn insert_project(&self, project: &NewProject) -> StoreResult<u64> {
        Ok(ProjectRepo::create(&self.pool, project).await?)
    }

    async fn last_project_code(&self) -> StoreResult<Option<String>> {
        Ok(ProjectRepo::last_code(&self.pool).await?)
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn find_project_by_code(&self, code: &str) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::find_by_code(&self.pool, code).await?)
    }

    async fn find_project_by_id_include_deleted(&self, id: DbId) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::find_by_id_include_deleted(&self.pool, id).await?)
    }

    async fn update_project(&self, project: &Project) -> StoreResult<u64> {
        Ok(ProjectRepo::update(&self.pool, project).await?)
    }

    async fn soft_delete_project(
        &self,
        id: DbId,
        modified_at: Timestamp,
        modified_by: &str,
    ) -> StoreResult<u64> {
        Ok(ProjectRepo::soft_delete(&self.pool, id, modified_at, modified_by).await?)
    }
}

#[async_trait]
impl RoleStore for PgStore {
    async fn insert_role(&self, role: &NewRole) -> StoreResult<u64> {
        Ok(RoleRepo::create(&self.pool, role).await?)
    }

    async fn list_roles(&self) -> StoreResult<Vec<Role>> {
        Ok(RoleRepo::list(&self.pool).await?)
    }

    async fn find_role_by_code(&self, code: &str) -> StoreResult<Option<Role>> {
        Ok(RoleRepo::find_by_code(&self.pool, code).await?)
    }

    async fn update_role(&self, role: &Role) -> StoreResult<u64> {
        Ok(RoleRepo::update(&self.pool, role).await?)
    }

    async fn soft_delete_role(
        &self,
        id: DbId,
        modified_at: Timestamp,
        modified_by: &str,
    ) -> StoreResult<u64> {
        Ok(RoleRepo::soft_delete(&self.pool, id, modified_at, modified_by).await?)
    }
}

#[async_trait]
impl TaskStore for PgStore {
    async fn insert_task(&self, task: &NewTask) -> StoreResult<u64> {
        Ok(TaskRepo::create(&self.pool, task).await?)
    }

    async fn last_task_code(&self) -> StoreResult<Option<String>> {
        Ok(TaskRepo::last_code(&self.pool).await?)
    }

    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        Ok(TaskRepo::list(&self.pool).await?)
    }

    async fn list_tasks_by_project(&self, project_code: &str) -> StoreResult<Vec<Task>> {
        Ok(TaskRepo::list_by_project(&self.pool, project_code).await?)
    }

    async fn find_task_by_code(&self, code: &str) -> StoreResult<Option<Task>> {
        Ok(TaskRepo::find_by_code(&self.pool, code).await?)
    }

    async fn update_task(&self, task: &Task) -> StoreResult<u64> {
        Ok(TaskRepo::update(&self.pool, task).await?)
    }

    async fn soft_delete_task(
        &self,
        id: DbId,
        modified_at: Timestamp,
        modified_by: &str,
    ) -> StoreResult<u64> {
        Ok(TaskRepo::soft_delete(&self.pool, id, modified_at, modified_by).await?)
    }
}

#[async_trait]
impl HrStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(hr_db::health_check(&self.pool).await?)
    }
}
