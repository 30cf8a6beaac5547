//! Store seam between the services and persistence.
//!
//! One trait per table plus [`HrStore`], which bundles them for callers that
//! hold a single `Arc<dyn HrStore>`. Writes report affected rows; uniqueness
//! is enforced by the store and surfaces as [`StoreError::UniqueViolation`].

use async_trait::async_trait;
use hr_core::types::{DbId, Timestamp};
use hr_db::models::company_rule::{CompanyRule, CompanyRuleRow};
use hr_db::models::project::{NewProject, Project};
use hr_db::models::role::{NewRole, Role};
use hr_db::models::task::{NewTask, Task};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// PostgreSQL SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

/// Failure reported by a store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint rejected the write.
    #[error("duplicate value violates unique constraint: {constraint}")]
    UniqueViolation { constraint: String },

    /// Any other failure, carrying the driver's message.
    #[error("{0}")]
    Database(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return Self::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                };
            }
        }
        Self::Database(err.to_string())
    }
}

#[async_trait]
pub trait CompanyRuleStore: Send + Sync {
    /// Every rule, flags not normalized.
    async fn list_company_rules(&self) -> StoreResult<Vec<CompanyRuleRow>>;

    async fn find_company_rule(&self, id: DbId) -> StoreResult<Option<CompanyRuleRow>>;

    /// Overwrite the rule identified by `rule.id`.
    async fn update_company_rule(&self, rule: &CompanyRule) -> StoreResult<u64>;
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn insert_project(&self, project: &NewProject) -> StoreResult<u64>;

    /// Code of the most recently created project, soft-deleted rows included.
    async fn last_project_code(&self) -> StoreResult<Option<String>>;

    /// Live projects only.
    async fn list_projects(&self) -> StoreResult<Vec<Project>>;

    /// Live project with the given code.
    async fn find_project_by_code(&self, code: &str) -> StoreResult<Option<Project>>;

    async fn find_project_by_id_include_deleted(&self, id: DbId) -> StoreResult<Option<Project>>;

    /// Overwrite the live project identified by `project.id`.
    async fn update_project(&self, project: &Project) -> StoreResult<u64>;

    async fn soft_delete_project(
        &self,
        id: DbId,
        modified_at: Timestamp,
        modified_by: &str,
    ) -> StoreResult<u64>;
}

#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn insert_role(&self, role: &NewRole) -> StoreResult<u64>;

    async fn list_roles(&self) -> StoreResult<Vec<Role>>;

    async fn find_role_by_code(&self, code: &str) -> StoreResult<Option<Role>>;

    async fn update_role(&self, role: &Role) -> StoreResult<u64>;

    async fn soft_delete_role(
        &self,
        id: DbId,
        modified_at: Timestamp,
        modified_by: &str,
    ) -> StoreResult<u64>;
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn insert_task(&self, task: &NewTask) -> StoreResult<u64>;

    /// Code of the most recently created task, soft-deleted rows included.
    async fn last_task_code(&self) -> StoreResult<Option<String>>;

    async fn list_tasks(&self) -> StoreResult<Vec<Task>>;

    async fn list_tasks_by_project(&self, project_code: &str) -> StoreResult<Vec<Task>>;

    async fn find_task_by_code(&self, code: &str) -> StoreResult<Option<Task>>;

    async fn update_task(&self, task: &Task) -> StoreResult<u64>;

    async fn soft_delete_task(
        &self,
        id: DbId,
        modified_at: Timestamp,
        modified_by: &str,
    ) -> StoreResult<u64>;
}

/// Every table behind one object.
#[async_trait]
pub trait HrStore: CompanyRuleStore + ProjectStore + RoleStore + TaskStore {
    /// Verify the backing store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
