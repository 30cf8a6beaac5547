use std::sync::Arc;

use hr_domain::{CompanyRuleService, HrStore, ProjectService, RoleService, TaskService};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; services are built per request on top of the shared store.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend (Postgres in production, in-memory in tests).
    pub store: Arc<dyn HrStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn company_rules(&self) -> CompanyRuleService<dyn HrStore> {
        CompanyRuleService::new(Arc::clone(&self.store))
    }

    pub fn projects(&self) -> ProjectService<dyn HrStore> {
        ProjectService::new(Arc::clone(&self.store), self.config.project_codes.clone())
            .with_actor(self.config.audit_actor.as_str())
    }

    pub fn roles(&self) -> RoleService<dyn HrStore> {
        RoleService::new(Arc::clone(&self.store)).with_actor(self.config.audit_actor.as_str())
    }

    pub fn tasks(&self) -> TaskService<dyn HrStore> {
        TaskService::new(Arc::clone(&self.store), self.config.task_codes.clone())
            .with_actor(self.config.audit_actor.as_str())
    }
}
