//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Writes return the number of
//! affected rows so callers can tell a no-op from a success.

pub mod company_rule_repo;
pub mod project_repo;
pub mod role_repo;
pub mod task_repo;

pub use company_rule_repo::CompanyRuleRepo;
pub use project_repo::ProjectRepo;
pub use role_repo::RoleRepo;
pub use task_repo::TaskRepo;
