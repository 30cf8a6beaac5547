//! Data-access services for the HR tables.
//!
//! Every service method performs one logical unit of work against a store
//! and returns an [`hr_core::outcome::Outcome`]. Store failures never cross
//! a method boundary: they are folded into a categorized
//! [`hr_core::error::CoreError`].
//!
//! Services are generic over the [`store`] traits so the same code runs on
//! Postgres ([`store::PgStore`]) and in memory ([`store::MemoryStore`]).

pub mod services;
pub mod store;

pub use services::{CompanyRuleService, ProjectService, RoleService, TaskService};
pub use store::{
    CompanyRuleStore, HrStore, MemoryStore, PgStore, ProjectStore, RoleStore, StoreError,
    StoreResult, TaskStore,
};
