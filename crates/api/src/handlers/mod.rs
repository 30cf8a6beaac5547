//! HTTP handlers. Each one builds the service for its table from
//! [`AppState`](crate::state::AppState), calls a single operation and wraps
//! the outcome in a [`DataResponse`](crate::response::DataResponse).

pub mod company_rule;
pub mod project;
pub mod role;
pub mod task;
