//! Route tree. Each resource module returns a `Router<AppState>` that is
//! nested under `/api/v1` by [`api_routes`].

pub mod company_rules;
pub mod health;
pub mod projects;
pub mod roles;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// All versioned API routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/company-rules", company_rules::router())
        .nest("/projects", projects::router())
        .nest("/roles", roles::router())
        .nest("/tasks", tasks::router())
}
