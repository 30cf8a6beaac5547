//! Route definitions for the `/projects` resource, including the
//! project-scoped task listing.

use axum::routing::get;
use axum::Router;

use crate::handlers::{project, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{code}         -> get_by_code
/// PUT    /{code}         -> update
/// DELETE /{code}         -> delete
/// GET    /{code}/tasks   -> task::list_by_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{code}",
            get(project::get_by_code)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{code}/tasks", get(task::list_by_project))
}
