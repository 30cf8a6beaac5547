use axum::routing::get;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{code}    -> get_by_code
/// PUT    /{code}    -> update
/// DELETE /{code}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route(
            "/{code}",
            get(task::get_by_code).put(task::update).delete(task::delete),
        )
}
