use axum::routing::get;
use axum::Router;

use crate::handlers::role;
use crate::state::AppState;

/// Routes mounted at `/roles`.
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
        .route("/", get(role::list).post(role::create))
        .route(
            "/{code}",
            get(role::get_by_code).put(role::update).delete(role::delete),
        )
}
