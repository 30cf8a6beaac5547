use axum::routing::{get, put};
use axum::Router;

use crate::handlers::company_rule;
use crate::state::AppState;

/// Routes mounted at `/company-rules`.
///
/// ```text
/// GET    /        -> list
/// PUT    /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(company_rule::list))
        .route("/{id}", put(company_rule::update))
}
