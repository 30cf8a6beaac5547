//! Handlers for the `/company-rules` resource.

use axum::extract::{Path, State};
use axum::Json;
use hr_core::types::DbId;
use hr_db::models::company_rule::CompanyRule;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/company-rules
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<CompanyRule>>>> {
    let rules = state.company_rules().get_all().await?;
    Ok(Json(rules.into()))
}

/// PUT /api/v1/company-rules/{id}
///
/// The body carries the full rule; its `id` must match the path.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(rule): Json<CompanyRule>,
) -> AppResult<Json<DataResponse<CompanyRule>>> {
    if rule.id != id {
        return Err(AppError::BadRequest(format!(
            "body id {} does not match path id {id}",
            rule.id
        )));
    }

    let updated = state.company_rules().update(rule).await?;
    Ok(Json(updated.into()))
}
