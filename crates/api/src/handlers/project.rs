//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hr_db::models::project::{ProjectRequest, ProjectResponse};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects
///
/// Responds with the generated project code.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProjectRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<String>>)> {
    let created = state.projects().create(&input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProjectResponse>>>> {
    let projects = state.projects().get_all().await?;
    Ok(Json(projects.into()))
}

/// GET /api/v1/projects/{code}
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<DataResponse<ProjectResponse>>> {
    let project = state.projects().get_by_code(&code).await?;
    Ok(Json(project.into()))
}

/// PUT /api/v1/projects/{code}
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(input): Json<ProjectRequest>,
) -> AppResult<Json<DataResponse<()>>> {
    let updated = state.projects().update(&code, &input).await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/v1/projects/{code}
pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<DataResponse<()>>> {
    let deleted = state.projects().delete(&code).await?;
    Ok(Json(deleted.into()))
}
