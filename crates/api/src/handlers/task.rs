//! Handlers for the `/tasks` resource and `/projects/{code}/tasks`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hr_db::models::task::{TaskCreateRequest, TaskResponse};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<TaskCreateRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<String>>)> {
    let created = state.tasks().create(&input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/v1/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<TaskResponse>>>> {
    let tasks = state.tasks().get_all().await?;
    Ok(Json(tasks.into()))
}

/// GET /api/v1/projects/{code}/tasks
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<DataResponse<Vec<TaskResponse>>>> {
    let tasks = state.tasks().get_by_project(&code).await?;
    Ok(Json(tasks.into()))
}

/// GET /api/v1/tasks/{code}
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<DataResponse<TaskResponse>>> {
    let task = state.tasks().get_by_code(&code).await?;
    Ok(Json(task.into()))
}

/// PUT /api/v1/tasks/{code}
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(input): Json<TaskCreateRequest>,
) -> AppResult<Json<DataResponse<()>>> {
    let updated = state.tasks().update(&code, &input).await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/v1/tasks/{code}
pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<DataResponse<()>>> {
    let deleted = state.tasks().delete(&code).await?;
    Ok(Json(deleted.into()))
}
