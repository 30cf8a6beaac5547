//! Handlers for the `/roles` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hr_db::models::role::{RoleRequest, RoleResponse, RoleUpdateRequest};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/roles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<RoleRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<String>>)> {
    let created = state.roles().create(&input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/v1/roles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<RoleResponse>>>> {
    let roles = state.roles().get_all().await?;
    Ok(Json(roles.into()))
}

/// GET /api/v1/roles/{code}
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<DataResponse<RoleResponse>>> {
    let role = state.roles().get_by_code(&code).await?;
    Ok(Json(role.into()))
}

/// PUT /api/v1/roles/{code}
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(input): Json<RoleUpdateRequest>,
) -> AppResult<Json<DataResponse<()>>> {
    let updated = state.roles().update(&code, &input).await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/v1/roles/{code}
pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<DataResponse<()>>> {
    let deleted = state.roles().delete(&code).await?;
    Ok(Json(deleted.into()))
}
