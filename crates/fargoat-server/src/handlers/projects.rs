//! Project handlers

use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use fargoat_core::{MessageResponse, Project, ProjectPayload};
use tracing::info;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state
        .store
        .list_projects()
        .await
        .map_err(|e| ApiError::from_store(e, "retrieve projects"))?;
    Ok(Json(projects))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<ProjectPayload>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    info!("Creating project: {} for founder {}", payload.title, payload.founder_id);

    let project = state
        .store
        .create_project(payload)
        .await
        .map_err(|e| ApiError::from_store(e, "create project"))?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let project = state
        .store
        .get_project(&id)
        .await
        .map_err(|e| ApiError::from_store(e, "retrieve project"))?;
    Ok(Json(project))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<ProjectPayload>,
) -> Result<Json<Project>, ApiError> {
    let project = state
        .store
        .update_project(&id, payload)
        .await
        .map_err(|e| ApiError::from_store(e, "update project"))?;
    Ok(Json(project))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Deleting project: {}", id);

    state
        .store
        .delete_project(&id)
        .await
        .map_err(|e| ApiError::from_store(e, "delete project"))?;
    Ok(Json(MessageResponse::new("Project deleted")))
}
