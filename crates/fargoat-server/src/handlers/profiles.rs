//! Profile handlers

use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use fargoat_core::{MessageResponse, Profile, ProfilePayload};
use tracing::info;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Profile>>, ApiError> {
    let profiles = state
        .store
        .list_profiles()
        .await
        .map_err(|e| ApiError::from_store(e, "retrieve profiles"))?;
    Ok(Json(profiles))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<ProfilePayload>,
) -> Result<(StatusCode, Json<Profile>), ApiError> {
    info!("Creating profile: {}", payload.unique_name);

    let profile = state
        .store
        .create_profile(payload)
        .await
        .map_err(|e| ApiError::from_store(e, "create profile"))?;

    info!("Profile created: {}", profile.id);
    Ok((StatusCode::CREATED, Json(profile)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let profile = state
        .store
        .get_profile(&id)
        .await
        .map_err(|e| ApiError::from_store(e, "retrieve profile"))?;
    Ok(Json(profile))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<ProfilePayload>,
) -> Result<Json<Profile>, ApiError> {
    info!("Updating profile: {}", id);

    let profile = state
        .store
        .update_profile(&id, payload)
        .await
        .map_err(|e| ApiError::from_store(e, "update profile"))?;
    Ok(Json(profile))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Deleting profile: {}", id);

    state
        .store
        .delete_profile(&id)
        .await
        .map_err(|e| ApiError::from_store(e, "delete profile"))?;
    Ok(Json(MessageResponse::new("Profile deleted")))
}
