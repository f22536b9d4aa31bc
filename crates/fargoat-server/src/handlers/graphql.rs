//! GraphQL relay handler

use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use fargoat_core::{FarGoatError, Validate};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct RelayRequest {
    query: String,
    #[serde(default)]
    variables: Map<String, Value>,
}

impl Validate for RelayRequest {
    fn validate(&self) -> fargoat_core::Result<()> {
        if self.query.trim().is_empty() {
            return Err(FarGoatError::Validation("query is required".to_string()));
        }
        Ok(())
    }
}

/// Forward a query to the configured upstream and return its `data`.
pub async fn relay(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<RelayRequest>,
) -> Result<Json<Value>, ApiError> {
    let client = state.graphql.as_ref().ok_or_else(|| {
        ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "GraphQL endpoint is not configured",
        )
    })?;

    let data: Value = client
        .execute(&req.query, &req.variables)
        .await
        .map_err(|e| ApiError::from_store(e, "run GraphQL query"))?;
    Ok(Json(data))
}
