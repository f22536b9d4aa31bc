//! Availability gate for store-backed routes

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

/// Ping the store before the handler runs; answer 503 if it is unreachable.
pub async fn require_store(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if let Err(e) = state.store.ping().await {
        warn!(
            "Store unavailable, rejecting {} {}: {}",
            request.method(),
            request.uri().path(),
            e
        );
        return ApiError::unavailable().into_response();
    }
    next.run(request).await
}
