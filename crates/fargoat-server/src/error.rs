//! HTTP error responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fargoat_core::FarGoatError;
use serde_json::json;

/// Error rendered as `{"error": "<message>"}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unavailable() -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "Data service is unavailable",
        )
    }

    /// Map a store or service failure while trying to `action`.
    ///
    /// Client-caused failures keep their message. Everything else is logged
    /// and answered with an opaque "Failed to <action>", as a 500 for store
    /// failures and a 502 for upstream ones.
    pub fn from_store(err: FarGoatError, action: &str) -> Self {
        match err {
            FarGoatError::Validation(_) | FarGoatError::Rejected(_) => {
                Self::new(StatusCode::BAD_REQUEST, err.to_string())
            }
            FarGoatError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            FarGoatError::Conflict(_) => Self::new(StatusCode::CONFLICT, err.to_string()),
            FarGoatError::Upstream(_) => {
                tracing::error!("Failed to {}: {}", action, err);
                Self::new(StatusCode::BAD_GATEWAY, format!("Failed to {}", action))
            }
            // 503 is answered by the availability gate; past it, a store failure is a 500
            FarGoatError::Unavailable(_) | FarGoatError::Database(_) => {
                tracing::error!("Failed to {}: {}", action, err);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to {}", action),
                )
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (FarGoatError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (FarGoatError::NotFound("Profile p".into()), StatusCode::NOT_FOUND),
            (FarGoatError::Conflict("email".into()), StatusCode::CONFLICT),
            (FarGoatError::Rejected("No rewards to claim".into()), StatusCode::BAD_REQUEST),
            (FarGoatError::Unavailable("pool timed out".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (FarGoatError::Upstream("boom".into()), StatusCode::BAD_GATEWAY),
            (FarGoatError::Database("disk".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from_store(err, "do it").status, status);
        }
    }

    #[test]
    fn test_internal_errors_are_opaque() {
        let err = ApiError::from_store(
            FarGoatError::Database("no such table: profiles".into()),
            "create profile",
        );
        assert_eq!(err.message, "Failed to create profile");

        let err = ApiError::from_store(
            FarGoatError::Unavailable("pool timed out".into()),
            "retrieve profiles",
        );
        assert_eq!(err.message, "Failed to retrieve profiles");
    }
}
