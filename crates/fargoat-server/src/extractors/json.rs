//! JSON body extractor with payload validation

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use fargoat_core::Validate;
use serde::de::DeserializeOwned;

/// Like `Json<T>`, but malformed bodies and failed validation both answer
/// 400 with an `{"error"}` body before the handler runs.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|e| ApiError::from_store(e, "validate request"))?;
        Ok(ValidJson(value))
    }
}
