//! HTTP handlers

pub mod dashboard;
pub mod graphql;
pub mod ledger;
pub mod profiles;
pub mod projects;

use crate::AppState;
use axum::{extract::State, Json};
use fargoat_core::Greeting;
use serde_json::{json, Value};

/// Liveness plus the backend currently serving data
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "store": state.store.backend().to_string(),
    }))
}

pub async fn greeting() -> Json<Greeting> {
    Json(Greeting::default())
}
