//! Router assembly

use crate::handlers::{self, dashboard, graphql, ledger, profiles, projects};
use crate::middleware::require_store;
use crate::AppState;
use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState, cors_origin: Option<&str>) -> Result<Router> {
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/handler", get(handlers::greeting))
        .route("/api/chart", get(dashboard::chart))
        .route("/api/table", get(dashboard::table))
        .route("/api/graphql", post(graphql::relay))
        .merge(data_routes(state.clone()))
        .layer(cors_layer(cors_origin)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Store-backed routes, gated on store availability
fn data_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/profiles", get(profiles::list).post(profiles::create))
        .route(
            "/profiles/:id",
            get(profiles::get)
                .put(profiles::update)
                .delete(profiles::delete),
        )
        .route("/projects", get(projects::list).post(projects::create))
        .route(
            "/projects/:id",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route("/create_founder", post(ledger::create_founder))
        .route("/get_founder/:founder_name", get(ledger::get_founder))
        .route("/allocate_points", post(ledger::allocate_points))
        .route("/register_contract", post(ledger::register_contract))
        .route("/get_contract/:contract_address", get(ledger::get_contract))
        .route("/distribute_points", post(ledger::distribute_points))
        .route("/convert_points", post(ledger::convert_points))
        .route("/claim_rewards", post(ledger::claim_rewards))
        .route_layer(middleware::from_fn_with_state(state, require_store))
}

fn cors_layer(origin: Option<&str>) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    match origin {
        Some(origin) => {
            let origin: HeaderValue = origin
                .parse()
                .with_context(|| format!("Invalid CORS origin: {}", origin))?;
            Ok(layer.allow_origin(origin).allow_credentials(true))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}
