//! FarGoat Server
//!
//! REST API for profiles and projects, a mock dashboard feed and a GraphQL
//! relay. Uses SQLite (embedded) and falls back to an in-memory store when the
//! database cannot be opened.

mod error;
mod extractors;
mod handlers;
mod middleware;
mod routes;
mod services;
mod settings;
mod storage;

use anyhow::{Context, Result};
use fargoat_core::Store;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use services::{dashboard, DashboardFeed, GraphQlClient};
use settings::ServerConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub dashboard: DashboardFeed,
    /// Present only when `GRAPHQL_ENDPOINT` is set
    pub graphql: Option<Arc<GraphQlClient>>,
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting FarGoat Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = ServerConfig::load().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, dashboard_interval={}s",
        config.bind_address, config.dashboard_interval_secs
    );

    let store = storage::connect(&config.database_url).await;
    info!("Serving data from the {} store", store.backend());

    let (updater, feed) = dashboard::channel(config.dashboard_interval());
    let updater_task = updater.spawn();

    let graphql = config.graphql_endpoint.as_ref().map(|endpoint| {
        let client = GraphQlClient::new(endpoint.clone(), config.anon_api_key.clone());
        info!("GraphQL relay forwarding to {}", client.endpoint());
        Arc::new(client)
    });

    let state = AppState {
        store,
        dashboard: feed,
        graphql,
    };
    let app = routes::build_router(state, config.cors_origin.as_deref())?;

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    updater_task.abort();
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
