//! Server configuration from the environment

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:6666";
const DEFAULT_DATABASE_URL: &str = "sqlite://data/fargoat.db";
const DEFAULT_DASHBOARD_INTERVAL_SECS: i64 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Empty selects the in-memory store
    pub database_url: String,
    pub graphql_endpoint: Option<String>,
    /// Bearer token sent to the GraphQL endpoint
    pub anon_api_key: Option<String>,
    pub cors_origin: Option<String>,
    pub dashboard_interval_secs: u64,
}

impl ServerConfig {
    /// Load from process environment variables (`BIND_ADDRESS`,
    /// `DATABASE_URL`, `GRAPHQL_ENDPOINT`, `ANON_API_KEY`, `CORS_ORIGIN`,
    /// `DASHBOARD_INTERVAL_SECS`).
    pub fn load() -> Result<Self> {
        Self::from_env(config::Environment::default())
    }

    fn from_env(env: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("dashboard_interval_secs", DEFAULT_DASHBOARD_INTERVAL_SECS)?
            .add_source(env)
            .build()
            .context("Failed to read configuration")?;

        let mut config: ServerConfig = settings
            .try_deserialize()
            .context("Invalid configuration")?;

        config.graphql_endpoint = non_empty(config.graphql_endpoint);
        config.anon_api_key = non_empty(config.anon_api_key);
        config.cors_origin = non_empty(config.cors_origin);

        if config.dashboard_interval_secs == 0 {
            anyhow::bail!("DASHBOARD_INTERVAL_SECS must be greater than zero");
        }
        config
            .bind_address
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid BIND_ADDRESS: {}", config.bind_address))?;

        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .context("Failed to parse bind address")
    }

    pub fn dashboard_interval(&self) -> Duration {
        Duration::from_secs(self.dashboard_interval_secs)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
