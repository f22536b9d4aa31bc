//! Mock dashboard handlers

use crate::AppState;
use axum::{extract::State, Json};
use fargoat_core::{ChartData, TableRow};
use tracing::debug;

pub async fn chart(State(state): State<AppState>) -> Json<ChartData> {
    let chart = state.dashboard.chart();
    debug!("GET /api/chart - Response: {:?}", chart);
    Json(ChartData::clone(&chart))
}

pub async fn table(State(state): State<AppState>) -> Json<Vec<TableRow>> {
    let table = state.dashboard.table();
    debug!("GET /api/table - Response: {:?}", table);
    Json(table.to_vec())
}
