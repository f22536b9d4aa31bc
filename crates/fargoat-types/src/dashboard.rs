//! Mock dashboard types

use serde::{Deserialize, Serialize};

/// Number of points in each chart snapshot
pub const CHART_SERIES_LEN: usize = 5;

/// Number of rows in each table snapshot
pub const TABLE_ROWS: usize = 10;

/// One chart snapshot: a numeric series with matching labels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Unix seconds at generation time, 0 before the first tick
    pub timestamp: i64,
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

/// Row status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowStatus {
    Active,
    Pending,
    Inactive,
}

impl RowStatus {
    pub const ALL: [RowStatus; 3] = [RowStatus::Active, RowStatus::Pending, RowStatus::Inactive];
}

impl std::fmt::Display for RowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowStatus::Active => write!(f, "Active"),
            RowStatus::Pending => write!(f, "Pending"),
            RowStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

/// One row of the table snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: i32,
    pub name: String,
    pub value: f64,
    pub status: RowStatus,
}
