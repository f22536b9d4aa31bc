//! Project types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project owned by a founder profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub founder_id: String,
    pub title: String,
    /// Free-text status, e.g. "draft" or "live"
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn new(id: String, payload: ProjectPayload) -> Self {
        let now = Utc::now();
        Self {
            id,
            founder_id: payload.founder_id,
            title: payload.title,
            status: payload.status,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn apply(&mut self, payload: ProjectPayload) {
        self.founder_id = payload.founder_id;
        self.title = payload.title;
        self.status = payload.status;
        self.updated_at = Utc::now();
    }
}

/// Client-supplied project fields for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPayload {
    pub founder_id: String,
    pub title: String,
    pub status: String,
}
