//! Profile types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile
///
/// `email`, `wallet_address` and `unique_name` are unique across all
/// profiles. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub email: String,
    pub wallet_address: String,
    pub unique_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker, never exposed over the wire
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Profile {
    pub fn new(id: String, payload: ProfilePayload) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id: payload.user_id,
            email: payload.email,
            wallet_address: payload.wallet_address,
            unique_name: payload.unique_name,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Replace every client-owned field, keeping `id` and `created_at`.
    pub fn apply(&mut self, payload: ProfilePayload) {
        self.user_id = payload.user_id;
        self.email = payload.email;
        self.wallet_address = payload.wallet_address;
        self.unique_name = payload.unique_name;
        self.updated_at = Utc::now();
    }
}

/// Client-supplied profile fields for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePayload {
    pub user_id: String,
    pub email: String,
    pub wallet_address: String,
    pub unique_name: String,
}
