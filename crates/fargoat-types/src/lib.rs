//! FarGoat Types - Pure type definitions
//!
//! Record shapes for the profile/project API, the founder points ledger and
//! the mock dashboard feed.
//! No async runtime dependencies.

pub mod dashboard;
pub mod ledger;
pub mod profile;
pub mod project;

pub use dashboard::*;
pub use ledger::*;
pub use profile::*;
pub use project::*;

use serde::{Deserialize, Serialize};

/// Static payload served by the greeting endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            message: "你好，世界".to_string(),
        }
    }
}

/// Confirmation body returned by delete endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
