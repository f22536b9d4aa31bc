//! Founder points ledger types
//!
//! Founders receive an allocation of points and distribute them to
//! registered contracts. A contract converts its points into rewards at
//! [`POINTS_PER_REWARD`], and a founder claims a contract's pending rewards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Points consumed per reward on conversion
pub const POINTS_PER_REWARD: u64 = 100;

/// A founder account, keyed by `founder_name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Founder {
    pub founder_name: String,
    pub allocated_points: u64,
    pub distributed_points: u64,
    pub earned_rewards: u64,
    /// Contracts this founder has distributed points to, in first-funded order
    pub contracts: Vec<String>,
    pub is_active: bool,
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Founder {
    pub fn new(payload: FounderPayload) -> Self {
        let now = Utc::now();
        Self {
            founder_name: payload.founder_name,
            allocated_points: payload.allocated_points,
            distributed_points: 0,
            earned_rewards: 0,
            contracts: Vec::new(),
            is_active: payload.is_active,
            api_key: payload.api_key,
            created_at: now,
            updated_at: now,
        }
    }

    /// Allocated points not yet distributed
    pub fn available_points(&self) -> u64 {
        self.allocated_points.saturating_sub(self.distributed_points)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FounderPayload {
    pub founder_name: String,
    #[serde(default)]
    pub allocated_points: u64,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// A contract that can hold points and accrue rewards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub contract_address: String,
    pub name: String,
    pub abi_hash: String,
    pub category: String,
    pub current_points: u64,
    pub pending_rewards: u64,
    pub claimed_rewards: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contract {
    pub fn new(payload: ContractPayload) -> Self {
        let now = Utc::now();
        Self {
            contract_address: payload.contract_address,
            name: payload.name,
            abi_hash: payload.abi_hash,
            category: payload.category,
            current_points: 0,
            pending_rewards: 0,
            claimed_rewards: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractPayload {
    pub contract_address: String,
    pub name: String,
    pub abi_hash: String,
    pub category: String,
}

/// Top up a founder's allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatePoints {
    #[serde(alias = "founder_address")]
    pub founder_name: String,
    pub points: u64,
}

/// Move points from a founder's allocation to a contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributePoints {
    #[serde(alias = "founder_address")]
    pub founder_name: String,
    pub contract_address: String,
    pub points: u64,
}

/// Turn a contract's points into pending rewards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertPoints {
    pub contract_address: String,
    pub points_to_convert: u64,
}

/// Move a contract's pending rewards to a founder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRewards {
    #[serde(alias = "founder_address")]
    pub founder_name: String,
    pub contract_address: String,
}

/// Both sides of a ledger movement, as stored after it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub founder: Founder,
    pub contract: Contract,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_founder_payload_defaults() {
        let payload: FounderPayload =
            serde_json::from_str(r#"{"founder_name": "founder1"}"#).unwrap();
        assert_eq!(payload.allocated_points, 0);
        assert!(payload.is_active);
        assert!(payload.api_key.is_none());
    }

    #[test]
    fn test_api_key_not_serialized() {
        let founder = Founder::new(FounderPayload {
            founder_name: "founder1".to_string(),
            allocated_points: 1000,
            api_key: Some("secret".to_string()),
            is_active: true,
        });

        let json = serde_json::to_value(&founder).unwrap();
        assert!(json.get("api_key").is_none());
        assert_eq!(json["allocated_points"], 1000);
        assert_eq!(founder.available_points(), 1000);
    }

    #[test]
    fn test_founder_address_alias() {
        let req: DistributePoints = serde_json::from_str(
            r#"{"founder_address": "founder1", "contract_address": "0xabc", "points": 5}"#,
        )
        .unwrap();
        assert_eq!(req.founder_name, "founder1");
    }
}
