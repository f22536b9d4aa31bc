//! Field-level validation for client payloads

use crate::error::{FarGoatError, Result};
use fargoat_types::{
    AllocatePoints, ClaimRewards, ContractPayload, ConvertPoints, DistributePoints,
    FounderPayload, ProfilePayload, ProjectPayload,
};
use once_cell::sync::Lazy;
use regex::Regex;

const MAX_EMAIL_LEN: usize = 255;
const MAX_UNIQUE_NAME_LEN: usize = 100;
const MAX_TITLE_LEN: usize = 255;
const MAX_STATUS_LEN: usize = 50;
const MAX_FOUNDER_NAME_LEN: usize = 100;
const MAX_API_KEY_LEN: usize = 255;
const MAX_CONTRACT_NAME_LEN: usize = 255;
const MAX_ABI_HASH_LEN: usize = 255;
const MAX_CATEGORY_LEN: usize = 50;

/// Upper bound on any single points amount; keeps balances well inside
/// SQLite's signed 64-bit integers
pub const MAX_POINTS: u64 = 1_000_000_000_000;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

static WALLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("valid wallet regex"));

/// Payloads that can be checked before reaching a store
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for ProfilePayload {
    fn validate(&self) -> Result<()> {
        require_uuid("user_id", &self.user_id)?;

        require_bounded("email", &self.email, MAX_EMAIL_LEN)?;
        if !EMAIL_RE.is_match(&self.email) {
            return Err(invalid("email", "must be a valid email address"));
        }

        require_address("wallet_address", &self.wallet_address)?;

        require_bounded("unique_name", &self.unique_name, MAX_UNIQUE_NAME_LEN)
    }
}

impl Validate for ProjectPayload {
    fn validate(&self) -> Result<()> {
        require_uuid("founder_id", &self.founder_id)?;
        require_bounded("title", &self.title, MAX_TITLE_LEN)?;
        require_bounded("status", &self.status, MAX_STATUS_LEN)
    }
}

impl Validate for FounderPayload {
    fn validate(&self) -> Result<()> {
        require_bounded("founder_name", &self.founder_name, MAX_FOUNDER_NAME_LEN)?;
        if self.allocated_points > MAX_POINTS {
            return Err(invalid(
                "allocated_points",
                &format!("must be at most {}", MAX_POINTS),
            ));
        }
        if let Some(key) = &self.api_key {
            require_bounded("api_key", key, MAX_API_KEY_LEN)?;
        }
        Ok(())
    }
}

impl Validate for ContractPayload {
    fn validate(&self) -> Result<()> {
        require_address("contract_address", &self.contract_address)?;
        require_bounded("name", &self.name, MAX_CONTRACT_NAME_LEN)?;
        require_bounded("abi_hash", &self.abi_hash, MAX_ABI_HASH_LEN)?;
        require_bounded("category", &self.category, MAX_CATEGORY_LEN)
    }
}

impl Validate for AllocatePoints {
    fn validate(&self) -> Result<()> {
        require_bounded("founder_name", &self.founder_name, MAX_FOUNDER_NAME_LEN)?;
        require_points("points", self.points)
    }
}

impl Validate for DistributePoints {
    fn validate(&self) -> Result<()> {
        require_bounded("founder_name", &self.founder_name, MAX_FOUNDER_NAME_LEN)?;
        require_address("contract_address", &self.contract_address)?;
        require_points("points", self.points)
    }
}

impl Validate for ConvertPoints {
    fn validate(&self) -> Result<()> {
        require_address("contract_address", &self.contract_address)?;
        require_points("points_to_convert", self.points_to_convert)
    }
}

impl Validate for ClaimRewards {
    fn validate(&self) -> Result<()> {
        require_bounded("founder_name", &self.founder_name, MAX_FOUNDER_NAME_LEN)?;
        require_address("contract_address", &self.contract_address)
    }
}

fn invalid(field: &str, reason: &str) -> FarGoatError {
    FarGoatError::Validation(format!("{} {}", field, reason))
}

fn require_uuid(field: &str, value: &str) -> Result<()> {
    uuid::Uuid::parse_str(value)
        .map(|_| ())
        .map_err(|_| invalid(field, "must be a UUID"))
}

fn require_address(field: &str, value: &str) -> Result<()> {
    if !WALLET_RE.is_match(value) {
        return Err(invalid(field, "must be 0x followed by 40 hex digits"));
    }
    Ok(())
}

fn require_points(field: &str, points: u64) -> Result<()> {
    if points == 0 || points > MAX_POINTS {
        return Err(invalid(
            field,
            &format!("must be between 1 and {}", MAX_POINTS),
        ));
    }
    Ok(())
}

fn require_bounded(field: &str, value: &str, max: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, "is required"));
    }
    if value.chars().count() > max {
        return Err(invalid(field, &format!("must be at most {} characters", max)));
    }
    Ok(())
}
