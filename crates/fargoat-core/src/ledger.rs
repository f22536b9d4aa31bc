//! Points ledger rules
//!
//! Every store backend loads the founder and contract involved, applies
//! one of these functions, and writes both back atomically. A rule either
//! succeeds and mutates its arguments or fails and leaves them untouched.

use crate::error::{FarGoatError, Result};
use fargoat_types::{Contract, Founder, POINTS_PER_REWARD};

fn require_active(founder: &Founder) -> Result<()> {
    if !founder.is_active {
        return Err(FarGoatError::rejected("Founder is not active"));
    }
    Ok(())
}

fn overflow() -> FarGoatError {
    FarGoatError::rejected("Point balance overflow")
}

/// Add `points` to an active founder's allocation.
pub fn allocate(founder: &mut Founder, points: u64) -> Result<()> {
    require_active(founder)?;
    founder.allocated_points = founder
        .allocated_points
        .checked_add(points)
        .ok_or_else(overflow)?;
    Ok(())
}

/// Move `points` of an active founder's undistributed allocation onto
/// `contract`.
pub fn distribute(founder: &mut Founder, contract: &mut Contract, points: u64) -> Result<()> {
    require_active(founder)?;
    if points > founder.available_points() {
        return Err(FarGoatError::rejected("Insufficient allocated points"));
    }
    let current = contract
        .current_points
        .checked_add(points)
        .ok_or_else(overflow)?;

    founder.distributed_points += points;
    contract.current_points = current;
    if !founder.contracts.contains(&contract.contract_address) {
        founder.contracts.push(contract.contract_address.clone());
    }
    Ok(())
}

/// Consume `points` of the contract's balance and credit one pending
/// reward per [`POINTS_PER_REWARD`]. Returns the rewards generated.
///
/// The remainder below a whole reward is consumed as well.
pub fn convert(contract: &mut Contract, points: u64) -> Result<u64> {
    if points > contract.current_points {
        return Err(FarGoatError::rejected("Insufficient points to convert"));
    }
    let rewards = points / POINTS_PER_REWARD;
    let pending = contract
        .pending_rewards
        .checked_add(rewards)
        .ok_or_else(overflow)?;

    contract.current_points -= points;
    contract.pending_rewards = pending;
    Ok(rewards)
}

/// Move all of the contract's pending rewards to an active founder.
/// Returns the amount claimed.
pub fn claim(founder: &mut Founder, contract: &mut Contract) -> Result<u64> {
    require_active(founder)?;
    let amount = contract.pending_rewards;
    if amount == 0 {
        return Err(FarGoatError::rejected("No rewards to claim"));
    }
    let earned = founder
        .earned_rewards
        .checked_add(amount)
        .ok_or_else(overflow)?;
    let claimed = contract
        .claimed_rewards
        .checked_add(amount)
        .ok_or_else(overflow)?;

    founder.earned_rewards = earned;
    contract.claimed_rewards = claimed;
    contract.pending_rewards = 0;
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fargoat_types::{ContractPayload, FounderPayload};

    fn founder(points: u64, active: bool) -> Founder {
        Founder::new(FounderPayload {
            founder_name: "founder1".to_string(),
            allocated_points: points,
            api_key: None,
            is_active: active,
        })
    }

    fn contract() -> Contract {
        Contract::new(ContractPayload {
            contract_address: format!("0x{:040x}", 1),
            name: "Goat Pool".to_string(),
            abi_hash: "abi".to_string(),
            category: "defi".to_string(),
        })
    }

    #[test]
    fn test_points_flow_to_rewards() {
        let mut f = founder(1000, true);
        let mut c = contract();

        allocate(&mut f, 500).unwrap();
        assert_eq!(f.allocated_points, 1500);

        distribute(&mut f, &mut c, 1250).unwrap();
        assert_eq!(f.distributed_points, 1250);
        assert_eq!(f.available_points(), 250);
        assert_eq!(f.contracts, vec![c.contract_address.clone()]);
        assert_eq!(c.current_points, 1250);

        assert_eq!(convert(&mut c, 1250).unwrap(), 12);
        assert_eq!(c.current_points, 0);
        assert_eq!(c.pending_rewards, 12);

        assert_eq!(claim(&mut f, &mut c).unwrap(), 12);
        assert_eq!(f.earned_rewards, 12);
        assert_eq!(c.claimed_rewards, 12);
        assert_eq!(c.pending_rewards, 0);
    }

    #[test]
    fn test_inactive_founder_is_rejected() {
        let mut f = founder(1000, false);
        let mut c = contract();
        c.pending_rewards = 3;

        for err in [
            allocate(&mut f, 1).unwrap_err(),
            distribute(&mut f, &mut c, 1).unwrap_err(),
            claim(&mut f, &mut c).unwrap_err(),
        ] {
            assert_eq!(err.to_string(), "Founder is not active");
        }
        assert_eq!(f.allocated_points, 1000);
        assert_eq!(c.pending_rewards, 3);
    }

    #[test]
    fn test_cannot_overdraw() {
        let mut f = founder(100, true);
        let mut c = contract();

        distribute(&mut f, &mut c, 60).unwrap();
        let err = distribute(&mut f, &mut c, 41).unwrap_err();
        assert!(matches!(err, FarGoatError::Rejected(_)));
        assert_eq!(f.distributed_points, 60);
        assert_eq!(c.current_points, 60);

        assert!(convert(&mut c, 61).is_err());
        assert_eq!(c.current_points, 60);
    }

    #[test]
    fn test_claim_requires_pending_rewards() {
        let mut f = founder(100, true);
        let mut c = contract();
        assert_eq!(
            claim(&mut f, &mut c).unwrap_err().to_string(),
            "No rewards to claim"
        );
    }

    #[test]
    fn test_remainder_is_consumed() {
        let mut c = contract();
        c.current_points = 150;
        assert_eq!(convert(&mut c, 99).unwrap(), 0);
        assert_eq!(c.current_points, 51);
        assert_eq!(c.pending_rewards, 0);
    }

    #[test]
    fn test_allocation_overflow() {
        let mut f = founder(u64::MAX, true);
        assert!(allocate(&mut f, 1).is_err());
        assert_eq!(f.allocated_points, u64::MAX);
    }
}
