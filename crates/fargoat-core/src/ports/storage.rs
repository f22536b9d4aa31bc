//! Storage traits for persistence

use crate::Result;
use async_trait::async_trait;
use fargoat_types::{
    Contract, ContractPayload, Founder, FounderPayload, Profile, ProfilePayload, Project,
    ProjectPayload, Transfer,
};

/// Profile store
///
/// Lookups, updates and deletes of an absent id fail with `NotFound`.
/// Creates and updates that would duplicate another profile's email,
/// wallet address or unique name fail with `Conflict`.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn list_profiles(&self) -> Result<Vec<Profile>>;
    async fn get_profile(&self, id: &str) -> Result<Profile>;
    async fn create_profile(&self, payload: ProfilePayload) -> Result<Profile>;
    async fn update_profile(&self, id: &str, payload: ProfilePayload) -> Result<Profile>;
    async fn delete_profile(&self, id: &str) -> Result<()>;
}

/// Project store
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>>;
    async fn get_project(&self, id: &str) -> Result<Project>;
    async fn create_project(&self, payload: ProjectPayload) -> Result<Project>;
    async fn update_project(&self, id: &str, payload: ProjectPayload) -> Result<Project>;
    async fn delete_project(&self, id: &str) -> Result<()>;
}

/// Founder points ledger
///
/// Founders are keyed by name and contracts by address. Unknown keys fail
/// with `NotFound`, duplicate keys on create with `Conflict`, and movements
/// refused by the rules in [`crate::ledger`] with `Rejected`. Each movement
/// is applied to founder and contract as one atomic step.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn create_founder(&self, payload: FounderPayload) -> Result<Founder>;
    async fn get_founder(&self, founder_name: &str) -> Result<Founder>;
    async fn allocate_points(&self, founder_name: &str, points: u64) -> Result<Founder>;
    async fn register_contract(&self, payload: ContractPayload) -> Result<Contract>;
    async fn get_contract(&self, contract_address: &str) -> Result<Contract>;
    async fn distribute_points(
        &self,
        founder_name: &str,
        contract_address: &str,
        points: u64,
    ) -> Result<Transfer>;
    async fn convert_points(&self, contract_address: &str, points: u64) -> Result<Contract>;
    async fn claim_rewards(&self, founder_name: &str, contract_address: &str)
        -> Result<Transfer>;
}

/// Which backend is serving requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Database,
    Memory,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::Database => write!(f, "database"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Full store used by the HTTP layer
#[async_trait]
pub trait Store: ProfileStore + ProjectStore + LedgerStore {
    /// Check that the backend can serve requests right now.
    async fn ping(&self) -> Result<()>;

    fn backend(&self) -> StoreBackend;
}
