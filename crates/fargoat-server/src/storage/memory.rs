//! In-memory fallback store using DashMap
//!
//! Serves every request when the database cannot be opened. Deletes are
//! physical: a removed record is gone for good.

use async_trait::async_trait;
use dashmap::DashMap;
use fargoat_core::{
    ledger, Contract, ContractPayload, FarGoatError, Founder, FounderPayload, LedgerStore,
    Profile, ProfilePayload, ProfileStore, Project, ProjectPayload, ProjectStore, Result, Store,
    StoreBackend, Transfer,
};
use std::sync::{Mutex, MutexGuard};

/// Keyed in-process maps for profiles, projects and the points ledger
pub struct MemoryStore {
    profiles: DashMap<String, Profile>,
    projects: DashMap<String, Project>,
    founders: DashMap<String, Founder>,
    contracts: DashMap<String, Contract>,
    /// Serializes profile writes so the uniqueness check and the insert
    /// happen as one step
    profile_writes: Mutex<()>,
    /// Serializes ledger movements across the founder and contract maps
    ledger_writes: Mutex<()>,
}

fn lock(mutex: &Mutex<()>) -> MutexGuard<'_, ()> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            profiles: DashMap::new(),
            projects: DashMap::new(),
            founders: DashMap::new(),
            contracts: DashMap::new(),
            profile_writes: Mutex::new(()),
            ledger_writes: Mutex::new(()),
        }
    }

    fn write_guard(&self) -> MutexGuard<'_, ()> {
        lock(&self.profile_writes)
    }

    fn founder(&self, founder_name: &str) -> Result<Founder> {
        self.founders
            .get(founder_name)
            .map(|e| e.value().clone())
            .ok_or_else(|| FarGoatError::not_found("Founder"))
    }

    fn contract(&self, contract_address: &str) -> Result<Contract> {
        self.contracts
            .get(contract_address)
            .map(|e| e.value().clone())
            .ok_or_else(|| FarGoatError::not_found("Contract"))
    }

    fn put_founder(&self, mut founder: Founder) -> Founder {
        founder.touch();
        self.founders
            .insert(founder.founder_name.clone(), founder.clone());
        founder
    }

    fn put_contract(&self, mut contract: Contract) -> Contract {
        contract.touch();
        self.contracts
            .insert(contract.contract_address.clone(), contract.clone());
        contract
    }

    /// Reject the payload if another profile already holds one of its
    /// unique fields. `skip_id` is the record being updated.
    fn check_unique(&self, payload: &ProfilePayload, skip_id: Option<&str>) -> Result<()> {
        for entry in self.profiles.iter() {
            let other = entry.value();
            if Some(other.id.as_str()) == skip_id {
                continue;
            }
            let field = if other.email == payload.email {
                "email"
            } else if other.wallet_address == payload.wallet_address {
                "wallet_address"
            } else if other.unique_name == payload.unique_name {
                "unique_name"
            } else {
                continue;
            };
            return Err(FarGoatError::Conflict(format!(
                "profile {} already taken",
                field
            )));
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        let mut profiles: Vec<Profile> = self.profiles.iter().map(|e| e.value().clone()).collect();
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(profiles)
    }

    async fn get_profile(&self, id: &str) -> Result<Profile> {
        self.profiles
            .get(id)
            .map(|e| e.value().clone())
            .ok_or_else(|| FarGoatError::not_found("Profile"))
    }

    async fn create_profile(&self, payload: ProfilePayload) -> Result<Profile> {
        let _guard = self.write_guard();
        self.check_unique(&payload, None)?;

        let profile = Profile::new(new_id(), payload);
        self.profiles.insert(profile.id.clone(), profile.clone());
        Ok(profile)
    }

    async fn update_profile(&self, id: &str, payload: ProfilePayload) -> Result<Profile> {
        let _guard = self.write_guard();
        if !self.profiles.contains_key(id) {
            return Err(FarGoatError::not_found("Profile"));
        }
        self.check_unique(&payload, Some(id))?;

        let mut entry = self
            .profiles
            .get_mut(id)
            .ok_or_else(|| FarGoatError::not_found("Profile"))?;
        entry.apply(payload);
        Ok(entry.clone())
    }

    async fn delete_profile(&self, id: &str) -> Result<()> {
        let _guard = self.write_guard();
        self.profiles
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| FarGoatError::not_found("Profile"))
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = self.projects.iter().map(|e| e.value().clone()).collect();
        projects.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(projects)
    }

    async fn get_project(&self, id: &str) -> Result<Project> {
        self.projects
            .get(id)
            .map(|e| e.value().clone())
            .ok_or_else(|| FarGoatError::not_found("Project"))
    }

    async fn create_project(&self, payload: ProjectPayload) -> Result<Project> {
        let project = Project::new(new_id(), payload);
        self.projects.insert(project.id.clone(), project.clone());
        Ok(project)
    }

    async fn update_project(&self, id: &str, payload: ProjectPayload) -> Result<Project> {
        let mut entry = self
            .projects
            .get_mut(id)
            .ok_or_else(|| FarGoatError::not_found("Project"))?;
        entry.apply(payload);
        Ok(entry.clone())
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        self.projects
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| FarGoatError::not_found("Project"))
    }
}

// Movements work on copies and write both back only once the rule passed
#[async_trait]
impl LedgerStore for MemoryStore {
    async fn create_founder(&self, payload: FounderPayload) -> Result<Founder> {
        let _guard = lock(&self.ledger_writes);
        if self.founders.contains_key(&payload.founder_name) {
            return Err(FarGoatError::Conflict("Founder already exists".to_string()));
        }
        let founder = Founder::new(payload);
        self.founders
            .insert(founder.founder_name.clone(), founder.clone());
        Ok(founder)
    }

    async fn get_founder(&self, founder_name: &str) -> Result<Founder> {
        self.founder(founder_name)
    }

    async fn allocate_points(&self, founder_name: &str, points: u64) -> Result<Founder> {
        let _guard = lock(&self.ledger_writes);
        let mut founder = self.founder(founder_name)?;
        ledger::allocate(&mut founder, points)?;
        Ok(self.put_founder(founder))
    }

    async fn register_contract(&self, payload: ContractPayload) -> Result<Contract> {
        let _guard = lock(&self.ledger_writes);
        if self.contracts.contains_key(&payload.contract_address) {
            return Err(FarGoatError::Conflict(
                "Contract already registered".to_string(),
            ));
        }
        let contract = Contract::new(payload);
        self.contracts
            .insert(contract.contract_address.clone(), contract.clone());
        Ok(contract)
    }

    async fn get_contract(&self, contract_address: &str) -> Result<Contract> {
        self.contract(contract_address)
    }

    async fn distribute_points(
        &self,
        founder_name: &str,
        contract_address: &str,
        points: u64,
    ) -> Result<Transfer> {
        let _guard = lock(&self.ledger_writes);
        let mut founder = self.founder(founder_name)?;
        let mut contract = self.contract(contract_address)?;
        ledger::distribute(&mut founder, &mut contract, points)?;
        Ok(Transfer {
            founder: self.put_founder(founder),
            contract: self.put_contract(contract),
        })
    }

    async fn convert_points(&self, contract_address: &str, points: u64) -> Result<Contract> {
        let _guard = lock(&self.ledger_writes);
        let mut contract = self.contract(contract_address)?;
        ledger::convert(&mut contract, points)?;
        Ok(self.put_contract(contract))
    }

    async fn claim_rewards(&self, founder_name: &str, contract_address: &str) -> Result<Transfer> {
        let _guard = lock(&self.ledger_writes);
        let mut founder = self.founder(founder_name)?;
        let mut contract = self.contract(contract_address)?;
        ledger::claim(&mut founder, &mut contract)?;
        Ok(Transfer {
            founder: self.put_founder(founder),
            contract: self.put_contract(contract),
        })
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }
}
