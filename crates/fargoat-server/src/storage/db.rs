//! SQLite database layer (embedded, no external dependencies)
//!
//! Deletes are soft: the row keeps its data and gets a `deleted_at`
//! timestamp, and every read filters such rows out.
//!
//! Ledger movements run in a transaction whose first statement touches the
//! affected rows, so the write lock is held before anything is read.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fargoat_core::{
    ledger, Contract, ContractPayload, FarGoatError, Founder, FounderPayload, LedgerStore,
    Profile, ProfilePayload, ProfileStore, Project, ProjectPayload, ProjectStore, Store,
    StoreBackend, Transfer,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{SqliteConnection, SqlitePool};
use std::path::PathBuf;
use std::str::FromStr;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the database behind `dsn` and create the schema.
    ///
    /// Accepts `sqlite:` URLs, including `sqlite::memory:`, or a bare file
    /// path. Only SQLite is supported; any other URL scheme is rejected.
    pub async fn new(dsn: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", dsn);

        let in_memory = dsn.contains(":memory:");
        let options = if dsn.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(dsn)
                .with_context(|| format!("Invalid SQLite URL: {}", dsn))?
        } else if dsn.contains("://") {
            anyhow::bail!(
                "Unsupported database URL: {} (only SQLite is supported, use sqlite://<path>)",
                dsn
            );
        } else {
            SqliteConnectOptions::new().filename(dsn)
        };

        if let Some(path) = file_path(dsn) {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tracing::info!("Creating parent directory: {}", parent.display());
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = options
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        // Every connection to :memory: is its own database, so keep exactly one alive
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to SQLite database at: {}", dsn))?;

        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS profiles (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                email TEXT NOT NULL,
                wallet_address TEXT NOT NULL,
                unique_name TEXT NOT NULL,
                created_at DATETIME NOT NULL,
                updated_at DATETIME NOT NULL,
                deleted_at DATETIME
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Uniqueness only binds live rows; a deleted profile frees its values
        for column in ["email", "wallet_address", "unique_name"] {
            sqlx::query(&format!(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_profiles_{column} \
                 ON profiles ({column}) WHERE deleted_at IS NULL"
            ))
            .execute(pool)
            .await?;
        }

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_profiles_deleted_at ON profiles (deleted_at)
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id TEXT PRIMARY KEY,
                founder_id TEXT NOT NULL,
                title TEXT NOT NULL,
                status TEXT NOT NULL,
                created_at DATETIME NOT NULL,
                updated_at DATETIME NOT NULL,
                deleted_at DATETIME
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_projects_deleted_at ON projects (deleted_at)
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS founders (
                founder_name TEXT PRIMARY KEY,
                allocated_points INTEGER NOT NULL,
                distributed_points INTEGER NOT NULL DEFAULT 0,
                earned_rewards INTEGER NOT NULL DEFAULT 0,
                api_key TEXT,
                is_active BOOLEAN NOT NULL,
                created_at DATETIME NOT NULL,
                updated_at DATETIME NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contracts (
                contract_address TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                abi_hash TEXT NOT NULL,
                category TEXT NOT NULL,
                current_points INTEGER NOT NULL DEFAULT 0,
                pending_rewards INTEGER NOT NULL DEFAULT 0,
                claimed_rewards INTEGER NOT NULL DEFAULT 0,
                created_at DATETIME NOT NULL,
                updated_at DATETIME NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Contracts a founder has funded, in rowid (first-funded) order
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS founder_contracts (
                founder_name TEXT NOT NULL REFERENCES founders (founder_name),
                contract_address TEXT NOT NULL REFERENCES contracts (contract_address),
                PRIMARY KEY (founder_name, contract_address)
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Close the pool. Later operations report the store as unavailable.
    #[cfg(test)]
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Database file behind a DSN, `None` for in-memory databases
fn file_path(dsn: &str) -> Option<PathBuf> {
    if dsn.contains(":memory:") {
        return None;
    }
    let rest = dsn
        .strip_prefix("sqlite://")
        .or_else(|| dsn.strip_prefix("sqlite:"))
        .unwrap_or(dsn);
    let path = rest.split('?').next().unwrap_or(rest);
    Some(PathBuf::from(path))
}

fn map_err(e: sqlx::Error) -> FarGoatError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return FarGoatError::Conflict(db.message().to_string());
        }
    }
    if matches!(
        e,
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)
    ) {
        return FarGoatError::Unavailable(e.to_string());
    }
    FarGoatError::Database(e.to_string())
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[async_trait]
impl ProfileStore for Database {
    async fn list_profiles(&self) -> fargoat_core::Result<Vec<Profile>> {
        let rows: Vec<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, email, wallet_address, unique_name,
                   created_at, updated_at, deleted_at
            FROM profiles WHERE deleted_at IS NULL
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_err)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get_profile(&self, id: &str) -> fargoat_core::Result<Profile> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, email, wallet_address, unique_name,
                   created_at, updated_at, deleted_at
            FROM profiles WHERE id = ?1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_err)?;

        row.map(|r| r.into())
            .ok_or_else(|| FarGoatError::not_found("Profile"))
    }

    async fn create_profile(&self, payload: ProfilePayload) -> fargoat_core::Result<Profile> {
        let profile = Profile::new(new_id(), payload);

        sqlx::query(
            r#"
            INSERT INTO profiles (id, user_id, email, wallet_address, unique_name, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&profile.id)
        .bind(&profile.user_id)
        .bind(&profile.email)
        .bind(&profile.wallet_address)
        .bind(&profile.unique_name)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_err)?;

        Ok(profile)
    }

    async fn update_profile(
        &self,
        id: &str,
        payload: ProfilePayload,
    ) -> fargoat_core::Result<Profile> {
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET user_id = ?1, email = ?2, wallet_address = ?3, unique_name = ?4, updated_at = ?5
            WHERE id = ?6 AND deleted_at IS NULL
            "#,
        )
        .bind(&payload.user_id)
        .bind(&payload.email)
        .bind(&payload.wallet_address)
        .bind(&payload.unique_name)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_err)?;

        if result.rows_affected() == 0 {
            return Err(FarGoatError::not_found("Profile"));
        }

        self.get_profile(id).await
    }

    async fn delete_profile(&self, id: &str) -> fargoat_core::Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE profiles SET deleted_at = ?1 WHERE id = ?2 AND deleted_at IS NULL
            "#,
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_err)?;

        if result.rows_affected() == 0 {
            return Err(FarGoatError::not_found("Profile"));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for Database {
    async fn list_projects(&self) -> fargoat_core::Result<Vec<Project>> {
        let rows: Vec<ProjectRow> = sqlx::query_as(
            r#"
            SELECT id, founder_id, title, status, created_at, updated_at, deleted_at
            FROM projects WHERE deleted_at IS NULL
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_err)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get_project(&self, id: &str) -> fargoat_core::Result<Project> {
        let row: Option<ProjectRow> = sqlx::query_as(
            r#"
            SELECT id, founder_id, title, status, created_at, updated_at, deleted_at
            FROM projects WHERE id = ?1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_err)?;

        row.map(|r| r.into())
            .ok_or_else(|| FarGoatError::not_found("Project"))
    }

    async fn create_project(&self, payload: ProjectPayload) -> fargoat_core::Result<Project> {
        let project = Project::new(new_id(), payload);

        sqlx::query(
            r#"
            INSERT INTO projects (id, founder_id, title, status, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&project.id)
        .bind(&project.founder_id)
        .bind(&project.title)
        .bind(&project.status)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_err)?;

        Ok(project)
    }

    async fn update_project(
        &self,
        id: &str,
        payload: ProjectPayload,
    ) -> fargoat_core::Result<Project> {
        let result = sqlx::query(
            r#"
            UPDATE projects SET founder_id = ?1, title = ?2, status = ?3, updated_at = ?4
            WHERE id = ?5 AND deleted_at IS NULL
            "#,
        )
        .bind(&payload.founder_id)
        .bind(&payload.title)
        .bind(&payload.status)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_err)?;

        if result.rows_affected() == 0 {
            return Err(FarGoatError::not_found("Project"));
        }

        self.get_project(id).await
    }

    async fn delete_project(&self, id: &str) -> fargoat_core::Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE projects SET deleted_at = ?1 WHERE id = ?2 AND deleted_at IS NULL
            "#,
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_err)?;

        if result.rows_affected() == 0 {
            return Err(FarGoatError::not_found("Project"));
        }
        Ok(())
    }
}

/// Points as stored in SQLite's signed integer columns
fn sql_points(points: u64) -> fargoat_core::Result<i64> {
    i64::try_from(points).map_err(|_| FarGoatError::rejected("Point balance overflow"))
}

fn from_sql_points(points: i64) -> u64 {
    u64::try_from(points).unwrap_or(0)
}

fn conflict_as(e: sqlx::Error, message: &str) -> FarGoatError {
    match map_err(e) {
        FarGoatError::Conflict(_) => FarGoatError::Conflict(message.to_string()),
        other => other,
    }
}

/// Bump `updated_at`, taking the write lock; `NotFound` if the founder is absent
async fn touch_founder(conn: &mut SqliteConnection, founder_name: &str) -> fargoat_core::Result<()> {
    let result = sqlx::query("UPDATE founders SET updated_at = ?1 WHERE founder_name = ?2")
        .bind(Utc::now())
        .bind(founder_name)
        .execute(&mut *conn)
        .await
        .map_err(map_err)?;

    if result.rows_affected() == 0 {
        return Err(FarGoatError::not_found("Founder"));
    }
    Ok(())
}

async fn touch_contract(
    conn: &mut SqliteConnection,
    contract_address: &str,
) -> fargoat_core::Result<()> {
    let result = sqlx::query("UPDATE contracts SET updated_at = ?1 WHERE contract_address = ?2")
        .bind(Utc::now())
        .bind(contract_address)
        .execute(&mut *conn)
        .await
        .map_err(map_err)?;

    if result.rows_affected() == 0 {
        return Err(FarGoatError::not_found("Contract"));
    }
    Ok(())
}

async fn load_founder(
    conn: &mut SqliteConnection,
    founder_name: &str,
) -> fargoat_core::Result<Founder> {
    let row: Option<FounderRow> = sqlx::query_as(
        r#"
        SELECT founder_name, allocated_points, distributed_points, earned_rewards,
               api_key, is_active, created_at, updated_at
        FROM founders WHERE founder_name = ?1
        "#,
    )
    .bind(founder_name)
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_err)?;

    let row = row.ok_or_else(|| FarGoatError::not_found("Founder"))?;

    let contracts: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT contract_address FROM founder_contracts
        WHERE founder_name = ?1 ORDER BY rowid ASC
        "#,
    )
    .bind(founder_name)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_err)?;

    Ok(row.into_founder(contracts))
}

async fn load_contract(
    conn: &mut SqliteConnection,
    contract_address: &str,
) -> fargoat_core::Result<Contract> {
    let row: Option<ContractRow> = sqlx::query_as(
        r#"
        SELECT contract_address, name, abi_hash, category, current_points,
               pending_rewards, claimed_rewards, created_at, updated_at
        FROM contracts WHERE contract_address = ?1
        "#,
    )
    .bind(contract_address)
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_err)?;

    row.map(|r| r.into())
        .ok_or_else(|| FarGoatError::not_found("Contract"))
}

async fn save_founder(conn: &mut SqliteConnection, founder: &Founder) -> fargoat_core::Result<()> {
    sqlx::query(
        r#"
        UPDATE founders
        SET allocated_points = ?1, distributed_points = ?2, earned_rewards = ?3, updated_at = ?4
        WHERE founder_name = ?5
        "#,
    )
    .bind(sql_points(founder.allocated_points)?)
    .bind(sql_points(founder.distributed_points)?)
    .bind(sql_points(founder.earned_rewards)?)
    .bind(founder.updated_at)
    .bind(&founder.founder_name)
    .execute(&mut *conn)
    .await
    .map_err(map_err)?;

    for contract_address in &founder.contracts {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO founder_contracts (founder_name, contract_address)
            VALUES (?1, ?2)
            "#,
        )
        .bind(&founder.founder_name)
        .bind(contract_address)
        .execute(&mut *conn)
        .await
        .map_err(map_err)?;
    }
    Ok(())
}

async fn save_contract(
    conn: &mut SqliteConnection,
    contract: &Contract,
) -> fargoat_core::Result<()> {
    sqlx::query(
        r#"
        UPDATE contracts
        SET current_points = ?1, pending_rewards = ?2, claimed_rewards = ?3, updated_at = ?4
        WHERE contract_address = ?5
        "#,
    )
    .bind(sql_points(contract.current_points)?)
    .bind(sql_points(contract.pending_rewards)?)
    .bind(sql_points(contract.claimed_rewards)?)
    .bind(contract.updated_at)
    .bind(&contract.contract_address)
    .execute(&mut *conn)
    .await
    .map_err(map_err)?;
    Ok(())
}

#[async_trait]
impl LedgerStore for Database {
    async fn create_founder(&self, payload: FounderPayload) -> fargoat_core::Result<Founder> {
        let founder = Founder::new(payload);

        sqlx::query(
            r#"
            INSERT INTO founders (founder_name, allocated_points, api_key, is_active, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&founder.founder_name)
        .bind(sql_points(founder.allocated_points)?)
        .bind(&founder.api_key)
        .bind(founder.is_active)
        .bind(founder.created_at)
        .bind(founder.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_as(e, "Founder already exists"))?;

        Ok(founder)
    }

    async fn get_founder(&self, founder_name: &str) -> fargoat_core::Result<Founder> {
        let mut conn = self.pool.acquire().await.map_err(map_err)?;
        load_founder(&mut conn, founder_name).await
    }

    async fn allocate_points(
        &self,
        founder_name: &str,
        points: u64,
    ) -> fargoat_core::Result<Founder> {
        let mut tx = self.pool.begin().await.map_err(map_err)?;
        touch_founder(&mut tx, founder_name).await?;
        let mut founder = load_founder(&mut tx, founder_name).await?;

        ledger::allocate(&mut founder, points)?;
        founder.touch();

        save_founder(&mut tx, &founder).await?;
        tx.commit().await.map_err(map_err)?;
        Ok(founder)
    }

    async fn register_contract(&self, payload: ContractPayload) -> fargoat_core::Result<Contract> {
        let contract = Contract::new(payload);

        sqlx::query(
            r#"
            INSERT INTO contracts (contract_address, name, abi_hash, category, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&contract.contract_address)
        .bind(&contract.name)
        .bind(&contract.abi_hash)
        .bind(&contract.category)
        .bind(contract.created_at)
        .bind(contract.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_as(e, "Contract already registered"))?;

        Ok(contract)
    }

    async fn get_contract(&self, contract_address: &str) -> fargoat_core::Result<Contract> {
        let mut conn = self.pool.acquire().await.map_err(map_err)?;
        load_contract(&mut conn, contract_address).await
    }

    async fn distribute_points(
        &self,
        founder_name: &str,
        contract_address: &str,
        points: u64,
    ) -> fargoat_core::Result<Transfer> {
        let mut tx = self.pool.begin().await.map_err(map_err)?;
        touch_founder(&mut tx, founder_name).await?;
        touch_contract(&mut tx, contract_address).await?;
        let mut founder = load_founder(&mut tx, founder_name).await?;
        let mut contract = load_contract(&mut tx, contract_address).await?;

        ledger::distribute(&mut founder, &mut contract, points)?;
        founder.touch();
        contract.touch();

        save_founder(&mut tx, &founder).await?;
        save_contract(&mut tx, &contract).await?;
        tx.commit().await.map_err(map_err)?;
        Ok(Transfer { founder, contract })
    }

    async fn convert_points(
        &self,
        contract_address: &str,
        points: u64,
    ) -> fargoat_core::Result<Contract> {
        let mut tx = self.pool.begin().await.map_err(map_err)?;
        touch_contract(&mut tx, contract_address).await?;
        let mut contract = load_contract(&mut tx, contract_address).await?;

        ledger::convert(&mut contract, points)?;
        contract.touch();

        save_contract(&mut tx, &contract).await?;
        tx.commit().await.map_err(map_err)?;
        Ok(contract)
    }

    async fn claim_rewards(
        &self,
        founder_name: &str,
        contract_address: &str,
    ) -> fargoat_core::Result<Transfer> {
        let mut tx = self.pool.begin().await.map_err(map_err)?;
        touch_founder(&mut tx, founder_name).await?;
        touch_contract(&mut tx, contract_address).await?;
        let mut founder = load_founder(&mut tx, founder_name).await?;
        let mut contract = load_contract(&mut tx, contract_address).await?;

        ledger::claim(&mut founder, &mut contract)?;
        founder.touch();
        contract.touch();

        save_founder(&mut tx, &founder).await?;
        save_contract(&mut tx, &contract).await?;
        tx.commit().await.map_err(map_err)?;
        Ok(Transfer { founder, contract })
    }
}

#[async_trait]
impl Store for Database {
    async fn ping(&self) -> fargoat_core::Result<()> {
        if self.pool.is_closed() {
            return Err(FarGoatError::Unavailable("connection pool is closed".to_string()));
        }
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(map_err)
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Database
    }
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: String,
    user_id: String,
    email: String,
    wallet_address: String,
    unique_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<ProfileRow> for Profile {
    fn from(r: ProfileRow) -> Self {
        Profile {
            id: r.id,
            user_id: r.user_id,
            email: r.email,
            wallet_address: r.wallet_address,
            unique_name: r.unique_name,
            created_at: r.created_at,
            updated_at: r.updated_at,
            deleted_at: r.deleted_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: String,
    founder_id: String,
    title: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<ProjectRow> for Project {
    fn from(r: ProjectRow) -> Self {
        Project {
            id: r.id,
            founder_id: r.founder_id,
            title: r.title,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
            deleted_at: r.deleted_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct FounderRow {
    founder_name: String,
    allocated_points: i64,
    distributed_points: i64,
    earned_rewards: i64,
    api_key: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl FounderRow {
    fn into_founder(self, contracts: Vec<String>) -> Founder {
        Founder {
            founder_name: self.founder_name,
            allocated_points: from_sql_points(self.allocated_points),
            distributed_points: from_sql_points(self.distributed_points),
            earned_rewards: from_sql_points(self.earned_rewards),
            contracts,
            is_active: self.is_active,
            api_key: self.api_key,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ContractRow {
    contract_address: String,
    name: String,
    abi_hash: String,
    category: String,
    current_points: i64,
    pending_rewards: i64,
    claimed_rewards: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ContractRow> for Contract {
    fn from(r: ContractRow) -> Self {
        Contract {
            contract_address: r.contract_address,
            name: r.name,
            abi_hash: r.abi_hash,
            category: r.category,
            current_points: from_sql_points(r.current_points),
            pending_rewards: from_sql_points(r.pending_rewards),
            claimed_rewards: from_sql_points(r.claimed_rewards),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
