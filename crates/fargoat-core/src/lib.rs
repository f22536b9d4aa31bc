//! FarGoat Core Library
//!
//! Error taxonomy, payload validation, points ledger rules and the storage
//! port traits shared by every store backend.

// Re-export pure types from fargoat-types
pub use fargoat_types::*;

pub mod error;
pub mod ledger;
pub mod ports;
pub mod validation;

pub use error::{FarGoatError, Result};
pub use ports::{LedgerStore, ProfileStore, ProjectStore, Store, StoreBackend};
pub use validation::Validate;
