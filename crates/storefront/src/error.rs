//! Unified error handling.
//!
//! Registry operations never fail: rejected logins are `false` and unknown
//! IDs are no-ops. The fatal conditions all happen while building a
//! [`Store`](crate::state::Store), and surface as `StoreError`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::seed::SeedError;

/// Error building the store at startup.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A seed collection could not be loaded.
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),
}
