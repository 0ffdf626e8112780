//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VITRINE_ACCOUNTS_SEED` - Path to an accounts JSON seed (default: built-in)
//! - `VITRINE_PRODUCTS_SEED` - Path to a products JSON seed (default: built-in)
//! - `VITRINE_PLACEHOLDER_IMAGE` - Image for products created without one
//!   (default: `https://via.placeholder.com/150`)
//! - `VITRINE_DEFAULT_CATEGORY` - Category for products created without one
//!   (default: `Geral`)

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ProductDefaults;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store configuration.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Accounts seed file; `None` uses the built-in seed.
    pub accounts_seed: Option<PathBuf>,
    /// Products seed file; `None` uses the built-in seed.
    pub products_seed: Option<PathBuf>,
    /// Defaults for omitted product fields.
    pub product_defaults: ProductDefaults,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub(crate) fn from_source(
        get: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let accounts_seed = get_optional_path(&get, "VITRINE_ACCOUNTS_SEED");
        let products_seed = get_optional_path(&get, "VITRINE_PRODUCTS_SEED");

        let placeholder_image = get_non_empty_or_default(
            &get,
            "VITRINE_PLACEHOLDER_IMAGE",
            ProductDefaults::PLACEHOLDER_IMAGE,
        )?;
        let category =
            get_non_empty_or_default(&get, "VITRINE_DEFAULT_CATEGORY", ProductDefaults::CATEGORY)?;

        Ok(Self {
            accounts_seed,
            products_seed,
            product_defaults: ProductDefaults {
                placeholder_image,
                category,
            },
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional path; blank values count as unset.
fn get_optional_path(get: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    get(key)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Get a variable with a default value, rejecting an explicitly blank one.
fn get_non_empty_or_default(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<String, ConfigError> {
    match get(key) {
        None => Ok(default.to_string()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        )),
        Some(value) => Ok(value),
    }
}
