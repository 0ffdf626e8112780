//! Seed collections loaded into the registries at startup.
//!
//! # Sources
//!
//! Each registry is seeded from a JSON array, either the built-in data
//! embedded from `crates/storefront/data/` or a file named in the
//! configuration. Seeds are read once and copied into memory; nothing is ever
//! written back.
//!
//! ## Shapes
//!
//! - accounts: `{ id, name, email, password, profile, active }`
//! - products: `{ id, name, price, description, image, category, inStock }`

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Account, Product};

/// Built-in account seed.
pub const DEFAULT_ACCOUNTS: &str = include_str!("../data/accounts.json");

/// Built-in product seed.
pub const DEFAULT_PRODUCTS: &str = include_str!("../data/products.json");

/// Errors that can occur while loading a seed collection.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed is not a JSON array of the expected shape.
    #[error("invalid {kind} seed ({origin}): {source}")]
    Parse {
        kind: &'static str,
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two entries share an ID.
    #[error("duplicate {kind} id in seed: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

/// Anything that can be seeded: it must expose a stable string ID.
pub trait SeedEntity: DeserializeOwned {
    /// Name used in error messages and log events.
    const KIND: &'static str;

    /// The entity's ID as a string.
    fn seed_id(&self) -> &str;
}

impl SeedEntity for Account {
    const KIND: &'static str = "account";

    fn seed_id(&self) -> &str {
        self.id.as_str()
    }
}

impl SeedEntity for Product {
    const KIND: &'static str = "product";

    fn seed_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Parse a seed collection from JSON text.
///
/// # Errors
///
/// Returns `SeedError::Parse` if the JSON does not match the entity shape, or
/// `SeedError::DuplicateId` if two entries share an ID.
pub fn parse<T: SeedEntity>(json: &str, origin: &str) -> Result<Vec<T>, SeedError> {
    let entities: Vec<T> = serde_json::from_str(json).map_err(|source| SeedError::Parse {
        kind: T::KIND,
        origin: origin.to_owned(),
        source,
    })?;

    ensure_unique_ids(&entities)?;

    debug!(kind = T::KIND, origin, count = entities.len(), "Parsed seed");
    Ok(entities)
}

/// Load a seed collection from a file, or from the built-in data when no
/// path is given.
///
/// # Errors
///
/// Returns `SeedError::Io` if the file cannot be read, plus any error from
/// [`parse`].
pub fn load<T: SeedEntity>(path: Option<&Path>, builtin: &str) -> Result<Vec<T>, SeedError> {
    let entities = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse(&json, &path.display().to_string())?
        }
        None => parse(builtin, "built-in")?,
    };

    info!(kind = T::KIND, count = entities.len(), "Seed loaded");
    Ok(entities)
}

/// Load the account seed.
///
/// # Errors
///
/// See [`load`].
pub fn load_accounts(path: Option<&Path>) -> Result<Vec<Account>, SeedError> {
    load(path, DEFAULT_ACCOUNTS)
}

/// Load the product seed.
///
/// # Errors
///
/// See [`load`].
pub fn load_products(path: Option<&Path>) -> Result<Vec<Product>, SeedError> {
    load(path, DEFAULT_PRODUCTS)
}

pub(crate) fn ensure_unique_ids<T: SeedEntity>(entities: &[T]) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(entities.len());
    for entity in entities {
        if !seen.insert(entity.seed_id()) {
            return Err(SeedError::DuplicateId {
                kind: T::KIND,
                id: entity.seed_id().to_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_seeds_parse() {
        let accounts: Vec<Account> = parse(DEFAULT_ACCOUNTS, "built-in").unwrap();
        let products: Vec<Product> = parse(DEFAULT_PRODUCTS, "built-in").unwrap();
        assert!(!accounts.is_empty());
        assert!(!products.is_empty());
        assert!(accounts.iter().any(|a| a.email == "admin@teste.com" && a.is_admin()));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": "1", "name": "A", "email": "a@x", "password": "a", "profile": "user", "active": true},
            {"id": "1", "name": "B", "email": "b@x", "password": "b", "profile": "user", "active": true}
        ]"#;
        let err = parse::<Account>(json, "test").unwrap_err();
        assert!(matches!(err, SeedError::DuplicateId { kind: "account", .. }));
    }

    #[test]
    fn test_malformed_seed_rejected() {
        let err = parse::<Product>(r#"[{"id": "1"}]"#, "test").unwrap_err();
        assert!(matches!(err, SeedError::Parse { kind: "product", .. }));
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"[{"id": "1", "name": "X", "price": -1, "description": "d",
                        "image": "i", "category": "c", "inStock": true}]"#;
        assert!(parse::<Product>(json, "test").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_accounts(Some(Path::new("/nonexistent/accounts.json"))).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/accounts.json"));
    }
}
