//! Store state shared with the calling surfaces.

use tracing::info;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::seed;
use crate::services::{CatalogRegistry, IdentityRegistry};

/// Both registries, built once at startup and passed explicitly to
/// whichever layer needs them.
///
/// Reads borrow the store shared, mutations borrow it exclusively, so a
/// single writer is enforced at compile time.
#[derive(Debug, Default)]
pub struct Store {
    identity: IdentityRegistry,
    catalog: CatalogRegistry,
}

impl Store {
    /// Create a store from already-built registries.
    #[must_use]
    pub const fn new(identity: IdentityRegistry, catalog: CatalogRegistry) -> Self {
        Self { identity, catalog }
    }

    /// Build a store from configuration, loading both seed collections.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Seed` if either seed cannot be read, parsed, or
    /// contains duplicate IDs.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let accounts = seed::load_accounts(config.accounts_seed.as_deref())?;
        let products = seed::load_products(config.products_seed.as_deref())?;

        let identity = IdentityRegistry::from_seed(accounts)?;
        let catalog = CatalogRegistry::from_seed(products, config.product_defaults.clone())?;

        info!(
            accounts = identity.list_accounts().len(),
            products = catalog.list_products().len(),
            "Store initialized"
        );

        Ok(Self::new(identity, catalog))
    }

    /// Get a reference to the identity registry.
    #[must_use]
    pub const fn identity(&self) -> &IdentityRegistry {
        &self.identity
    }

    /// Get a mutable reference to the identity registry.
    pub const fn identity_mut(&mut self) -> &mut IdentityRegistry {
        &mut self.identity
    }

    /// Get a reference to the catalog registry.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogRegistry {
        &self.catalog
    }

    /// Get a mutable reference to the catalog registry.
    pub const fn catalog_mut(&mut self) -> &mut CatalogRegistry {
        &mut self.catalog
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config_uses_builtin_seeds() {
        let store = Store::from_config(&StoreConfig::default()).unwrap();
        assert!(!store.identity().list_accounts().is_empty());
        assert!(!store.catalog().list_products().is_empty());
        assert!(!store.identity().is_authenticated());
    }

    #[test]
    fn test_registries_are_independent() {
        let mut store = Store::from_config(&StoreConfig::default()).unwrap();
        let products = store.catalog().list_products().len();

        assert!(store.identity_mut().authenticate("admin@teste.com", "admin123"));
        store.identity_mut().end_session();

        assert_eq!(store.catalog().list_products().len(), products);
    }
}
