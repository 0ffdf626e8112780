//! Integration tests for Vitrine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `identity_registry` - Authentication, session and account CRUD
//! - `catalog_registry` - Product CRUD and lookup
//! - `seed_files` - Seed loading from files and configuration

use vitrine_core::{AccountId, Credential, Price, ProductId, Role};
use vitrine_storefront::models::{Account, Product, ProductDefaults};
use vitrine_storefront::services::{CatalogRegistry, IdentityRegistry};

/// Account fixture.
#[must_use]
pub fn account(id: &str, email: &str, secret: &str, role: Role, active: bool) -> Account {
    Account {
        id: AccountId::new(id),
        name: format!("Account {id}"),
        email: email.to_owned(),
        secret: Credential::new(secret),
        role,
        active,
    }
}

/// The admin account used throughout the scenarios.
#[must_use]
pub fn admin() -> Account {
    account("1", "admin@teste.com", "admin123", Role::Admin, true)
}

/// The `p1` widget used throughout the scenarios.
///
/// # Panics
///
/// Never; the price literal is valid.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn widget() -> Product {
    Product {
        id: ProductId::new("p1"),
        name: "Widget".to_owned(),
        price: Price::parse("9.99").unwrap(),
        description: "A widget".to_owned(),
        image: "https://img/widget.png".to_owned(),
        category: "Tools".to_owned(),
        in_stock: true,
    }
}

/// Identity registry seeded with an admin, a user and an inactive user.
///
/// # Panics
///
/// Never; the fixture IDs are distinct.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn identity() -> IdentityRegistry {
    IdentityRegistry::from_seed(vec![
        admin(),
        account("2", "joao@teste.com", "user123", Role::User, true),
        account("3", "maria@teste.com", "user123", Role::User, false),
    ])
    .unwrap()
}

/// Catalog registry seeded with the widget.
///
/// # Panics
///
/// Never; the fixture has a single product.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn catalog() -> CatalogRegistry {
    CatalogRegistry::from_seed(vec![widget()], ProductDefaults::default()).unwrap()
}
