//! Integration tests for building a store from seed files.

#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use vitrine_core::{AccountId, ProductId, Role};
use vitrine_storefront::models::ProductDefaults;
use vitrine_storefront::seed::{self, SeedError};
use vitrine_storefront::{Store, StoreConfig, StoreError};

fn seed_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn config(accounts: Option<PathBuf>, products: Option<PathBuf>) -> StoreConfig {
    StoreConfig {
        accounts_seed: accounts,
        products_seed: products,
        ..Default::default()
    }
}

#[test]
fn test_builtin_seed_store() {
    let mut store = Store::from_config(&StoreConfig::default()).unwrap();

    assert_eq!(store.identity().list_accounts().len(), 3);
    assert_eq!(store.catalog().list_products().len(), 5);

    assert!(store.identity_mut().authenticate("admin@teste.com", "admin123"));
    assert!(store.identity().is_admin());
    assert!(!store.identity_mut().authenticate("maria@teste.com", "user123"));
}

#[test]
fn test_store_from_seed_files() {
    let accounts = seed_file(
        r#"[
            {"id": "a1", "name": "Ana", "email": "ana@loja.com",
             "password": "segredo", "profile": "admin", "active": true},
            {"id": "a2", "name": "Bia", "email": "bia@loja.com",
             "secret": "outro", "role": "user", "active": true}
        ]"#,
    );
    let products = seed_file(
        r#"[
            {"id": "x", "name": "Vaso", "price": 35.9, "description": "Vaso de barro",
             "image": "https://img/vaso.png", "category": "Casa", "inStock": false}
        ]"#,
    );

    let mut store = Store::from_config(&config(
        Some(accounts.path().to_path_buf()),
        Some(products.path().to_path_buf()),
    ))
    .unwrap();

    let ana = store.identity().get(&AccountId::new("a1")).unwrap();
    assert_eq!(ana.role, Role::Admin);
    assert!(store.identity_mut().authenticate("bia@loja.com", "outro"));
    assert!(!store.identity().is_admin());

    let vaso = store.catalog().get_product_by_id(&ProductId::new("x")).unwrap();
    assert_eq!(vaso.price.to_string(), "R$ 35.90");
    assert!(!vaso.in_stock);
}

#[test]
fn test_empty_seed_is_valid() {
    let accounts = seed_file("[]");
    let mut store = Store::from_config(&config(Some(accounts.path().to_path_buf()), None)).unwrap();

    assert!(store.identity().list_accounts().is_empty());
    assert!(!store.identity_mut().authenticate("admin@teste.com", "admin123"));
}

#[test]
fn test_missing_seed_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("accounts.json");

    let result = Store::from_config(&config(Some(missing), None));
    assert!(matches!(
        result,
        Err(StoreError::Seed(SeedError::Io { .. }))
    ));
}

#[test]
fn test_malformed_seed_is_fatal() {
    let products = seed_file(r#"[{"id": "x", "name": "Vaso"}]"#);

    let result = Store::from_config(&config(None, Some(products.path().to_path_buf())));
    assert!(matches!(
        result,
        Err(StoreError::Seed(SeedError::Parse { kind: "product", .. }))
    ));
}

#[test]
fn test_negative_price_seed_is_fatal() {
    let products = seed_file(
        r#"[{"id": "x", "name": "Vaso", "price": -1, "description": "d",
             "image": "i", "category": "c", "inStock": true}]"#,
    );
    assert!(seed::load_products(Some(products.path())).is_err());
}

#[test]
fn test_duplicate_seed_ids_are_fatal() {
    let accounts = seed_file(
        r#"[
            {"id": "1", "name": "A", "email": "a@x", "secret": "a", "role": "user", "active": true},
            {"id": "1", "name": "B", "email": "b@x", "secret": "b", "role": "user", "active": true}
        ]"#,
    );

    let result = Store::from_config(&config(Some(accounts.path().to_path_buf()), None));
    assert!(matches!(
        result,
        Err(StoreError::Seed(SeedError::DuplicateId { kind: "account", .. }))
    ));
}

#[test]
fn test_configured_defaults_reach_catalog() {
    let config = StoreConfig {
        product_defaults: ProductDefaults {
            placeholder_image: "https://cdn/none.png".to_owned(),
            category: "Outros".to_owned(),
        },
        ..Default::default()
    };

    let store = Store::from_config(&config).unwrap();
    assert_eq!(store.catalog().defaults(), &config.product_defaults);
}
