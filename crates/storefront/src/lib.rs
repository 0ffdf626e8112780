//! Vitrine Storefront library.
//!
//! In-memory registries behind the storefront demo:
//!
//! - [`services::IdentityRegistry`] - accounts, authentication, current session
//! - [`services::CatalogRegistry`] - products and point lookup
//!
//! Both are seeded once at startup ([`seed`]) and bundled in a
//! [`state::Store`] that callers pass around explicitly. Nothing is persisted.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod seed;
pub mod services;
pub mod state;

pub use config::StoreConfig;
pub use error::StoreError;
pub use state::Store;
