//! Business logic services.
//!
//! Each registry exclusively owns its collection. Callers mutate entities
//! only through these methods.

pub mod catalog;
pub mod identity;

pub use catalog::CatalogRegistry;
pub use identity::IdentityRegistry;
