//! Domain models for the storefront registries.

pub mod account;
pub mod product;
pub mod session;

pub use account::{Account, AccountUpdate, NewAccount};
pub use product::{NewProduct, Product, ProductDefaults, ProductUpdate};
pub use session::Session;
