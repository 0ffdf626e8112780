//! Command implementations.

pub mod products;
pub mod script;
pub mod users;

use thiserror::Error;

use vitrine_storefront::forms::FormError;
use vitrine_storefront::{Store, StoreError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The store could not be built.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Form input was rejected.
    #[error("Invalid input: {0}")]
    Form(#[from] FormError),

    /// The referenced entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The command needs an admin session.
    #[error("Admin session required")]
    AdminRequired,

    /// Credentials were rejected.
    #[error("Email or password incorrect")]
    LoginFailed,

    /// A script line could not be parsed.
    #[error("Could not parse command: {0}")]
    Parse(String),

    /// The script could not be read.
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    /// Some script lines failed.
    #[error("{failed} of {total} script commands failed")]
    ScriptFailed { failed: usize, total: usize },
}

/// Fail unless the current session belongs to an admin.
pub fn require_admin(store: &Store) -> Result<(), CommandError> {
    if store.identity().is_admin() {
        Ok(())
    } else {
        Err(CommandError::AdminRequired)
    }
}

/// Authenticate and log the resulting session.
pub fn login(store: &mut Store, email: &str, password: &str) -> Result<(), CommandError> {
    if !store.identity_mut().authenticate(email, password) {
        return Err(CommandError::LoginFailed);
    }
    whoami(store);
    Ok(())
}

/// Log the current session.
pub fn whoami(store: &Store) {
    match store.identity().current_account() {
        Some(account) => tracing::info!(
            "Logged in as {} <{}> (id: {}, role: {}, active: {})",
            account.name,
            account.email,
            account.id,
            account.role,
            account.active
        ),
        None => tracing::info!("Not logged in"),
    }
}
