//! Identity registry.
//!
//! Owns the account collection, authenticates credentials and tracks the
//! single current session.

use tracing::{debug, info, instrument, warn};

use vitrine_core::AccountId;

use crate::models::{Account, AccountUpdate, NewAccount, Session};
use crate::seed::{self, SeedError};

/// In-memory account registry with session tracking.
///
/// Accounts keep insertion order: seed accounts first, then created ones.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    accounts: Vec<Account>,
    session: Session,
}

impl IdentityRegistry {
    /// Create a registry from a seed collection.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::DuplicateId` if two seed accounts share an ID.
    pub fn from_seed(accounts: Vec<Account>) -> Result<Self, SeedError> {
        seed::ensure_unique_ids(&accounts)?;
        Ok(Self {
            accounts,
            session: Session::Anonymous,
        })
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Authenticate with email and secret.
    ///
    /// The first account in collection order whose email and secret match
    /// exactly and which is active becomes the session, replacing any
    /// existing one. On failure the session is left untouched.
    #[instrument(skip(self, secret))]
    pub fn authenticate(&mut self, email: &str, secret: &str) -> bool {
        let Some(account) = self
            .accounts
            .iter()
            .find(|a| a.email == email && a.secret.matches(secret) && a.active)
        else {
            warn!("Authentication rejected");
            return false;
        };

        info!(account_id = %account.id, role = %account.role, "Session started");
        self.session = Session::Authenticated(account.id.clone());
        true
    }

    /// Clear the session unconditionally.
    pub fn end_session(&mut self) {
        if let Session::Authenticated(id) = &self.session {
            info!(account_id = %id, "Session ended");
        }
        self.session = Session::Anonymous;
    }

    /// Raw session state.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The currently authenticated account, resolved against the collection.
    #[must_use]
    pub fn current_account(&self) -> Option<&Account> {
        self.session.account_id().and_then(|id| self.get(id))
    }

    /// Whether an account is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_account().is_some()
    }

    /// Whether the logged-in account is an admin. `false` when anonymous.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current_account().is_some_and(Account::is_admin)
    }

    // =========================================================================
    // Account CRUD
    // =========================================================================

    /// Create an account with a fresh ID and append it.
    ///
    /// Email uniqueness is not checked.
    #[instrument(skip_all, fields(email = %new.email))]
    pub fn create_account(&mut self, new: NewAccount) -> Account {
        let id = self.fresh_id();
        let account = Account::from_new(id, new);

        info!(account_id = %account.id, "Account created");
        self.accounts.push(account.clone());
        account
    }

    /// Merge the supplied fields onto the account with this ID.
    ///
    /// Unknown IDs are ignored. The session observes the merge because it
    /// refers to the account by ID.
    #[instrument(skip(self, update))]
    pub fn update_account(&mut self, id: &AccountId, update: AccountUpdate) {
        let Some(account) = self.accounts.iter_mut().find(|a| &a.id == id) else {
            debug!("Update ignored, account not found");
            return;
        };

        account.merge(update);
        debug!(active = account.active, "Account updated");
    }

    /// Remove the account with this ID, clearing the session if it was the
    /// session's account. Unknown IDs are ignored.
    #[instrument(skip(self))]
    pub fn delete_account(&mut self, id: &AccountId) {
        let before = self.accounts.len();
        self.accounts.retain(|a| &a.id != id);

        if self.accounts.len() == before {
            debug!("Delete ignored, account not found");
            return;
        }

        info!("Account deleted");
        if self.session.is_for(id) {
            info!("Session cleared, its account was deleted");
            self.session = Session::Anonymous;
        }
    }

    /// All accounts in insertion order.
    #[must_use]
    pub fn list_accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Point lookup by ID.
    #[must_use]
    pub fn get(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| &a.id == id)
    }

    fn fresh_id(&self) -> AccountId {
        loop {
            let id = AccountId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
