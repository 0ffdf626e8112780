//! Account domain types.

use serde::Deserialize;

use vitrine_core::{AccountId, Credential, Role};

/// A storefront account (domain type).
///
/// Seeds may spell `secret` as `password` and `role` as `profile`. Accounts
/// are only ever read from seeds, never written out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    /// Unique account ID, immutable once assigned.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Login lookup key. Not guaranteed unique.
    pub email: String,
    /// Plaintext credential.
    #[serde(alias = "password")]
    pub secret: Credential,
    /// Permission level.
    #[serde(alias = "profile")]
    pub role: Role,
    /// Inactive accounts cannot authenticate.
    pub active: bool,
}

impl Account {
    /// Build an account from creation fields and an assigned ID.
    #[must_use]
    pub fn from_new(id: AccountId, new: NewAccount) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            secret: new.secret,
            role: new.role,
            active: new.active,
        }
    }

    /// Merge the supplied fields onto this account. The ID never changes.
    pub fn merge(&mut self, update: AccountUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(secret) = update.secret {
            self.secret = secret;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
    }

    /// Whether this account has the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Fields for creating an account. The registry assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub secret: Credential,
    pub role: Role,
    pub active: bool,
}

/// Partial account update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub secret: Option<Credential>,
    pub role: Option<Role>,
    pub active: Option<bool>,
}
