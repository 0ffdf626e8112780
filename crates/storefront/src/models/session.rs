//! Session state.
//!
//! The session holds the ID of the authenticated account rather than a copy,
//! so every read resolves against the live collection.

use vitrine_core::AccountId;

/// Which account, if any, is currently authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// No account is logged in.
    #[default]
    Anonymous,
    /// The account with this ID is logged in.
    Authenticated(AccountId),
}

impl Session {
    /// ID of the authenticated account, if any.
    #[must_use]
    pub const fn account_id(&self) -> Option<&AccountId> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(id) => Some(id),
        }
    }

    /// Whether the session belongs to the given account.
    #[must_use]
    pub fn is_for(&self, id: &AccountId) -> bool {
        self.account_id() == Some(id)
    }
}
