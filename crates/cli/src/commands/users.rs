//! Account management commands.
//!
//! # Usage
//!
//! ```bash
//! vitrine users list
//! ```
//!
//! Inside a `vitrine run` script, an admin session may also use
//! `users create`, `users update` and `users delete`.

use clap::{Args, Subcommand};
use tracing::info;

use vitrine_core::{AccountId, Role};
use vitrine_storefront::Store;
use vitrine_storefront::forms::AccountForm;
use vitrine_storefront::models::Account;

use super::{CommandError, require_admin};

/// Read-only account commands.
#[derive(Debug, Subcommand)]
pub enum UserQuery {
    /// List all accounts (passwords are never shown)
    List,
}

/// Account commands available in scripts.
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all accounts
    List,
    /// Create an account (admin)
    Create(UserFields),
    /// Update an account (admin)
    Update {
        /// Account ID
        id: String,
        #[command(flatten)]
        edits: UserEdits,
    },
    /// Delete an account (admin)
    Delete {
        /// Account ID
        id: String,
    },
}

/// Fields for a new account.
#[derive(Debug, Args)]
pub struct UserFields {
    #[arg(short, long)]
    name: String,
    #[arg(short, long)]
    email: String,
    #[arg(short, long)]
    password: String,
    /// Account role (`admin`, `user`)
    #[arg(short, long, default_value = "user")]
    role: Role,
    /// Create the account deactivated
    #[arg(long)]
    inactive: bool,
}

/// Fields to change on an existing account; omitted ones keep their value.
#[derive(Debug, Args)]
pub struct UserEdits {
    #[arg(short, long)]
    name: Option<String>,
    #[arg(short, long)]
    email: Option<String>,
    #[arg(short, long)]
    password: Option<String>,
    #[arg(short, long)]
    role: Option<Role>,
    #[arg(long)]
    active: Option<bool>,
}

impl From<UserFields> for AccountForm {
    fn from(fields: UserFields) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            secret: fields.password,
            role: fields.role,
            active: !fields.inactive,
        }
    }
}

impl UserEdits {
    fn apply(self, form: &mut AccountForm) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(email) = self.email {
            form.email = email;
        }
        if let Some(password) = self.password {
            form.secret = password;
        }
        if let Some(role) = self.role {
            form.role = role;
        }
        if let Some(active) = self.active {
            form.active = active;
        }
    }
}

/// Run a read-only account command.
pub fn query(store: &Store, query: UserQuery) {
    match query {
        UserQuery::List => list(store),
    }
}

/// Run an account script command.
pub fn execute(store: &mut Store, command: UserCommand) -> Result<(), CommandError> {
    match command {
        UserCommand::List => {
            list(store);
            Ok(())
        }
        UserCommand::Create(fields) => create(store, fields.into()).map(|_| ()),
        UserCommand::Update { id, edits } => update(store, &id, edits),
        UserCommand::Delete { id } => delete(store, &id),
    }
}

/// Log every account, one per line.
pub fn list(store: &Store) {
    let accounts = store.identity().list_accounts();
    info!("{} account(s)", accounts.len());
    for account in accounts {
        info!("  {}", summary(account));
    }
}

/// Validate a form and create the account.
pub fn create(store: &mut Store, form: AccountForm) -> Result<Account, CommandError> {
    require_admin(store)?;
    let new = form.validate()?;
    let account = store.identity_mut().create_account(new);
    info!("Created {}", summary(&account));
    Ok(account)
}

/// Prefill a form from the account, apply the edits, validate and update.
pub fn update(store: &mut Store, id: &str, edits: UserEdits) -> Result<(), CommandError> {
    require_admin(store)?;
    let id = AccountId::new(id);
    let existing = store
        .identity()
        .get(&id)
        .ok_or_else(|| CommandError::NotFound {
            kind: "Account",
            id: id.to_string(),
        })?;

    let mut form = AccountForm::from_account(existing);
    edits.apply(&mut form);
    let update = form.into_update()?;

    store.identity_mut().update_account(&id, update);
    if let Some(account) = store.identity().get(&id) {
        info!("Updated {}", summary(account));
    }
    Ok(())
}

/// Delete an account. Deleting your own account ends the session.
pub fn delete(store: &mut Store, id: &str) -> Result<(), CommandError> {
    require_admin(store)?;
    store.identity_mut().delete_account(&AccountId::new(id));
    info!("Deleted account {id}");
    if !store.identity().is_authenticated() {
        info!("Session ended");
    }
    Ok(())
}

fn summary(account: &Account) -> String {
    format!(
        "[{}] {} <{}> {}{}",
        account.id,
        account.name,
        account.email,
        account.role,
        if account.active { "" } else { " (inactive)" }
    )
}
