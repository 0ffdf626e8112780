//! Script runner.
//!
//! Executes commands one per line against a single in-memory [`Store`], so
//! logins and edits carry over from line to line.
//!
//! # Example
//!
//! ```text
//! # comments and blank lines are skipped
//! login -e admin@teste.com -p admin123
//! products create --name "Caneca" --price 25.50 --description "Caneca de cerâmica"
//! products update 3 --in-stock false
//! users update 2 --active false
//! logout
//! ```
//!
//! A failing line is logged and the script continues.

use clap::{Parser, Subcommand};
use tracing::{error, info};

use vitrine_storefront::Store;

use super::products::{self, ProductCommand};
use super::users::{self, UserCommand};
use super::{CommandError, login, whoami};

#[derive(Debug, Parser)]
#[command(no_binary_name = true)]
struct ScriptLine {
    #[command(subcommand)]
    command: ScriptCommand,
}

#[derive(Debug, Subcommand)]
enum ScriptCommand {
    /// Authenticate, replacing any current session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Show the current session
    Whoami,
    /// Catalog commands
    Products {
        #[command(subcommand)]
        action: ProductCommand,
    },
    /// Account commands
    Users {
        #[command(subcommand)]
        action: UserCommand,
    },
}

/// Outcome of a script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Commands attempted (comments and blank lines excluded).
    pub total: usize,
    /// Commands that failed.
    pub failed: usize,
}

/// Execute every command in `script`.
pub fn execute(store: &mut Store, script: &str) -> ScriptSummary {
    let mut summary = ScriptSummary {
        total: 0,
        failed: 0,
    };

    for (index, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        summary.total += 1;
        if let Err(e) = execute_line(store, line) {
            error!(line = index + 1, "{e}");
            summary.failed += 1;
        }
    }

    info!(
        total = summary.total,
        failed = summary.failed,
        "Script finished"
    );
    summary
}

fn execute_line(store: &mut Store, line: &str) -> Result<(), CommandError> {
    let tokens = split_line(line)?;
    let parsed =
        ScriptLine::try_parse_from(tokens).map_err(|e| CommandError::Parse(e.to_string()))?;

    match parsed.command {
        ScriptCommand::Login { email, password } => login(store, &email, &password),
        ScriptCommand::Logout => {
            store.identity_mut().end_session();
            info!("Logged out");
            Ok(())
        }
        ScriptCommand::Whoami => {
            whoami(store);
            Ok(())
        }
        ScriptCommand::Products { action } => products::execute(store, action),
        ScriptCommand::Users { action } => users::execute(store, action),
    }
}

/// Split a line on whitespace, keeping double-quoted runs together.
fn split_line(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(CommandError::Parse("unterminated quote".to_owned()));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use vitrine_core::{AccountId, ProductId};
    use vitrine_storefront::StoreConfig;

    use super::*;

    fn store() -> Store {
        Store::from_config(&StoreConfig::default()).unwrap()
    }

    #[test]
    fn test_split_line_quotes() {
        let tokens = split_line(r#"products create --name "Caneca Azul" --price 10"#).unwrap();
        assert_eq!(
            tokens,
            ["products", "create", "--name", "Caneca Azul", "--price", "10"]
        );
    }

    #[test]
    fn test_split_line_empty_quotes_is_token() {
        let tokens = split_line(r#"products update 1 --image """#).unwrap();
        assert_eq!(tokens, ["products", "update", "1", "--image", ""]);
    }

    #[test]
    fn test_split_line_unterminated() {
        assert!(matches!(
            split_line(r#"login -e "admin"#),
            Err(CommandError::Parse(_))
        ));
    }

    #[test]
    fn test_mutations_require_admin() {
        let mut store = store();
        let summary = execute(
            &mut store,
            "products delete 1\n\
             login -e joao@teste.com -p user123\n\
             products delete 1\n",
        );

        assert_eq!(summary, ScriptSummary { total: 3, failed: 2 });
        assert!(
            store
                .catalog()
                .get_product_by_id(&ProductId::new("1"))
                .is_some()
        );
    }

    #[test]
    fn test_admin_session_persists_across_lines() {
        let mut store = store();
        let before = store.catalog().list_products().len();
        let summary = execute(
            &mut store,
            "# set up\n\
             login -e admin@teste.com -p admin123\n\
             \n\
             products create --name \"Caneca\" --price 25.50 --description \"Caneca de cerâmica\"\n\
             products update 3 --in-stock false\n\
             users update 2 --active false\n",
        );

        assert_eq!(summary, ScriptSummary { total: 4, failed: 0 });
        let catalog = store.catalog();
        assert_eq!(catalog.list_products().len(), before + 1);
        let created = catalog.list_products().last().unwrap();
        assert_eq!(created.category, "Geral");
        assert!(
            !catalog
                .get_product_by_id(&ProductId::new("3"))
                .unwrap()
                .in_stock
        );
        assert!(!store.identity().get(&AccountId::new("2")).unwrap().active);
    }

    #[test]
    fn test_invalid_form_counts_as_failure() {
        let mut store = store();
        let summary = execute(
            &mut store,
            "login -e admin@teste.com -p admin123\n\
             products create --name X --price 0 --description Y\n\
             products update missing --name Z\n",
        );
        assert_eq!(summary, ScriptSummary { total: 3, failed: 2 });
    }

    #[test]
    fn test_deleting_self_ends_session() {
        let mut store = store();
        let summary = execute(
            &mut store,
            "login -e admin@teste.com -p admin123\n\
             users delete 1\n\
             users list\n\
             products delete 2\n",
        );

        assert_eq!(summary, ScriptSummary { total: 4, failed: 1 });
        assert!(!store.identity().is_authenticated());
        assert!(store.identity().get(&AccountId::new("1")).is_none());
    }

    #[test]
    fn test_missing_product_and_bad_login_fail() {
        let mut store = store();
        let summary = execute(
            &mut store,
            "products show missing\n\
             login -e admin@teste.com -p wrong\n\
             products show 1\n",
        );

        assert_eq!(summary, ScriptSummary { total: 3, failed: 2 });
        assert!(!store.identity().is_authenticated());
    }

    #[test]
    fn test_show_and_login_errors() {
        let mut store = store();
        assert!(matches!(
            products::show(&store, "missing"),
            Err(CommandError::NotFound { kind: "Product", .. })
        ));
        assert!(matches!(
            login(&mut store, "admin@teste.com", "wrong"),
            Err(CommandError::LoginFailed)
        ));
    }

    #[test]
    fn test_unknown_command_fails() {
        let mut store = store();
        let summary = execute(&mut store, "fly --to moon\n");
        assert_eq!(summary, ScriptSummary { total: 1, failed: 1 });
    }
}
