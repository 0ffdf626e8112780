//! Vitrine CLI - browse the catalog and manage the in-memory registries.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! vitrine products list
//! vitrine products show 3
//!
//! # List accounts
//! vitrine users list
//!
//! # Check credentials
//! vitrine login -e admin@teste.com -p admin123
//!
//! # Run a script of commands against one store (reads stdin without FILE)
//! vitrine run session.txt
//! ```
//!
//! State lives only as long as the process, so edits made by `run` are gone
//! when it exits.
//!
//! # Environment Variables
//!
//! - `VITRINE_ACCOUNTS_SEED`, `VITRINE_PRODUCTS_SEED`,
//!   `VITRINE_PLACEHOLDER_IMAGE`, `VITRINE_DEFAULT_CATEGORY` - see
//!   [`vitrine_storefront::config`]
//! - `RUST_LOG` - log filter (default: `vitrine_storefront=info,vitrine_cli=info`)
//! - `VITRINE_LOG_FORMAT` - set to `json` for JSON log lines

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_storefront::{Store, StoreConfig};

mod commands;

use commands::CommandError;
use commands::products::ProductQuery;
use commands::users::UserQuery;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Vitrine storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Products {
        #[command(subcommand)]
        query: ProductQuery,
    },
    /// Inspect accounts
    Users {
        #[command(subcommand)]
        query: UserQuery,
    },
    /// Check a set of credentials
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Run a script of commands against one in-memory store
    Run {
        /// Script file (reads stdin when omitted)
        file: Option<PathBuf>,
    },
}

/// Initialize tracing with `EnvFilter`, plain or JSON output.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vitrine_storefront=info,vitrine_cli=info".into());

    let json = std::env::var("VITRINE_LOG_FORMAT").is_ok_and(|format| format == "json");

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let config = StoreConfig::from_env().map_err(vitrine_storefront::StoreError::from)?;
    let mut store = Store::from_config(&config)?;

    match cli.command {
        Commands::Products { query } => commands::products::query(&store, query)?,
        Commands::Users { query } => commands::users::query(&store, query),
        Commands::Login { email, password } => commands::login(&mut store, &email, &password)?,
        Commands::Run { file } => {
            let script = match file {
                Some(path) => tokio::fs::read_to_string(path).await?,
                None => {
                    let mut script = String::new();
                    tokio::io::stdin().read_to_string(&mut script).await?;
                    script
                }
            };

            let summary = commands::script::execute(&mut store, &script);
            if summary.failed > 0 {
                return Err(CommandError::ScriptFailed {
                    failed: summary.failed,
                    total: summary.total,
                });
            }
        }
    }
    Ok(())
}
