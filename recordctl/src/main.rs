//! recordctl - Application entry point
//!
//! CLI-based entry point that opens a repository on the configured backend
//! and dispatches to a command.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{AppResult, Backend, StoreConfig};
use domain::{Document, User, USERS_TABLE};
use record_store::open_repository;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let Cli {
        verbose,
        backend,
        table,
        command,
    } = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(verbose);

    // Execute command
    if let Err(e) = run(backend, &table, command).await {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(backend: Option<Backend>, table: &str, command: Commands) -> AppResult<()> {
    // Load configuration, flags win over environment
    let mut config = StoreConfig::from_env()?;
    if let Some(backend) = backend {
        config = config.with_backend(backend);
    }
    tracing::debug!(?config, "Configuration loaded");
    let config = &config;

    match command {
        Commands::Demo => {
            let users = open_repository::<User>(config, USERS_TABLE).await?;
            let found = commands::demo::execute(users.as_ref()).await?;
            println!("{}", serde_json::to_string_pretty(&found)?);
        }
        Commands::Record(command) => {
            let repo = open_repository::<Document>(config, table).await?;
            if let Some(output) = commands::record::execute(repo.as_ref(), command).await? {
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
    }

    Ok(())
}

/// Initialize tracing subscriber on stderr so stdout carries only records
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
