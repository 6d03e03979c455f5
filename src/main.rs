use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use catalog_core::{CatalogProvider, CredentialState, RemoteTable, RestTable};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{AdminCommand, ConfigCommand, ProductCommand, WatchCommand};
use config::Config;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(version)]
#[command(about = "Browse and administer the product catalog", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Log sync activity to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and edit products
    Product(ProductCommand),

    /// Administer the remote product table
    Admin(AdminCommand),

    /// Print the catalog whenever it changes
    Watch(WatchCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Product(cmd)) => {
            with_provider(&config, cmd.run()).await?;
        }
        Some(Commands::Admin(cmd)) => {
            if cmd.needs_provider() {
                with_provider(&config, cmd.run(&config)).await?;
            } else {
                cmd.run(&config).await?;
            }
        }
        Some(Commands::Watch(cmd)) => {
            with_provider(&config, cmd.run()).await?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Builds the remote table from configuration, or `None` for fallback mode.
fn connect_remote(config: &Config) -> Option<Arc<dyn RemoteTable>> {
    let credentials = config.credentials();
    match credentials.state() {
        CredentialState::Missing => {
            tracing::info!("Remote credentials not configured; using seed catalog");
            None
        }
        CredentialState::Placeholder => {
            tracing::warn!(
                "Remote credentials contain placeholder values; using seed catalog. \
                 Set SUPABASE_URL and SUPABASE_ANON_KEY to real values."
            );
            None
        }
        CredentialState::Configured => {
            match RestTable::from_credentials(&credentials, config.table.value.clone()) {
                Ok(table) => Some(Arc::new(table) as Arc<dyn RemoteTable>),
                Err(e) => {
                    tracing::warn!("Could not create remote table client: {}", e);
                    None
                }
            }
        }
    }
}

/// Mounts a provider, runs `command` in its scope, then lets background
/// writes finish before tearing the provider down.
async fn with_provider<F>(config: &Config, command: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: std::future::Future<Output = Result<(), Box<dyn std::error::Error>>>,
{
    let provider = CatalogProvider::mount(connect_remote(config)).await;

    let result = provider.scope(command).await;

    provider.settle().await;
    provider.shutdown();
    result
}
