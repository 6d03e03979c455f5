use catalog_core::{use_catalog, CredentialState};
use clap::{Args, Subcommand};

use super::confirm;
use crate::config::Config;

#[derive(Args)]
pub struct AdminCommand {
    #[command(subcommand)]
    pub command: AdminSubcommand,
}

#[derive(Subcommand)]
pub enum AdminSubcommand {
    /// Replace every row in the remote table with the initial product set
    ForceSync {
        /// Skip confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Show the remote connection status
    Status,
}

impl AdminCommand {
    /// Whether the command runs against a mounted catalog.
    pub fn needs_provider(&self) -> bool {
        matches!(self.command, AdminSubcommand::ForceSync { .. })
    }

    pub async fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            AdminSubcommand::ForceSync { yes } => {
                if !yes
                    && !confirm(
                        "This will replace ALL products in the database with the initial product set. Continue?",
                    )?
                {
                    println!("Force sync cancelled.");
                    return Ok(());
                }

                println!("Syncing products...");
                if use_catalog().force_resync().await {
                    println!("All products have been successfully pushed to the remote table!");
                    Ok(())
                } else {
                    Err("Failed to push products to the remote table. Check the log for details."
                        .into())
                }
            }

            AdminSubcommand::Status => {
                let credentials = config.credentials();
                let state = credentials.state();

                println!("Remote Status");
                println!("=============\n");
                println!(
                    "URL: {}",
                    credentials.endpoint().unwrap_or_else(|| "(not set)".to_string())
                );
                println!(
                    "Key: {}",
                    credentials.masked_key().unwrap_or_else(|| "(not set)".to_string())
                );
                println!("Table: {}", config.table.value);
                println!("Credentials: {}", state);

                if state != CredentialState::Configured {
                    println!("\nRunning in fallback mode with the built-in product set.");
                    return Ok(());
                }

                let Some(remote) = crate::connect_remote(config) else {
                    return Err("Could not create remote table client".into());
                };
                match remote.count().await {
                    Ok(count) => {
                        println!("Connection: ok");
                        println!("Rows: {}", count);
                        Ok(())
                    }
                    Err(e) => {
                        println!("Connection: failed");
                        Err(format!("Remote table unreachable: {}", e).into())
                    }
                }
            }
        }
    }
}
