use clap::{Args, Subcommand};
use serde_json::json;

use super::OutputFormat;
use crate::config::Config;

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                let credentials = config.credentials();
                let masked_key = credentials.masked_key();

                match format {
                    OutputFormat::Json => {
                        let value = json!({
                            "config_file": config.config_file,
                            "remote_url": config.remote_url,
                            "anon_key": {
                                "value": masked_key,
                                "source": config.anon_key.source,
                            },
                            "table": config.table,
                            "credentials": credentials.state().to_string(),
                        });
                        println!("{}", serde_json::to_string_pretty(&value)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");

                        if let Some(path) = &config.config_file {
                            println!("Config file: {}", path.display());
                        } else {
                            println!(
                                "Config file: {} (not found)",
                                Config::default_config_path().display()
                            );
                        }
                        println!();

                        println!(
                            "remote.url: {}",
                            config.remote_url.value.as_deref().unwrap_or("(not set)")
                        );
                        println!("  source: {}", config.remote_url.source);
                        println!();

                        println!(
                            "remote.anon_key: {}",
                            masked_key.as_deref().unwrap_or("(not set)")
                        );
                        println!("  source: {}", config.anon_key.source);
                        println!();

                        println!("table: {}", config.table.value);
                        println!("  source: {}", config.table.source);
                        println!();

                        println!("credentials: {}", credentials.state());
                    }
                }
                Ok(())
            }
        }
    }
}
