use catalog_core::{use_catalog, Catalog};
use clap::Args;

use super::product::summary_line;
use super::OutputFormat;

#[derive(Args)]
pub struct WatchCommand {
    /// Print every product on each change instead of a summary
    #[arg(long)]
    pub full: bool,

    /// Output format (json prints one snapshot per line)
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl WatchCommand {
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let catalog = use_catalog();
        let mut updates = catalog.watch();

        if matches!(self.format, OutputFormat::Text) {
            println!("Watching catalog ({} mode). Press Ctrl-C to stop.", catalog.mode());
        }
        let initial = updates.borrow_and_update().clone();
        self.print(&initial)?;

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    if matches!(self.format, OutputFormat::Text) {
                        println!("\nStopped.");
                    }
                    break;
                }
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = updates.borrow_and_update().clone();
                    self.print(&snapshot)?;
                }
            }
        }

        Ok(())
    }

    fn print(&self, snapshot: &Catalog) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(snapshot)?);
            }
            OutputFormat::Text => {
                println!(
                    "[rev {}] {} product(s) from {:?}, {} unconfirmed{}",
                    snapshot.revision(),
                    snapshot.len(),
                    snapshot.source(),
                    snapshot.unconfirmed(),
                    if snapshot.is_loading() { " (loading)" } else { "" }
                );
                if self.full {
                    for product in snapshot.products() {
                        println!("{}", summary_line(product, snapshot.status(&product.id)));
                    }
                }
            }
        }
        Ok(())
    }
}
