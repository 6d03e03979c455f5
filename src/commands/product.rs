use catalog_core::{is_known_category, use_catalog, Product, ProductDraft, SyncStatus};
use clap::{Args, Subcommand};

use super::{confirm, OutputFormat};

#[derive(Args)]
pub struct ProductCommand {
    #[command(subcommand)]
    pub command: ProductSubcommand,
}

#[derive(Subcommand)]
pub enum ProductSubcommand {
    /// List products
    List {
        /// Only show products in this category
        #[arg(long)]
        category: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a product's details
    Show {
        /// Product ID
        id: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the known categories
    Categories,

    /// Add a new product
    Add {
        /// Name of the product
        name: String,

        /// Category (see `product categories`)
        #[arg(long)]
        category: String,

        /// Description
        #[arg(long, default_value = "")]
        description: String,

        /// Primary image URL
        #[arg(long, default_value = "")]
        image: String,

        /// Gallery image URLs (can be repeated)
        #[arg(long = "images", value_name = "URL")]
        images: Vec<String>,

        /// Feature bullet (can be repeated)
        #[arg(long = "feature", value_name = "TEXT")]
        features: Vec<String>,
    },

    /// Update an existing product
    Update {
        /// Product ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New primary image URL
        #[arg(long)]
        image: Option<String>,

        /// Replace the gallery images (can be repeated)
        #[arg(long = "images", value_name = "URL")]
        images: Vec<String>,

        /// Replace the feature list (can be repeated)
        #[arg(long = "feature", value_name = "TEXT")]
        features: Vec<String>,
    },

    /// Delete a product
    Delete {
        /// Product ID
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Replace all products with the initial product set
    Reset {
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

impl ProductCommand {
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let catalog = use_catalog();

        match &self.command {
            ProductSubcommand::List { category, format } => {
                let products = match category {
                    Some(category) => catalog.products_by_category(category),
                    None => catalog.products(),
                };

                if products.is_empty() {
                    println!("No products found");
                    return Ok(());
                }

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&products)?);
                    }
                    OutputFormat::Text => {
                        println!("{:<14}  {:<36}  {:<24}  SYNC", "ID", "NAME", "CATEGORY");
                        println!("{}", "-".repeat(90));
                        for product in &products {
                            let status = catalog
                                .status(&product.id)
                                .map(|s| s.to_string())
                                .unwrap_or_default();
                            println!(
                                "{:<14}  {:<36}  {:<24}  {}",
                                product.id,
                                truncate(&product.name, 36),
                                truncate(&product.category, 24),
                                status
                            );
                        }
                        println!("\nTotal: {} product(s) [{} mode]", products.len(), catalog.mode());
                    }
                }
                Ok(())
            }

            ProductSubcommand::Show { id, format } => {
                let product = catalog
                    .get_product(id)
                    .ok_or_else(|| format!("Product not found: {}", id))?;

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&product)?);
                    }
                    OutputFormat::Text => {
                        print!("{}", product);
                        if let Some(status) = catalog.status(id) {
                            println!("Sync: {}", status);
                        }
                    }
                }
                Ok(())
            }

            ProductSubcommand::Categories => {
                for category in catalog.categories() {
                    let count = catalog.products_by_category(category).len();
                    println!("{:<36}  {}", category, count);
                }
                Ok(())
            }

            ProductSubcommand::Add {
                name,
                category,
                description,
                image,
                images,
                features,
            } => {
                if name.trim().is_empty() {
                    return Err("Product name cannot be empty".into());
                }
                warn_unknown_category(category);

                let mut draft = ProductDraft::new(name.trim(), category.as_str())
                    .with_description(description.as_str())
                    .with_image(image.as_str())
                    .with_features(features.clone());
                if !images.is_empty() {
                    draft = draft.with_images(images.clone());
                }

                let product = catalog
                    .add_product(draft)
                    .ok_or("Catalog is shut down; product not added")?;
                println!("Added product:");
                print!("{}", product);
                Ok(())
            }

            ProductSubcommand::Update {
                id,
                name,
                category,
                description,
                image,
                images,
                features,
            } => {
                let has_updates = name.is_some()
                    || category.is_some()
                    || description.is_some()
                    || image.is_some()
                    || !images.is_empty()
                    || !features.is_empty();

                if !has_updates {
                    return Err("Nothing to update. Provide at least one option.".into());
                }

                let existing = catalog
                    .get_product(id)
                    .ok_or_else(|| format!("Product not found: {}", id))?;
                let mut draft = existing.to_draft();

                if let Some(name) = name {
                    draft.name = name.clone();
                }
                if let Some(category) = category {
                    warn_unknown_category(category);
                    draft.category = category.clone();
                }
                if let Some(description) = description {
                    draft.description = description.clone();
                }
                if let Some(image) = image {
                    draft.image = image.clone();
                }
                if !images.is_empty() {
                    draft.images = Some(images.clone());
                }
                if !features.is_empty() {
                    draft.features = features.clone();
                }

                let updated = catalog
                    .update_product(id, draft)
                    .ok_or_else(|| format!("Product not found: {}", id))?;
                println!("Updated product:");
                print!("{}", updated);
                Ok(())
            }

            ProductSubcommand::Delete { id, force } => {
                let product = catalog
                    .get_product(id)
                    .ok_or_else(|| format!("Product not found: {}", id))?;

                if !force && !confirm(&format!("Delete product '{}'?", product.name))? {
                    println!("Deletion cancelled.");
                    return Ok(());
                }

                catalog.delete_product(id);
                println!("Deleted product: {}", product.name);
                Ok(())
            }

            ProductSubcommand::Reset { force } => {
                if !force
                    && !confirm("Are you sure you want to reset all products to their initial state?")?
                {
                    println!("Reset cancelled.");
                    return Ok(());
                }

                catalog.reset_to_seed();
                println!("Products reset to the initial set ({} products).", catalog.products().len());
                Ok(())
            }
        }
    }
}

fn warn_unknown_category(category: &str) {
    if !is_known_category(category) {
        eprintln!(
            "Warning: '{}' is not a known category. Run 'catalog product categories' to list them.",
            category
        );
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let cut: String = text.chars().take(width - 3).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// One-line summary used by `watch`.
pub(crate) fn summary_line(product: &Product, status: Option<SyncStatus>) -> String {
    match status {
        Some(status) => format!("  {:<14}  {}  ({})", product.id, product.name, status),
        None => format!("  {:<14}  {}", product.id, product.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer name", 10), "a much ...");
    }

    #[test]
    fn test_summary_line() {
        let product = ProductDraft::new("Turk Razor", "Razors").into_product("4");
        let line = summary_line(&product, Some(SyncStatus::Pending));
        assert!(line.contains("Turk Razor"));
        assert!(line.ends_with("(pending)"));
    }
}
