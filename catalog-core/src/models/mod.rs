mod catalog;
mod category;
mod product;
mod sync_status;

pub use catalog::{Catalog, CatalogSource};
pub use category::{is_known_category, CATEGORIES};
pub use product::{Product, ProductDraft, PLACEHOLDER_IMAGE};
pub use sync_status::SyncStatus;
