//! Catalog Core Library
//!
//! Product models, the embedded seed catalog, the remote table binding and
//! the provider that keeps a local catalog in step with it.

pub mod credentials;
pub mod error;
pub mod models;
pub mod provider;
pub mod remote;
pub mod seed;

pub use credentials::{CredentialState, RemoteCredentials};
pub use error::CatalogError;
pub use models::{
    is_known_category, Catalog, CatalogSource, Product, ProductDraft, SyncStatus, CATEGORIES,
    PLACEHOLDER_IMAGE,
};
pub use provider::{try_use_catalog, use_catalog, CatalogProvider, SyncMode};
pub use remote::{
    ChangeFeed, ChangeKind, MemoryTable, RemoteError, RemoteTable, RestTable, TableChange,
    TableOp, DEFAULT_TABLE,
};
pub use seed::{seed_len, seed_products};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
