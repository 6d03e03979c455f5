//! The remote product table.
//!
//! The hosted data service is treated as a row-oriented table with a change
//! feed. [`RemoteTable`] is the seam the provider talks to:
//!
//! - [`RestTable`] speaks PostgREST over HTTP and opens the realtime
//!   WebSocket for change notifications.
//! - [`MemoryTable`] keeps rows in process and can be told to fail, for
//!   tests and offline experiments.

mod error;
mod feed;
mod memory;
pub mod realtime;
mod rest;

use async_trait::async_trait;

use crate::models::Product;

pub use error::RemoteError;
pub use feed::{ChangeFeed, ChangeKind, TableChange};
pub use memory::{MemoryTable, TableOp};
pub use rest::RestTable;

/// Default name of the remote product table.
pub const DEFAULT_TABLE: &str = "products";

/// Row operations and change notifications on one remote table.
#[async_trait]
pub trait RemoteTable: Send + Sync {
    /// Name of the table, for logging.
    fn name(&self) -> &str;

    /// Fetches every row.
    async fn select_all(&self) -> Result<Vec<Product>, RemoteError>;

    /// Fetches the row with `id`.
    async fn select_by_id(&self, id: &str) -> Result<Product, RemoteError>;

    async fn insert(&self, rows: &[Product]) -> Result<(), RemoteError>;

    /// Overwrites the row whose id matches `row.id`.
    async fn update(&self, row: &Product) -> Result<(), RemoteError>;

    async fn delete(&self, id: &str) -> Result<(), RemoteError>;

    async fn delete_all(&self) -> Result<(), RemoteError>;

    async fn count(&self) -> Result<usize, RemoteError>;

    /// Opens a change feed that yields an event for every insert, update
    /// or delete on the table.
    async fn subscribe(&self) -> Result<ChangeFeed, RemoteError>;
}
