//! Optimistic mutations.
//!
//! Each mutator changes the local snapshot before returning and hands the
//! remote write to a background task.

use chrono::Utc;
use std::sync::Arc;

use super::CatalogProvider;
use crate::models::{Catalog, CatalogSource, Product, ProductDraft, SyncStatus};
use crate::remote::{RemoteError, RemoteTable};
use crate::seed::seed_products;

/// Picks a timestamp id (Unix milliseconds) not used in `catalog`.
fn next_id(catalog: &Catalog) -> String {
    let mut millis = Utc::now().timestamp_millis();
    while catalog.contains(&millis.to_string()) {
        millis += 1;
    }
    millis.to_string()
}

impl CatalogProvider {
    /// Adds a product with a freshly generated id and returns it, or `None`
    /// once the provider is shut down.
    pub fn add_product(&self, draft: ProductDraft) -> Option<Product> {
        let status = self.write_status();
        let mut product = draft.into_product(String::new());

        let applied = self.modify(|catalog| {
            product.id = next_id(catalog);
            catalog.push(product.clone(), status);
        });
        if !applied {
            tracing::warn!("Catalog provider is shut down; product '{}' not added", product.name);
            return None;
        }

        match self.remote() {
            Some(remote) => {
                let provider = self.clone();
                let row = product.clone();
                self.spawn(async move { provider.push_insert(remote, row).await });
            }
            None => {
                tracing::warn!("No remote table configured - product will not be persisted");
            }
        }

        Some(product)
    }

    async fn push_insert(&self, remote: Arc<dyn RemoteTable>, product: Product) {
        if let Err(e) = remote.insert(std::slice::from_ref(&product)).await {
            tracing::error!("Error adding product to remote table: {}", e);
            tracing::warn!(
                "Product {} only exists in local state and will not be visible to other users",
                product.id
            );
            self.modify(|c| c.mark(&product.id, SyncStatus::LocalOnly));
            return;
        }

        tracing::info!("Product {} added to remote table", product.id);
        self.confirm_row(remote.as_ref(), &product.id).await;
    }

    /// Replaces the product with `id`. Returns the stored product, or
    /// `None` when no local product has that id. The remote update is
    /// attempted either way.
    pub fn update_product(&self, id: &str, draft: ProductDraft) -> Option<Product> {
        let status = self.write_status();
        let product = draft.into_product(id);

        let mut replaced = false;
        if !self.modify(|catalog| replaced = catalog.replace(product.clone(), status)) {
            tracing::warn!("Catalog provider is shut down; product {} not updated", id);
            return None;
        }
        if !replaced {
            tracing::warn!("Product {} not found in local state", id);
        }

        match self.remote() {
            Some(remote) => {
                let provider = self.clone();
                let row = product.clone();
                self.spawn(async move { provider.push_update(remote, row).await });
            }
            None => {
                tracing::warn!("No remote table configured - product update will not be persisted");
            }
        }

        replaced.then_some(product)
    }

    async fn push_update(&self, remote: Arc<dyn RemoteTable>, product: Product) {
        if let Err(e) = remote.update(&product).await {
            tracing::error!("Error updating product in remote table: {}", e);
            tracing::warn!(
                "Update of product {} only exists in local state and will not be visible to other users",
                product.id
            );
            self.modify(|c| c.mark(&product.id, SyncStatus::LocalOnly));
            return;
        }

        tracing::info!("Product {} updated in remote table", product.id);
        self.confirm_row(remote.as_ref(), &product.id).await;
    }

    /// Refetches one row after a successful write and swaps in the server
    /// copy, which carries server-assigned fields.
    async fn confirm_row(&self, remote: &dyn RemoteTable, id: &str) {
        match remote.select_by_id(id).await {
            Ok(row) => {
                let row = row.normalized();
                self.modify(|c| {
                    c.replace(row, SyncStatus::Confirmed);
                });
            }
            Err(e) => {
                // The write itself went through.
                tracing::warn!("Error refreshing product {} after write: {}", id, e);
                self.modify(|c| c.mark(id, SyncStatus::Confirmed));
            }
        }
    }

    /// Removes the product with `id`. Returns true if a local product was
    /// removed.
    ///
    /// If the remote delete fails the local catalog is reloaded from the
    /// remote table, bringing the product back.
    pub fn delete_product(&self, id: &str) -> bool {
        let mut removed = false;
        if !self.modify(|catalog| removed = catalog.remove(id)) {
            tracing::warn!("Catalog provider is shut down; product {} not deleted", id);
            return false;
        }

        match self.remote() {
            Some(remote) => {
                let provider = self.clone();
                let id = id.to_string();
                self.spawn(async move { provider.push_delete(remote, id).await });
            }
            None => {
                tracing::warn!("No remote table configured - product deletion will not be persisted");
            }
        }

        removed
    }

    async fn push_delete(&self, remote: Arc<dyn RemoteTable>, id: String) {
        let Err(e) = remote.delete(&id).await else {
            tracing::info!("Product {} deleted from remote table", id);
            return;
        };

        tracing::error!("Error deleting product {} from remote table: {}", id, e);
        match remote.select_all().await {
            Ok(rows) => {
                tracing::info!("Reverting local state to match remote table after failed deletion");
                self.adopt_remote(rows);
            }
            Err(e) => {
                tracing::error!("Error reverting failed deletion: {}", e);
                tracing::warn!(
                    "Deletion of product {} only happened in local state and will not be visible to other users",
                    id
                );
            }
        }
    }

    /// Replaces the local catalog with the seed catalog, then resets the
    /// remote table in the background. Local state stays at the seed even if
    /// the remote reset fails.
    ///
    /// While the reset runs, change feed reloads are not adopted. After a
    /// failed reset the seed is held until the next [`reload`](Self::reload).
    pub fn reset_to_seed(&self) {
        let guard = self.begin_reset();
        let status = self.write_status();
        if !self.modify(|c| c.replace_all(seed_products(), CatalogSource::Seed, status)) {
            tracing::warn!("Catalog provider is shut down; reset skipped");
            return;
        }

        let Some(remote) = self.remote() else {
            tracing::warn!("No remote table configured - products reset only in local state");
            return;
        };

        let provider = self.clone();
        self.spawn(async move {
            let _guard = guard;
            if let Err(e) = replace_remote_with_seed(remote.as_ref()).await {
                tracing::error!("Error resetting products in remote table: {}", e);
                tracing::warn!("Products reset only in local state, not in remote table");
                provider.hold();
                provider.modify(|c| {
                    c.replace_all(seed_products(), CatalogSource::Seed, SyncStatus::LocalOnly)
                });
                return;
            }
            tracing::info!("Products reset in remote table successfully");

            if let Err(e) = provider.reload().await {
                tracing::error!("Error refreshing products after reset: {}", e);
                provider.modify(|c| c.mark_all(SyncStatus::Confirmed));
            }
        });
    }

    /// Unconditionally replaces every remote row with the seed catalog and
    /// waits for the result.
    ///
    /// Returns false without a remote table or if clearing or inserting
    /// fails. On success the local catalog is reloaded from the remote table.
    /// If the insert fails after the table was cleared, the local catalog is
    /// kept (tagged local-only) and held until the next reload.
    pub async fn force_resync(&self) -> bool {
        let Some(remote) = self.remote() else {
            tracing::warn!("Cannot push products - no remote table configured");
            return false;
        };
        let _guard = self.begin_reset();

        tracing::info!("Clearing existing products from remote table '{}'", remote.name());
        if let Err(e) = remote.delete_all().await {
            tracing::error!("Error in force resync: {}", e);
            return false;
        }

        tracing::info!("Inserting seed products into remote table '{}'", remote.name());
        if let Err(e) = remote.insert(&seed_products()).await {
            // The table is now empty; keep what is shown locally.
            tracing::error!("Error in force resync: {}", e);
            self.hold();
            self.modify(|c| c.mark_all(SyncStatus::LocalOnly));
            return false;
        }
        tracing::info!("Seed products successfully pushed to remote table");

        match self.reload().await {
            Ok(()) => tracing::info!("Products state updated with fresh data from remote table"),
            Err(e) => tracing::error!("Error fetching products after resync: {}", e),
        }

        true
    }
}

/// Deletes every remote row, then inserts the seed catalog.
async fn replace_remote_with_seed(remote: &dyn RemoteTable) -> Result<(), RemoteError> {
    tracing::info!("Clearing existing products from remote table '{}'", remote.name());
    remote.delete_all().await?;

    tracing::info!("Inserting seed products into remote table '{}'", remote.name());
    remote.insert(&seed_products()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_skips_taken_ids() {
        let now = Utc::now().timestamp_millis();
        let taken: Vec<Product> = (0..3)
            .map(|offset| {
                ProductDraft::new("Taken", "Razors")
                    .with_image("/t.png")
                    .into_product((now + offset).to_string())
            })
            .collect();
        let catalog = Catalog::new(taken, CatalogSource::Seed, SyncStatus::Confirmed);

        let id = next_id(&catalog);
        assert!(!catalog.contains(&id));
        assert!(id.parse::<i64>().unwrap() >= now);
    }

    #[tokio::test]
    async fn test_fallback_add_is_local_only() {
        let provider = CatalogProvider::mount(None).await;
        let before = provider.products().len();

        let added = provider
            .add_product(ProductDraft::new("X", "Razors").with_image("a.png"))
            .unwrap();

        assert_eq!(provider.products().len(), before + 1);
        assert_eq!(provider.get_product(&added.id), Some(added.clone()));
        assert_eq!(added.images, vec!["a.png".to_string()]);
        assert_eq!(provider.status(&added.id), Some(SyncStatus::LocalOnly));
        assert_eq!(provider.pending_writes(), 0);
    }

    #[tokio::test]
    async fn test_rapid_adds_get_distinct_ids() {
        let provider = CatalogProvider::mount(None).await;

        let a = provider.add_product(ProductDraft::new("A", "Razors")).unwrap();
        let b = provider.add_product(ProductDraft::new("B", "Razors")).unwrap();

        assert_ne!(a.id, b.id);
        assert!(provider.get_product(&a.id).is_some());
        assert!(provider.get_product(&b.id).is_some());
    }

    #[tokio::test]
    async fn test_fallback_force_resync_fails() {
        let provider = CatalogProvider::mount(None).await;
        assert!(!provider.force_resync().await);
    }

    #[tokio::test]
    async fn test_mutations_after_shutdown_are_ignored() {
        let provider = CatalogProvider::mount(None).await;
        provider.shutdown();
        let before = provider.products();

        assert!(provider.add_product(ProductDraft::new("Late", "Razors")).is_none());
        assert!(!provider.delete_product("1"));
        assert!(provider.update_product("1", ProductDraft::new("Y", "Razors")).is_none());
        provider.reset_to_seed();

        assert_eq!(provider.products(), before);
    }
}
