//! The catalog synchronization provider.
//!
//! [`CatalogProvider`] owns the live product list and keeps it loosely in
//! step with a remote table:
//!
//! - Reads are synchronous lookups over the latest published [`Catalog`]
//!   snapshot.
//! - Mutations apply to the local snapshot first and return immediately;
//!   the matching remote write runs as a background task. Remote failures
//!   are logged and leave the record tagged [`SyncStatus::LocalOnly`]
//!   (delete instead reverts by reloading the table).
//! - A change feed consumer reloads the whole table whenever the remote
//!   table reports a change.
//!
//! Without a remote table the provider runs in fallback mode on the seed
//! catalog.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use catalog_core::{CatalogProvider, MemoryTable, ProductDraft, RemoteTable};
//!
//! # async fn run() {
//! let table: Arc<dyn RemoteTable> = Arc::new(MemoryTable::new());
//! let provider = CatalogProvider::mount(Some(table)).await;
//!
//! let added = provider
//!     .add_product(ProductDraft::new("Turk Razor", "Razors").with_image("/turk-razor-1.png"))
//!     .unwrap();
//! assert!(provider.get_product(&added.id).is_some());
//!
//! provider.settle().await;
//! provider.shutdown();
//! # }
//! ```

mod context;
mod mutations;
mod tasks;

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::fmt;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::models::{Catalog, CatalogSource, Product, SyncStatus, CATEGORIES};
use crate::remote::{RemoteError, RemoteTable};
use crate::seed::seed_products;

pub use context::{try_use_catalog, use_catalog};
use tasks::TaskSet;

/// Whether the provider mirrors a remote table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    Remote,
    /// No remote table; all changes are local to this process.
    Fallback,
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncMode::Remote => write!(f, "remote"),
            SyncMode::Fallback => write!(f, "fallback"),
        }
    }
}

struct Inner {
    state: watch::Sender<Catalog>,
    remote: Option<Arc<dyn RemoteTable>>,
    tasks: TaskSet,
    feed: Mutex<Option<JoinHandle<()>>>,
    closed: AtomicBool,
    /// Resets of the remote table still in flight.
    resets: AtomicUsize,
    /// Bumped every time a reset starts.
    reset_epoch: AtomicU64,
    /// Set after a failed reset; feed reloads are not adopted until the next
    /// explicit [`CatalogProvider::reload`].
    held: AtomicBool,
}

/// Keeps feed reloads from being adopted while a reset rewrites the remote
/// table.
pub(crate) struct ResetGuard {
    inner: Arc<Inner>,
}

impl Drop for ResetGuard {
    fn drop(&mut self) {
        self.inner.resets.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Shared handle to the live catalog. Cloning is cheap; all clones see the
/// same state.
#[derive(Clone)]
pub struct CatalogProvider {
    inner: Arc<Inner>,
}

impl CatalogProvider {
    /// Creates a provider showing the seed catalog in the loading state.
    ///
    /// Pass `None` to run in fallback mode.
    pub fn new(remote: Option<Arc<dyn RemoteTable>>) -> Self {
        let mut catalog = Catalog::new(seed_products(), CatalogSource::Seed, SyncStatus::LocalOnly);
        catalog.set_loading(true);
        let (state, _) = watch::channel(catalog);

        Self {
            inner: Arc::new(Inner {
                state,
                remote,
                tasks: TaskSet::default(),
                feed: Mutex::new(None),
                closed: AtomicBool::new(false),
                resets: AtomicUsize::new(0),
                reset_epoch: AtomicU64::new(0),
                held: AtomicBool::new(false),
            }),
        }
    }

    /// Creates and initializes a provider.
    pub async fn mount(remote: Option<Arc<dyn RemoteTable>>) -> Self {
        let provider = Self::new(remote);
        provider.initialize().await;
        provider
    }

    /// Loads the catalog and subscribes to remote changes.
    ///
    /// Never fails: any remote problem leaves the seed catalog in place.
    pub async fn initialize(&self) {
        let Some(remote) = self.remote() else {
            tracing::info!("No remote table configured; using seed catalog");
            self.adopt_seed(SyncStatus::LocalOnly);
            self.modify(|c| c.set_loading(false));
            return;
        };

        tracing::info!("Loading products from remote table '{}'", remote.name());

        match remote.select_all().await {
            Err(e) => {
                tracing::error!("Error fetching products from remote table: {}", e);
                tracing::warn!("Using seed catalog as fallback");
                self.adopt_seed(SyncStatus::LocalOnly);
            }
            Ok(rows) if !rows.is_empty() => {
                tracing::info!("Loaded {} products from remote table", rows.len());
                self.adopt_remote(rows);
            }
            Ok(_) => {
                tracing::info!("No products found in remote table, syncing seed catalog");
                self.adopt_seed(SyncStatus::Pending);
                self.push_seed_if_empty(remote.as_ref()).await;
            }
        }

        self.modify(|c| c.set_loading(false));
        self.start_change_feed(remote).await;
    }

    /// Seeds an empty remote table, then adopts the stored rows.
    async fn push_seed_if_empty(&self, remote: &dyn RemoteTable) {
        match remote.count().await {
            Ok(0) => {}
            Ok(count) => {
                tracing::info!("Remote table now has {} rows, skipping seed push", count);
                if let Err(e) = self.reload().await {
                    tracing::error!("Error refreshing products: {}", e);
                }
                return;
            }
            Err(e) => {
                tracing::error!("Error checking products count: {}", e);
                self.modify(|c| c.mark_all(SyncStatus::LocalOnly));
                return;
            }
        }

        if let Err(e) = remote.insert(&seed_products()).await {
            tracing::error!("Error syncing seed products to remote table: {}", e);
            self.modify(|c| c.mark_all(SyncStatus::LocalOnly));
            return;
        }
        tracing::info!("Seed products synced to remote table successfully");

        // Fetch again to pick up server-assigned fields
        match remote.select_all().await {
            Ok(rows) => self.adopt_remote(rows),
            Err(e) => {
                tracing::error!("Error fetching products after seeding: {}", e);
                self.modify(|c| c.mark_all(SyncStatus::Confirmed));
            }
        }
    }

    /// Opens the change feed and starts the reload consumer.
    async fn start_change_feed(&self, remote: Arc<dyn RemoteTable>) {
        tracing::info!("Setting up change feed for table '{}'", remote.name());

        let mut feed = match remote.subscribe().await {
            Ok(feed) => feed,
            Err(e) => {
                tracing::error!("Error setting up change feed: {}", e);
                return;
            }
        };

        let provider = self.clone();
        let handle = tokio::spawn(async move {
            while let Some(change) = feed.recv().await {
                tracing::debug!("Remote change received: {} on {}", change.kind, change.table);

                // A burst of changes needs only one reload.
                while feed.try_recv().is_some() {}

                match provider.refresh_from_feed(remote.as_ref()).await {
                    Ok(true) => tracing::info!("Products refreshed after remote change"),
                    Ok(false) => tracing::debug!("Remote change ignored while local reset is held"),
                    Err(e) => {
                        tracing::error!("Error refreshing products after remote change: {}", e)
                    }
                }
            }
            tracing::debug!("Change feed ended");
        });

        let mut slot = self.inner.feed.lock().unwrap_or_else(PoisonError::into_inner);
        if self.is_closed() {
            handle.abort();
        } else if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    /// Replaces the local catalog with a full read of the remote table.
    ///
    /// Also releases a catalog held at the seed after a failed reset.
    pub async fn reload(&self) -> Result<(), RemoteError> {
        let remote = self.remote().ok_or(RemoteError::NotConfigured)?;
        let rows = remote.select_all().await?;
        self.inner.held.store(false, Ordering::SeqCst);
        self.adopt_remote(rows);
        Ok(())
    }

    /// Reload triggered by the change feed. Returns false when the rows were
    /// not adopted because a reset was in flight, started during the read,
    /// or failed and is holding the seed.
    async fn refresh_from_feed(&self, remote: &dyn RemoteTable) -> Result<bool, RemoteError> {
        if self.feed_paused() {
            return Ok(false);
        }
        let epoch = self.inner.reset_epoch.load(Ordering::SeqCst);
        let rows: Vec<Product> = remote
            .select_all()
            .await?
            .into_iter()
            .map(Product::normalized)
            .collect();

        let mut adopted = false;
        self.modify(|c| {
            if self.feed_paused() || self.inner.reset_epoch.load(Ordering::SeqCst) != epoch {
                return;
            }
            c.replace_all(rows, CatalogSource::Remote, SyncStatus::Confirmed);
            adopted = true;
        });
        Ok(adopted)
    }

    fn feed_paused(&self) -> bool {
        self.inner.resets.load(Ordering::SeqCst) > 0 || self.inner.held.load(Ordering::SeqCst)
    }

    pub(crate) fn begin_reset(&self) -> ResetGuard {
        self.inner.resets.fetch_add(1, Ordering::SeqCst);
        self.inner.reset_epoch.fetch_add(1, Ordering::SeqCst);
        ResetGuard {
            inner: self.inner.clone(),
        }
    }

    /// Keeps the current local catalog until the next explicit reload.
    pub(crate) fn hold(&self) {
        self.inner.held.store(true, Ordering::SeqCst);
    }

    /// Waits until every background remote write started so far has
    /// finished. Change feed reloads are not included.
    pub async fn settle(&self) {
        self.inner.tasks.settle().await;
    }

    /// Stops the change feed and cancels in-flight remote writes. After
    /// this no background task can change the catalog.
    pub fn shutdown(&self) {
        if self.inner.closed.swap(true, Ordering::SeqCst) {
            return;
        }

        tracing::info!("Cleaning up change feed subscription");
        if let Some(feed) = self
            .inner
            .feed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            feed.abort();
        }
        self.inner.tasks.abort_all();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    /// Runs `future` with this provider available through [`use_catalog`].
    pub async fn scope<F>(&self, future: F) -> F::Output
    where
        F: Future,
    {
        context::CURRENT.scope(self.clone(), future).await
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// The latest published snapshot.
    pub fn snapshot(&self) -> Catalog {
        self.inner.state.borrow().clone()
    }

    /// A receiver notified whenever a new snapshot is published.
    pub fn watch(&self) -> watch::Receiver<Catalog> {
        self.inner.state.subscribe()
    }

    pub fn products(&self) -> Vec<Product> {
        self.inner.state.borrow().products().to_vec()
    }

    pub fn get_product(&self, id: &str) -> Option<Product> {
        self.inner.state.borrow().get(id).cloned()
    }

    pub fn products_by_category(&self, category: &str) -> Vec<Product> {
        self.inner.state.borrow().by_category(category)
    }

    pub fn status(&self, id: &str) -> Option<SyncStatus> {
        self.inner.state.borrow().status(id)
    }

    pub fn categories(&self) -> &'static [&'static str] {
        &CATEGORIES
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().is_loading()
    }

    pub fn mode(&self) -> SyncMode {
        if self.inner.remote.is_some() {
            SyncMode::Remote
        } else {
            SyncMode::Fallback
        }
    }

    /// Number of remote writes still running.
    pub fn pending_writes(&self) -> usize {
        self.inner.tasks.in_flight()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn remote(&self) -> Option<Arc<dyn RemoteTable>> {
        self.inner.remote.clone()
    }

    /// Status given to a record written locally.
    fn write_status(&self) -> SyncStatus {
        match self.mode() {
            SyncMode::Remote => SyncStatus::Pending,
            SyncMode::Fallback => SyncStatus::LocalOnly,
        }
    }

    /// Applies `f` to the catalog and publishes the result if anything
    /// changed. Returns false once the provider is shut down.
    fn modify(&self, f: impl FnOnce(&mut Catalog)) -> bool {
        if self.is_closed() {
            return false;
        }
        self.inner.state.send_if_modified(|catalog| {
            let before = catalog.revision();
            f(catalog);
            catalog.revision() != before
        });
        true
    }

    fn adopt_seed(&self, status: SyncStatus) {
        self.modify(|c| c.replace_all(seed_products(), CatalogSource::Seed, status));
    }

    fn adopt_remote(&self, rows: Vec<Product>) {
        let rows = rows.into_iter().map(Product::normalized).collect();
        self.modify(|c| c.replace_all(rows, CatalogSource::Remote, SyncStatus::Confirmed));
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if !self.is_closed() {
            self.inner.tasks.spawn(task);
        }
    }
}

impl fmt::Debug for CatalogProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogProvider")
            .field("mode", &self.mode())
            .field("closed", &self.is_closed())
            .field("revision", &self.inner.state.borrow().revision())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{ChangeFeed, MemoryTable, TableOp};
    use crate::seed::seed_len;
    use async_trait::async_trait;

    /// Reports an empty table on the first full read, as if another client
    /// filled it right after.
    struct FilledAfterFirstRead {
        table: MemoryTable,
        first_read: AtomicBool,
    }

    #[async_trait]
    impl RemoteTable for FilledAfterFirstRead {
        fn name(&self) -> &str {
            self.table.name()
        }
        async fn select_all(&self) -> Result<Vec<Product>, RemoteError> {
            if !self.first_read.swap(true, Ordering::SeqCst) {
                return Ok(Vec::new());
            }
            self.table.select_all().await
        }
        async fn select_by_id(&self, id: &str) -> Result<Product, RemoteError> {
            self.table.select_by_id(id).await
        }
        async fn insert(&self, rows: &[Product]) -> Result<(), RemoteError> {
            self.table.insert(rows).await
        }
        async fn update(&self, row: &Product) -> Result<(), RemoteError> {
            self.table.update(row).await
        }
        async fn delete(&self, id: &str) -> Result<(), RemoteError> {
            self.table.delete(id).await
        }
        async fn delete_all(&self) -> Result<(), RemoteError> {
            self.table.delete_all().await
        }
        async fn count(&self) -> Result<usize, RemoteError> {
            self.table.count().await
        }
        async fn subscribe(&self) -> Result<ChangeFeed, RemoteError> {
            self.table.subscribe().await
        }
    }

    fn remote(table: &Arc<MemoryTable>) -> Option<Arc<dyn RemoteTable>> {
        Some(table.clone() as Arc<dyn RemoteTable>)
    }

    #[tokio::test]
    async fn test_new_starts_loading_with_seed() {
        let provider = CatalogProvider::new(None);
        assert!(provider.is_loading());
        assert_eq!(provider.products().len(), seed_len());
    }

    #[tokio::test]
    async fn test_fallback_mode_uses_seed() {
        let provider = CatalogProvider::mount(None).await;

        assert_eq!(provider.mode(), SyncMode::Fallback);
        assert!(!provider.is_loading());
        assert_eq!(provider.products(), seed_products());
        assert_eq!(provider.status("1"), Some(SyncStatus::LocalOnly));
    }

    #[tokio::test]
    async fn test_fetch_error_uses_seed() {
        let table = Arc::new(MemoryTable::new());
        table.fail(TableOp::SelectAll).await;

        let provider = CatalogProvider::mount(remote(&table)).await;

        assert_eq!(provider.products(), seed_products());
        assert_eq!(provider.snapshot().source(), CatalogSource::Seed);
        assert!(!provider.is_loading());
        provider.shutdown();
    }

    #[tokio::test]
    async fn test_non_empty_table_is_adopted() {
        let rows = seed_products().into_iter().take(3).collect::<Vec<_>>();
        let table = Arc::new(MemoryTable::with_rows(rows.clone()));

        let provider = CatalogProvider::mount(remote(&table)).await;

        assert_eq!(provider.products(), rows);
        assert_eq!(provider.snapshot().source(), CatalogSource::Remote);
        assert_eq!(provider.status(&rows[0].id), Some(SyncStatus::Confirmed));
        provider.shutdown();
    }

    #[tokio::test]
    async fn test_empty_table_is_seeded() {
        let table = Arc::new(MemoryTable::new());

        let provider = CatalogProvider::mount(remote(&table)).await;

        assert_eq!(table.rows().await.len(), seed_len());
        let snapshot = provider.snapshot();
        assert_eq!(snapshot.source(), CatalogSource::Remote);
        assert_eq!(snapshot.len(), seed_len());
        assert!(snapshot.products().iter().all(|p| p.created_at.is_some()));
        assert_eq!(snapshot.unconfirmed(), 0);
        provider.shutdown();
    }

    #[tokio::test]
    async fn test_failed_seed_push_keeps_local_seed() {
        let table = Arc::new(MemoryTable::new());
        table.fail(TableOp::Insert).await;

        let provider = CatalogProvider::mount(remote(&table)).await;

        assert_eq!(provider.products(), seed_products());
        assert_eq!(provider.status("1"), Some(SyncStatus::LocalOnly));
        assert!(table.rows().await.is_empty());
        provider.shutdown();
    }

    #[tokio::test]
    async fn test_table_filled_before_count_skips_seed_push() {
        let rows = seed_products().into_iter().take(3).collect::<Vec<_>>();
        let table = Arc::new(FilledAfterFirstRead {
            table: MemoryTable::with_rows(rows.clone()),
            first_read: AtomicBool::new(false),
        });

        let provider = CatalogProvider::mount(Some(table.clone() as Arc<dyn RemoteTable>)).await;

        assert_eq!(provider.products(), rows);
        assert_eq!(provider.snapshot().source(), CatalogSource::Remote);
        assert_eq!(provider.snapshot().unconfirmed(), 0);
        assert_eq!(table.table.rows().await.len(), 3);
        provider.shutdown();
    }

    #[tokio::test]
    async fn test_count_failure_keeps_local_seed() {
        let table = Arc::new(MemoryTable::new());
        table.fail(TableOp::Count).await;

        let provider = CatalogProvider::mount(remote(&table)).await;

        assert_eq!(provider.products(), seed_products());
        assert!(provider
            .products()
            .iter()
            .all(|p| provider.status(&p.id) == Some(SyncStatus::LocalOnly)));
        assert!(table.rows().await.is_empty());
        assert!(!provider.is_loading());
        provider.shutdown();
    }

    #[tokio::test]
    async fn test_feed_reload_skipped_during_reset() {
        let table = Arc::new(MemoryTable::with_rows(seed_products()));
        let provider = CatalogProvider::mount(remote(&table)).await;
        let remote: Arc<dyn RemoteTable> = table.clone();

        let guard = provider.begin_reset();
        assert_eq!(provider.refresh_from_feed(remote.as_ref()).await, Ok(false));
        drop(guard);
        assert_eq!(provider.refresh_from_feed(remote.as_ref()).await, Ok(true));

        provider.hold();
        assert_eq!(provider.refresh_from_feed(remote.as_ref()).await, Ok(false));
        provider.reload().await.unwrap();
        assert_eq!(provider.refresh_from_feed(remote.as_ref()).await, Ok(true));
        provider.shutdown();
    }

    #[tokio::test]
    async fn test_subscribe_failure_is_not_fatal() {
        let table = Arc::new(MemoryTable::with_rows(seed_products()));
        table.fail(TableOp::Subscribe).await;

        let provider = CatalogProvider::mount(remote(&table)).await;
        assert_eq!(provider.products().len(), seed_len());
        provider.shutdown();
    }

    #[tokio::test]
    async fn test_reload_without_remote() {
        let provider = CatalogProvider::mount(None).await;
        assert_eq!(provider.reload().await, Err(RemoteError::NotConfigured));
    }

    #[tokio::test]
    async fn test_shutdown_blocks_publishing() {
        let table = Arc::new(MemoryTable::with_rows(seed_products()));
        let provider = CatalogProvider::mount(remote(&table)).await;
        let revision = provider.snapshot().revision();

        provider.shutdown();
        assert!(provider.is_closed());

        table.external_insert(seed_products().remove(0)).await;
        // A direct reload still reads but cannot publish.
        provider.reload().await.unwrap();
        assert_eq!(provider.snapshot().revision(), revision);
    }
}
