//! In-process remote table.
//!
//! Behaves like the hosted table closely enough to drive the provider:
//! rows get a `created_at` on insert, every write notifies subscribers, and
//! individual operations can be made to fail.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{mpsc, Mutex};

use super::{ChangeFeed, ChangeKind, RemoteError, RemoteTable, TableChange, DEFAULT_TABLE};
use crate::models::Product;

const FEED_BUFFER: usize = 16;

/// Operations that can be made to fail on a [`MemoryTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableOp {
    SelectAll,
    SelectById,
    Insert,
    Update,
    Delete,
    DeleteAll,
    Count,
    Subscribe,
}

#[derive(Default)]
struct State {
    rows: Vec<Product>,
    failing: HashSet<TableOp>,
    subscribers: Vec<mpsc::Sender<TableChange>>,
}

/// A remote table held in memory.
pub struct MemoryTable {
    name: String,
    state: Mutex<State>,
    calls: AtomicUsize,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    /// Creates a table pre-filled with rows. No change events are sent.
    pub fn with_rows(rows: Vec<Product>) -> Self {
        Self {
            name: DEFAULT_TABLE.to_string(),
            state: Mutex::new(State {
                rows,
                ..State::default()
            }),
            calls: AtomicUsize::new(0),
        }
    }

    /// Makes `op` fail until [`recover`](Self::recover) is called.
    pub async fn fail(&self, op: TableOp) {
        self.state.lock().await.failing.insert(op);
    }

    /// Makes every operation fail.
    pub async fn fail_all(&self) {
        let mut state = self.state.lock().await;
        state.failing.extend([
            TableOp::SelectAll,
            TableOp::SelectById,
            TableOp::Insert,
            TableOp::Update,
            TableOp::Delete,
            TableOp::DeleteAll,
            TableOp::Count,
            TableOp::Subscribe,
        ]);
    }

    pub async fn recover(&self) {
        self.state.lock().await.failing.clear();
    }

    /// Current rows, in insertion order.
    pub async fn rows(&self) -> Vec<Product> {
        self.state.lock().await.rows.clone()
    }

    /// Writes rows directly, as another client would, and notifies
    /// subscribers.
    pub async fn external_insert(&self, row: Product) {
        let mut state = self.state.lock().await;
        state.rows.push(stamp(row));
        notify(&mut state, &self.name, ChangeKind::Insert);
    }

    /// Number of operations attempted so far, including failed ones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Counts the call and checks for an injected failure.
    fn check(&self, state: &State, op: TableOp) -> Result<(), RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if state.failing.contains(&op) {
            return Err(RemoteError::Unavailable(format!("{:?} failed", op)));
        }
        Ok(())
    }
}

impl Default for MemoryTable {
    fn default() -> Self {
        Self::new()
    }
}

fn stamp(mut row: Product) -> Product {
    if row.created_at.is_none() {
        row.created_at = Some(Utc::now());
    }
    row
}

fn notify(state: &mut State, table: &str, kind: ChangeKind) {
    // Full buffers drop the event; consumers reload the whole table anyway.
    state
        .subscribers
        .retain(|tx| match tx.try_send(TableChange::new(kind, table)) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => true,
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        });
}

#[async_trait]
impl RemoteTable for MemoryTable {
    fn name(&self) -> &str {
        &self.name
    }

    async fn select_all(&self) -> Result<Vec<Product>, RemoteError> {
        let state = self.state.lock().await;
        self.check(&state, TableOp::SelectAll)?;
        Ok(state.rows.clone())
    }

    async fn select_by_id(&self, id: &str) -> Result<Product, RemoteError> {
        let state = self.state.lock().await;
        self.check(&state, TableOp::SelectById)?;
        state
            .rows
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(id.to_string()))
    }

    async fn insert(&self, rows: &[Product]) -> Result<(), RemoteError> {
        let mut state = self.state.lock().await;
        self.check(&state, TableOp::Insert)?;

        for row in rows {
            if state.rows.iter().any(|r| r.id == row.id) {
                return Err(RemoteError::Status {
                    status: 409,
                    message: format!("duplicate key value: id={}", row.id),
                });
            }
        }
        state.rows.extend(rows.iter().cloned().map(stamp));
        notify(&mut state, &self.name, ChangeKind::Insert);
        Ok(())
    }

    async fn update(&self, row: &Product) -> Result<(), RemoteError> {
        let mut state = self.state.lock().await;
        self.check(&state, TableOp::Update)?;

        // Like a filtered PATCH, updating a missing row is not an error.
        if let Some(existing) = state.rows.iter_mut().find(|r| r.id == row.id) {
            let created_at = existing.created_at;
            *existing = row.clone();
            existing.created_at = created_at;
            notify(&mut state, &self.name, ChangeKind::Update);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RemoteError> {
        let mut state = self.state.lock().await;
        self.check(&state, TableOp::Delete)?;

        let before = state.rows.len();
        state.rows.retain(|r| r.id != id);
        if state.rows.len() != before {
            notify(&mut state, &self.name, ChangeKind::Delete);
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RemoteError> {
        let mut state = self.state.lock().await;
        self.check(&state, TableOp::DeleteAll)?;

        if !state.rows.is_empty() {
            state.rows.clear();
            notify(&mut state, &self.name, ChangeKind::Delete);
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize, RemoteError> {
        let state = self.state.lock().await;
        self.check(&state, TableOp::Count)?;
        Ok(state.rows.len())
    }

    async fn subscribe(&self) -> Result<ChangeFeed, RemoteError> {
        let mut state = self.state.lock().await;
        self.check(&state, TableOp::Subscribe)?;

        let (tx, rx) = mpsc::channel(FEED_BUFFER);
        state.subscribers.push(tx);
        Ok(ChangeFeed::new(rx, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductDraft;

    fn product(id: &str) -> Product {
        ProductDraft::new(format!("Product {}", id), "Razors")
            .with_image("/p.png")
            .into_product(id)
    }

    #[tokio::test]
    async fn test_insert_stamps_created_at() {
        let table = MemoryTable::new();
        table.insert(&[product("1")]).await.unwrap();

        let row = table.select_by_id("1").await.unwrap();
        assert!(row.created_at.is_some());
        assert_eq!(table.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_fails() {
        let table = MemoryTable::with_rows(vec![product("1")]);
        let err = table.insert(&[product("1")]).await.unwrap_err();
        assert!(matches!(err, RemoteError::Status { status: 409, .. }));
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let table = MemoryTable::new();
        table.insert(&[product("1")]).await.unwrap();
        let created_at = table.select_by_id("1").await.unwrap().created_at;

        let mut changed = product("1");
        changed.name = "Renamed".to_string();
        table.update(&changed).await.unwrap();

        let row = table.select_by_id("1").await.unwrap();
        assert_eq!(row.name, "Renamed");
        assert_eq!(row.created_at, created_at);
    }

    #[tokio::test]
    async fn test_injected_failure_and_recover() {
        let table = MemoryTable::new();
        table.fail(TableOp::SelectAll).await;
        assert!(table.select_all().await.is_err());

        table.recover().await;
        assert!(table.select_all().await.unwrap().is_empty());
        assert_eq!(table.calls(), 2);
    }

    #[tokio::test]
    async fn test_subscribers_see_writes() {
        let table = MemoryTable::new();
        let mut feed = table.subscribe().await.unwrap();

        table.insert(&[product("1")]).await.unwrap();
        table.delete("1").await.unwrap();
        // Deleting a missing row sends nothing
        table.delete("1").await.unwrap();

        assert_eq!(feed.recv().await.unwrap().kind, ChangeKind::Insert);
        assert_eq!(feed.recv().await.unwrap().kind, ChangeKind::Delete);
        assert!(feed.try_recv().is_none());
    }

    #[tokio::test]
    async fn test_dropped_feed_is_pruned() {
        let table = MemoryTable::new();
        let feed = table.subscribe().await.unwrap();
        drop(feed);

        table.external_insert(product("1")).await;
        assert!(table.state.lock().await.subscribers.is_empty());
    }
}
