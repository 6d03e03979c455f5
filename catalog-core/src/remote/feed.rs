use std::fmt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Kind of row change reported by the change feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
    /// Any other event type, including truncation.
    Other,
}

impl ChangeKind {
    /// Parses the event type sent by the realtime service
    /// (`INSERT`, `UPDATE`, `DELETE`).
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "INSERT" => ChangeKind::Insert,
            "UPDATE" => ChangeKind::Update,
            "DELETE" => ChangeKind::Delete,
            _ => ChangeKind::Other,
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Insert => write!(f, "insert"),
            ChangeKind::Update => write!(f, "update"),
            ChangeKind::Delete => write!(f, "delete"),
            ChangeKind::Other => write!(f, "other"),
        }
    }
}

/// A "table changed" notification. Carries no row data; consumers reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableChange {
    pub kind: ChangeKind,
    pub table: String,
}

impl TableChange {
    pub fn new(kind: ChangeKind, table: impl Into<String>) -> Self {
        Self {
            kind,
            table: table.into(),
        }
    }
}

/// Receiving end of a table subscription.
///
/// Dropping the feed (or calling [`unsubscribe`](Self::unsubscribe)) stops
/// the task that pumps events into it.
#[derive(Debug)]
pub struct ChangeFeed {
    receiver: mpsc::Receiver<TableChange>,
    pump: Option<JoinHandle<()>>,
}

impl ChangeFeed {
    pub fn new(receiver: mpsc::Receiver<TableChange>, pump: Option<JoinHandle<()>>) -> Self {
        Self { receiver, pump }
    }

    /// Waits for the next change. Returns `None` once the feed is closed.
    pub async fn recv(&mut self) -> Option<TableChange> {
        self.receiver.recv().await
    }

    /// Returns an already queued change without waiting.
    pub fn try_recv(&mut self) -> Option<TableChange> {
        self.receiver.try_recv().ok()
    }

    pub fn unsubscribe(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.receiver.close();
        if let Some(pump) = self.pump.take() {
            pump.abort();
        }
    }
}

impl Drop for ChangeFeed {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_kind_parse() {
        assert_eq!(ChangeKind::parse("INSERT"), ChangeKind::Insert);
        assert_eq!(ChangeKind::parse("update"), ChangeKind::Update);
        assert_eq!(ChangeKind::parse("DELETE"), ChangeKind::Delete);
        assert_eq!(ChangeKind::parse("TRUNCATE"), ChangeKind::Other);
    }

    #[tokio::test]
    async fn test_feed_receives_and_closes() {
        let (tx, rx) = mpsc::channel(4);
        let mut feed = ChangeFeed::new(rx, None);

        tx.send(TableChange::new(ChangeKind::Insert, "products"))
            .await
            .unwrap();
        assert_eq!(
            feed.recv().await,
            Some(TableChange::new(ChangeKind::Insert, "products"))
        );
        assert!(feed.try_recv().is_none());

        feed.unsubscribe();
        assert!(tx.is_closed());
    }
}
