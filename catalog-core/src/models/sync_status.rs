use serde::Serialize;
use std::fmt;

/// Reconciliation state of a single product in the local snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Matches the last successful read from the remote table.
    Confirmed,
    /// Written locally; the remote write is still in flight.
    Pending,
    /// Exists only in this process, either because the remote write failed
    /// or because there is no remote table.
    LocalOnly,
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStatus::Confirmed => write!(f, "confirmed"),
            SyncStatus::Pending => write!(f, "pending"),
            SyncStatus::LocalOnly => write!(f, "local-only"),
        }
    }
}
