//! Remote table error types.

/// Errors returned by [`RemoteTable`](super::RemoteTable) operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteError {
    /// Credentials are missing or still hold placeholder values
    NotConfigured,
    /// Request could not be sent or the connection failed
    HttpError(String),
    /// Server answered with a non-success status
    Status { status: u16, message: String },
    /// Response body could not be decoded
    DecodeError(String),
    /// No row with the requested id
    NotFound(String),
    /// Change feed connection error
    WebSocketError(String),
    /// Table is unreachable
    Unavailable(String),
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteError::NotConfigured => write!(
                f,
                "Remote table not configured. Set remote.url and remote.anon_key in config."
            ),
            RemoteError::HttpError(e) => write!(f, "HTTP error: {}", e),
            RemoteError::Status { status, message } => {
                if message.is_empty() {
                    write!(f, "Server returned status {}", status)
                } else {
                    write!(f, "Server returned status {}: {}", status, message)
                }
            }
            RemoteError::DecodeError(e) => write!(f, "Failed to decode response: {}", e),
            RemoteError::NotFound(id) => write!(f, "Row not found: {}", id),
            RemoteError::WebSocketError(e) => write!(f, "WebSocket error: {}", e),
            RemoteError::Unavailable(e) => write!(f, "Remote table unavailable: {}", e),
        }
    }
}

impl std::error::Error for RemoteError {}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            RemoteError::DecodeError(e.to_string())
        } else {
            RemoteError::HttpError(e.to_string())
        }
    }
}
