//! Remote table credentials and the "is it configured" check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Substring of the example project URL shipped in sample env files.
const URL_PLACEHOLDER: &str = "your-project-id";
/// Substring of the example access key shipped in sample env files.
const KEY_PLACEHOLDER: &str = "your-actual-key-here";

/// Endpoint URL and access key for the hosted data service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RemoteCredentials {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

/// Whether credentials can be used to reach the remote table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialState {
    /// URL or key is absent or empty.
    Missing,
    /// URL or key still contains the sample placeholder text.
    Placeholder,
    Configured,
}

impl fmt::Display for CredentialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialState::Missing => write!(f, "not configured"),
            CredentialState::Placeholder => write!(f, "placeholder values"),
            CredentialState::Configured => write!(f, "configured"),
        }
    }
}

impl RemoteCredentials {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            anon_key: Some(anon_key.into()),
        }
    }

    pub fn state(&self) -> CredentialState {
        let url = self.url.as_deref().unwrap_or("").trim();
        let key = self.anon_key.as_deref().unwrap_or("").trim();

        if url.is_empty() || key.is_empty() {
            CredentialState::Missing
        } else if url.contains(URL_PLACEHOLDER) || key.contains(KEY_PLACEHOLDER) {
            CredentialState::Placeholder
        } else {
            CredentialState::Configured
        }
    }

    /// Returns true only for real (non-placeholder) credentials.
    pub fn is_configured(&self) -> bool {
        self.state() == CredentialState::Configured
    }

    /// The endpoint URL with an `https://` scheme added when none is given
    /// and without a trailing slash.
    pub fn endpoint(&self) -> Option<String> {
        let url = self.url.as_deref()?.trim();
        if url.is_empty() {
            return None;
        }
        let url = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{}", url)
        };
        Some(url.trim_end_matches('/').to_string())
    }

    /// The access key shortened for display.
    pub fn masked_key(&self) -> Option<String> {
        let key = self.anon_key.as_deref()?;
        let prefix: String = key.chars().take(8).collect();
        Some(format!("{}... ({} chars)", prefix, key.chars().count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials() {
        assert_eq!(
            RemoteCredentials::default().state(),
            CredentialState::Missing
        );
        let creds = RemoteCredentials {
            url: Some("https://abc.supabase.co".to_string()),
            anon_key: Some("   ".to_string()),
        };
        assert_eq!(creds.state(), CredentialState::Missing);
    }

    #[test]
    fn test_placeholder_url() {
        let creds = RemoteCredentials::new("https://your-project-id.supabase.co", "eyJreal");
        assert_eq!(creds.state(), CredentialState::Placeholder);
        assert!(!creds.is_configured());
    }

    #[test]
    fn test_placeholder_key() {
        let creds = RemoteCredentials::new("https://abc.supabase.co", "your-actual-key-here");
        assert_eq!(creds.state(), CredentialState::Placeholder);
    }

    #[test]
    fn test_configured() {
        let creds = RemoteCredentials::new("https://abc.supabase.co", "eyJhbGciOi");
        assert!(creds.is_configured());
    }

    #[test]
    fn test_endpoint_adds_scheme() {
        let creds = RemoteCredentials::new("abc.supabase.co/", "key");
        assert_eq!(creds.endpoint().unwrap(), "https://abc.supabase.co");

        let creds = RemoteCredentials::new("http://localhost:54321", "key");
        assert_eq!(creds.endpoint().unwrap(), "http://localhost:54321");
    }

    #[test]
    fn test_masked_key() {
        let creds = RemoteCredentials::new("abc", "eyJhbGciOiJIUzI1NiJ9");
        assert_eq!(creds.masked_key().unwrap(), "eyJhbGci... (20 chars)");
    }
}
