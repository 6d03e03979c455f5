//! PostgREST binding for the remote product table.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};

use super::{realtime, ChangeFeed, RemoteError, RemoteTable};
use crate::credentials::RemoteCredentials;
use crate::models::Product;

const CLIENT_INFO: &str = concat!("catalog-core/", env!("CARGO_PKG_VERSION"));

/// A table served by the hosted service's REST endpoint.
#[derive(Debug, Clone)]
pub struct RestTable {
    http: reqwest::Client,
    endpoint: String,
    anon_key: String,
    table: String,
}

impl RestTable {
    /// Creates a table client with explicit parameters.
    ///
    /// `endpoint` is the project URL, e.g. `https://abc.supabase.co`.
    pub fn new(
        endpoint: impl Into<String>,
        anon_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            table: table.into(),
        }
    }

    /// Creates a table client from credentials.
    ///
    /// Returns `NotConfigured` for missing or placeholder credentials.
    pub fn from_credentials(
        credentials: &RemoteCredentials,
        table: impl Into<String>,
    ) -> Result<Self, RemoteError> {
        if !credentials.is_configured() {
            return Err(RemoteError::NotConfigured);
        }
        let endpoint = credentials.endpoint().ok_or(RemoteError::NotConfigured)?;
        let anon_key = credentials
            .anon_key
            .clone()
            .ok_or(RemoteError::NotConfigured)?;

        Ok(Self::new(endpoint, anon_key, table))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.endpoint, self.table)
    }

    /// Builds a table URL with the given query string.
    fn query_url(&self, query: &str) -> String {
        format!("{}?{}", self.table_url(), query)
    }

    fn id_filter(id: &str) -> String {
        format!("id=eq.{}", urlencoding::encode(id))
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .header("X-Client-Info", CLIENT_INFO)
            .bearer_auth(&self.anon_key)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, RemoteError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(RemoteError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RemoteTable for RestTable {
    fn name(&self) -> &str {
        &self.table
    }

    async fn select_all(&self) -> Result<Vec<Product>, RemoteError> {
        let url = self.query_url("select=*");
        let response = self.send(self.request(Method::GET, &url)).await?;
        Ok(response.json().await?)
    }

    async fn select_by_id(&self, id: &str) -> Result<Product, RemoteError> {
        let url = self.query_url(&format!("select=*&{}", Self::id_filter(id)));
        let response = self.send(self.request(Method::GET, &url)).await?;
        let rows: Vec<Product> = response.json().await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RemoteError::NotFound(id.to_string()))
    }

    async fn insert(&self, rows: &[Product]) -> Result<(), RemoteError> {
        let request = self
            .request(Method::POST, &self.table_url())
            .header("Prefer", "return=minimal")
            .json(rows);
        self.send(request).await?;
        Ok(())
    }

    async fn update(&self, row: &Product) -> Result<(), RemoteError> {
        let url = self.query_url(&Self::id_filter(&row.id));
        let request = self
            .request(Method::PATCH, &url)
            .header("Prefer", "return=minimal")
            .json(row);
        self.send(request).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RemoteError> {
        let url = self.query_url(&Self::id_filter(id));
        self.send(self.request(Method::DELETE, &url)).await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RemoteError> {
        // PostgREST refuses unfiltered deletes; match every row with an id.
        let url = self.query_url("id=not.is.null");
        self.send(self.request(Method::DELETE, &url)).await?;
        Ok(())
    }

    async fn count(&self) -> Result<usize, RemoteError> {
        let url = self.query_url("select=*");
        let request = self
            .request(Method::HEAD, &url)
            .header("Prefer", "count=exact");
        let response = self.send(request).await?;

        response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range)
            .ok_or_else(|| RemoteError::DecodeError("missing Content-Range total".to_string()))
    }

    async fn subscribe(&self) -> Result<ChangeFeed, RemoteError> {
        realtime::connect(&self.endpoint, &self.anon_key, &self.table).await
    }
}

/// Extracts the total from a `Content-Range` header such as `0-24/56` or
/// `*/0`.
pub(crate) fn parse_content_range(value: &str) -> Option<usize> {
    let (_, total) = value.trim().rsplit_once('/')?;
    total.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RestTable {
        RestTable::new("https://abc.supabase.co/", "key", "products")
    }

    #[test]
    fn test_table_url() {
        assert_eq!(
            table().table_url(),
            "https://abc.supabase.co/rest/v1/products"
        );
    }

    #[test]
    fn test_query_url_with_id_filter() {
        let t = table();
        let url = t.query_url(&format!("select=*&{}", RestTable::id_filter("1712 3")));
        assert_eq!(
            url,
            "https://abc.supabase.co/rest/v1/products?select=*&id=eq.1712%203"
        );
    }

    #[test]
    fn test_from_credentials_rejects_placeholder() {
        let creds = RemoteCredentials::new("https://your-project-id.supabase.co", "k");
        assert_eq!(
            RestTable::from_credentials(&creds, "products").unwrap_err(),
            RemoteError::NotConfigured
        );
    }

    #[test]
    fn test_from_credentials_normalizes_endpoint() {
        let creds = RemoteCredentials::new("abc.supabase.co", "eyJkey");
        let table = RestTable::from_credentials(&creds, "products").unwrap();
        assert_eq!(table.endpoint(), "https://abc.supabase.co");
        assert_eq!(table.name(), "products");
    }

    #[test]
    fn test_parse_content_range() {
        assert_eq!(parse_content_range("0-55/56"), Some(56));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range("0-9/*"), None);
        assert_eq!(parse_content_range("garbage"), None);
    }
}
