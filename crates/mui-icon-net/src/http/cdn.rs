//! Client bound to a package CDN base URL.
//!
//! The icon package is served as static module files below a fixed base
//! location. [`CdnClient`] joins relative module paths onto that base and
//! fetches them as text.
//!
//! # Example
//!
//! ```ignore
//! use mui_icon_net::http::CdnClient;
//!
//! let cdn = CdnClient::builder("https://unpkg.com/@mui/icons-material/").build()?;
//! let source = cdn.fetch_text("esm/Home.js").await?;
//! ```

use std::sync::Arc;

use super::client::HttpClient;
use crate::error::Result;

/// Builder for creating a [`CdnClient`].
pub struct CdnClientBuilder {
    base_url: String,
    http_client: Option<HttpClient>,
}

impl CdnClientBuilder {
    /// Create a new builder with the specified base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: None,
        }
    }

    /// Use an existing HTTP client instead of a default one.
    pub fn http_client(mut self, client: HttpClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the CDN client.
    pub fn build(self) -> Result<CdnClient> {
        // Validate once so per-request failures are about the path, not the base
        url::Url::parse(&self.base_url)?;
        let base_url = self.base_url.trim_end_matches('/').to_string();

        let http_client = match self.http_client {
            Some(client) => client,
            None => HttpClient::new()?,
        };

        Ok(CdnClient {
            inner: Arc::new(CdnClientInner {
                http_client,
                base_url,
            }),
        })
    }
}

struct CdnClientInner {
    http_client: HttpClient,
    base_url: String,
}

/// Fetches package files by path relative to a fixed base URL.
///
/// Cheaply cloneable; clones share the connection pool.
#[derive(Clone)]
pub struct CdnClient {
    inner: Arc<CdnClientInner>,
}

impl CdnClient {
    /// Create a new builder for the given base URL.
    pub fn builder(base_url: impl Into<String>) -> CdnClientBuilder {
        CdnClientBuilder::new(base_url)
    }

    /// Get the normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Get a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &HttpClient {
        &self.inner.http_client
    }

    /// Join a relative path onto the base URL with exactly one separator.
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.inner.base_url, path)
    }

    /// Fetch a relative path and return its body as text.
    ///
    /// Any transport failure or non-2xx status is returned as an error.
    pub async fn fetch_text(&self, path: &str) -> Result<String> {
        self.inner.http_client.get_text(&self.url_for(path)).await
    }
}

impl std::fmt::Debug for CdnClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CdnClient")
            .field("base_url", &self.inner.base_url)
            .finish()
    }
}
