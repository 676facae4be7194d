//! HTTP client used to pull icon modules as text.

use std::sync::Arc;
use std::time::Duration;

use reqwest::redirect::Policy;

use crate::error::{NetworkError, Result};

/// Transport settings shared by every module request.
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// Whole-request timeout.
    pub timeout: Option<Duration>,
    /// Connect timeout.
    pub connect_timeout: Option<Duration>,
    /// Redirects followed per request; `None` disables redirects.
    pub redirect_limit: Option<usize>,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Proxy URL.
    pub proxy: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            // unpkg answers unversioned package paths with a redirect
            redirect_limit: Some(10),
            user_agent: format!("mui-icon/{} (Rust)", env!("CARGO_PKG_VERSION")),
            proxy: None,
        }
    }
}

/// Builder for an [`HttpClient`].
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    config: HttpClientConfig,
}

impl HttpClientBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: HttpClientConfig) -> Self {
        Self { config }
    }

    /// Set the whole-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    /// Follow at most `limit` redirects.
    pub fn redirect_limit(mut self, limit: usize) -> Self {
        self.config.redirect_limit = Some(limit);
        self
    }

    /// Treat redirects as final responses.
    pub fn no_redirects(mut self) -> Self {
        self.config.redirect_limit = None;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Route requests through a proxy.
    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy_url.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<HttpClient> {
        let config = self.config;
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        builder = builder.redirect(match config.redirect_limit {
            Some(limit) => Policy::limited(limit),
            None => Policy::none(),
        });

        if let Some(proxy_url) = &config.proxy {
            let proxy =
                reqwest::Proxy::all(proxy_url).map_err(|e| NetworkError::Proxy(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        Ok(HttpClient {
            client: builder.build()?,
            config: Arc::new(config),
        })
    }
}

/// Fetches module sources over HTTP.
///
/// Cheaply cloneable; clones share the connection pool.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: Arc<HttpClientConfig>,
}

impl HttpClient {
    /// Create a client with default settings.
    pub fn new() -> Result<Self> {
        HttpClientBuilder::new().build()
    }

    /// Create a builder.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// GET `url` and return the body as text.
    ///
    /// A non-2xx status is an error; the body of such a response is discarded.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let url = url::Url::parse(url)?;
        tracing::trace!(target: "mui_icon_net::http", %url, "requesting module");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!(
            target: "mui_icon_net::http",
            status = status.as_u16(),
            url = %response.url(),
            "received response"
        );

        if !status.is_success() {
            return Err(NetworkError::HttpStatus {
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpClientConfig::default();
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.redirect_limit, Some(10));
        assert!(config.user_agent.starts_with("mui-icon/"));
        assert!(config.proxy.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(5))
            .no_redirects()
            .user_agent("IconTest/1.0")
            .build()
            .expect("Failed to build client");

        assert_eq!(client.config().timeout, Some(Duration::from_secs(5)));
        assert_eq!(client.config().redirect_limit, None);
        assert_eq!(client.config().user_agent, "IconTest/1.0");
    }
}
