//! Resolver configuration.

use mui_icon_net::HttpClientConfig;

/// Package root on the public CDN.
pub const DEFAULT_BASE_URL: &str = "https://unpkg.com/@mui/icons-material/";

/// Configuration for an [`IconResolver`](crate::IconResolver).
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    /// Base URL the candidate module paths are joined onto.
    pub base_url: String,
    /// Whether built-in icons are consulted before the network.
    pub use_fallbacks: bool,
    /// HTTP transport settings.
    pub http: HttpClientConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            use_fallbacks: true,
            http: HttpClientConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.base_url, "https://unpkg.com/@mui/icons-material/");
        assert!(config.use_fallbacks);
        assert!(config.http.timeout.is_some());
    }
}
