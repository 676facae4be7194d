//! Icon resolution and caching.
//!
//! This module provides the [`IconResolver`] which turns an identifier into
//! SVG markup: cache first, then the built-in icons, then the remote package
//! through the candidate locations and the extraction chain. Every outcome,
//! hit or miss, is cached for the lifetime of the resolver.

use std::sync::Arc;
use std::time::Duration;

use mui_icon_net::http::runtime;
use mui_icon_net::{CdnClient, HttpClientBuilder};

use super::alias;
use super::cache::{CacheEntry, MissReason, ResolutionCache};
use super::config::ResolverConfig;
use super::diagnostics::{ResolveEvent, ResolveObserver};
use super::extract::{Heuristic, extract_markup};
use super::fallback;
use super::name::{resolve_name, to_symbol_name};
use super::remote::{CandidateLocation, HttpModuleFetcher, ModuleFetcher, RemoteLookup};

/// Outcome of one resolution, with how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The identifier was empty; nothing was attempted.
    Empty,
    /// Answered from the cache.
    Cached(CacheEntry),
    /// Answered from the built-in icons.
    Fallback(String),
    /// Fetched and extracted from the remote package.
    Resolved {
        /// Location that answered.
        location: CandidateLocation,
        /// Heuristic that produced the markup.
        heuristic: Heuristic,
        /// Extracted markup.
        markup: String,
    },
    /// Nothing could be produced.
    Unresolved(MissReason),
}

impl Resolution {
    /// The markup, if any.
    pub fn markup(&self) -> Option<&str> {
        match self {
            Resolution::Cached(entry) => entry.markup(),
            Resolution::Fallback(markup) | Resolution::Resolved { markup, .. } => Some(markup),
            Resolution::Empty | Resolution::Unresolved(_) => None,
        }
    }

    /// Consume the resolution, keeping only the markup.
    pub fn into_markup(self) -> Option<String> {
        match self {
            Resolution::Cached(CacheEntry::Found(markup))
            | Resolution::Fallback(markup)
            | Resolution::Resolved { markup, .. } => Some(markup),
            _ => None,
        }
    }

    fn to_cache_entry(&self) -> Option<CacheEntry> {
        match self {
            Resolution::Fallback(markup) | Resolution::Resolved { markup, .. } => {
                Some(CacheEntry::Found(markup.clone()))
            }
            Resolution::Unresolved(reason) => Some(CacheEntry::Missing(reason.clone())),
            Resolution::Empty | Resolution::Cached(_) => None,
        }
    }
}

/// Builder for an HTTP-backed [`IconResolver`].
pub struct IconResolverBuilder {
    config: ResolverConfig,
    observer: Option<ResolveObserver>,
}

impl Default for IconResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IconResolverBuilder {
    /// Create a builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
            observer: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the package base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.http.connect_timeout = Some(timeout);
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.http.user_agent = user_agent.into();
        self
    }

    /// Route requests through a proxy.
    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.config.http.proxy = Some(proxy_url.into());
        self
    }

    /// Skip the built-in icons and always go to the network.
    pub fn without_fallbacks(mut self) -> Self {
        self.config.use_fallbacks = false;
        self
    }

    /// Attach an observer for resolution events.
    pub fn observer<O>(mut self, observer: O) -> Self
    where
        O: Fn(&ResolveEvent) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Build the resolver.
    pub fn build(self) -> crate::Result<IconResolver> {
        let http_client = HttpClientBuilder::from_config(self.config.http).build()?;
        let cdn = CdnClient::builder(self.config.base_url)
            .http_client(http_client)
            .build()?;

        Ok(IconResolver {
            lookup: RemoteLookup::new(HttpModuleFetcher::new(cdn)),
            cache: ResolutionCache::new(),
            use_fallbacks: self.config.use_fallbacks,
            observer: self.observer,
        })
    }
}

/// Resolves icon identifiers into SVG markup, with caching.
///
/// Resolution never fails loudly: every problem ends in `None` from
/// [`resolve`](Self::resolve), with details available through `tracing` and
/// an optional [`ResolveObserver`].
///
/// # Example
///
/// ```ignore
/// use mui_icon::IconResolver;
///
/// let resolver = IconResolver::new()?;
///
/// // Built-in, no network
/// let home = resolver.resolve("home").await;
///
/// // Fetched from the package, then cached
/// let cart = resolver.resolve("local-shipping").await;
/// ```
pub struct IconResolver<F = HttpModuleFetcher> {
    lookup: RemoteLookup<F>,
    cache: ResolutionCache,
    use_fallbacks: bool,
    observer: Option<ResolveObserver>,
}

impl IconResolver<HttpModuleFetcher> {
    /// Create a resolver against the public CDN with default settings.
    pub fn new() -> crate::Result<Self> {
        IconResolverBuilder::new().build()
    }

    /// Create a resolver from a configuration.
    pub fn from_config(config: ResolverConfig) -> crate::Result<Self> {
        IconResolverBuilder::new().config(config).build()
    }

    /// Create a builder for an HTTP-backed resolver.
    pub fn builder() -> IconResolverBuilder {
        IconResolverBuilder::new()
    }
}

impl<F: ModuleFetcher> IconResolver<F> {
    /// Create a resolver over a custom module fetcher.
    pub fn with_fetcher(fetcher: F) -> Self {
        Self {
            lookup: RemoteLookup::new(fetcher),
            cache: ResolutionCache::new(),
            use_fallbacks: true,
            observer: None,
        }
    }

    /// Skip the built-in icons and always go to the fetcher.
    pub fn without_fallbacks(mut self) -> Self {
        self.use_fallbacks = false;
        self
    }

    /// Attach an observer for resolution events.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: Fn(&ResolveEvent) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// The module fetcher.
    pub fn fetcher(&self) -> &F {
        self.lookup.fetcher()
    }

    /// The resolution cache.
    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    /// Resolve an identifier to SVG markup.
    ///
    /// Returns `None` when the icon cannot be produced from any source.
    pub async fn resolve(&self, identifier: &str) -> Option<String> {
        self.resolve_detailed(identifier).await.into_markup()
    }

    /// Resolve an identifier, blocking on the shared runtime.
    ///
    /// Must not be called from inside an async context.
    pub fn resolve_blocking(&self, identifier: &str) -> Option<String> {
        runtime::block_on(self.resolve(identifier))
    }

    /// Resolve an identifier and report how the result was reached.
    pub async fn resolve_detailed(&self, identifier: &str) -> Resolution {
        if identifier.is_empty() {
            tracing::warn!(target: "mui_icon::resolver", "icon name is required");
            return Resolution::Empty;
        }

        if let Some(entry) = self.cache.get(identifier) {
            self.emit(ResolveEvent::CacheHit {
                identifier: identifier.to_string(),
                found: !entry.is_missing(),
            });
            return Resolution::Cached(entry);
        }

        let resolution = self.resolve_uncached(identifier).await;
        let Some(entry) = resolution.to_cache_entry() else {
            return resolution;
        };

        // An overlapping resolution of the same identifier may have stored first
        let stored = self.cache.insert(identifier, entry.clone());
        if stored != entry {
            return Resolution::Cached(stored);
        }
        resolution
    }

    async fn resolve_uncached(&self, identifier: &str) -> Resolution {
        if self.use_fallbacks
            && let Some(markup) = fallback::lookup(identifier)
        {
            self.emit(ResolveEvent::FallbackHit {
                identifier: identifier.to_string(),
            });
            return Resolution::Fallback(markup.to_string());
        }

        let name = resolve_name(identifier);
        let outcome = self.lookup.fetch_first(&name).await;

        let attempts = match &outcome {
            Ok(module) => module.failed_attempts.as_slice(),
            Err(err) => err.attempts(),
        };
        for attempt in attempts {
            self.emit(ResolveEvent::CandidateFailed {
                identifier: identifier.to_string(),
                location: attempt.location.clone(),
                error: attempt.error.clone(),
            });
        }

        let reason = match outcome {
            Ok(module) => match extract_markup(&module.text) {
                Some(extraction) => {
                    self.emit(ResolveEvent::Resolved {
                        identifier: identifier.to_string(),
                        location: module.location.clone(),
                        heuristic: extraction.heuristic,
                    });
                    return Resolution::Resolved {
                        location: module.location,
                        heuristic: extraction.heuristic,
                        markup: extraction.markup,
                    };
                }
                None => MissReason::Unextractable {
                    location: module.location,
                },
            },
            Err(_) => MissReason::NotFound,
        };

        self.emit(ResolveEvent::Unresolved {
            identifier: identifier.to_string(),
            formatted_name: to_symbol_name(identifier).to_string(),
            mapped_name: alias::lookup(identifier),
            reason: reason.clone(),
        });
        Resolution::Unresolved(reason)
    }

    fn emit(&self, event: ResolveEvent) {
        event.log();
        if let Some(observer) = &self.observer {
            observer(&event);
        }
    }
}

impl<F> std::fmt::Debug for IconResolver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconResolver")
            .field("cached", &self.cache.len())
            .field("use_fallbacks", &self.use_fallbacks)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
