//! Resolution events for local observability.
//!
//! Every event is logged through `tracing` under the `mui_icon::resolver`
//! target. Hosts that want the details elsewhere (a debug panel, metrics,
//! test assertions) can also attach a [`ResolveObserver`].
//!
//! # Example
//!
//! ```ignore
//! let resolver = IconResolver::builder()
//!     .observer(|event: &ResolveEvent| {
//!         if let ResolveEvent::Unresolved { identifier, reason, .. } = event {
//!             eprintln!("{identifier}: {reason}");
//!         }
//!     })
//!     .build()?;
//! ```

use std::sync::Arc;

use mui_icon_net::NetworkError;

use super::cache::MissReason;
use super::extract::Heuristic;
use super::remote::CandidateLocation;

/// Callback receiving every [`ResolveEvent`].
pub type ResolveObserver = Arc<dyn Fn(&ResolveEvent) + Send + Sync>;

/// Something that happened while resolving one identifier.
#[derive(Debug, Clone)]
pub enum ResolveEvent {
    /// The identifier was answered from the cache.
    CacheHit {
        /// Identifier requested.
        identifier: String,
        /// Whether the cached entry holds markup.
        found: bool,
    },
    /// The identifier was answered from the built-in icons.
    FallbackHit {
        /// Identifier requested.
        identifier: String,
    },
    /// A candidate location failed at the transport level.
    CandidateFailed {
        /// Identifier requested.
        identifier: String,
        /// Location that was tried.
        location: CandidateLocation,
        /// Transport error.
        error: NetworkError,
    },
    /// A candidate answered and its text was extracted.
    Resolved {
        /// Identifier requested.
        identifier: String,
        /// Location that answered.
        location: CandidateLocation,
        /// Heuristic that matched.
        heuristic: Heuristic,
    },
    /// Resolution ended without markup.
    Unresolved {
        /// Identifier requested.
        identifier: String,
        /// Mechanically formatted symbol name.
        formatted_name: String,
        /// Alias table entry, if any.
        mapped_name: Option<&'static str>,
        /// Why nothing was produced.
        reason: MissReason,
    },
}

impl ResolveEvent {
    /// The identifier this event concerns.
    pub fn identifier(&self) -> &str {
        match self {
            ResolveEvent::CacheHit { identifier, .. }
            | ResolveEvent::FallbackHit { identifier }
            | ResolveEvent::CandidateFailed { identifier, .. }
            | ResolveEvent::Resolved { identifier, .. }
            | ResolveEvent::Unresolved { identifier, .. } => identifier,
        }
    }

    /// Write this event to the `tracing` subscriber.
    pub fn log(&self) {
        match self {
            ResolveEvent::CacheHit { identifier, found } => {
                tracing::trace!(target: "mui_icon::resolver", %identifier, found, "cache hit");
            }
            ResolveEvent::FallbackHit { identifier } => {
                tracing::debug!(target: "mui_icon::resolver", %identifier, "built-in icon");
            }
            ResolveEvent::CandidateFailed {
                identifier,
                location,
                error,
            } => {
                tracing::debug!(
                    target: "mui_icon::resolver",
                    %identifier,
                    %location,
                    %error,
                    "candidate failed"
                );
            }
            ResolveEvent::Resolved {
                identifier,
                location,
                heuristic,
            } => {
                tracing::info!(
                    target: "mui_icon::resolver",
                    %identifier,
                    %location,
                    %heuristic,
                    "icon resolved"
                );
            }
            ResolveEvent::Unresolved {
                identifier,
                formatted_name,
                mapped_name,
                reason,
            } => {
                tracing::warn!(
                    target: "mui_icon::resolver",
                    %identifier,
                    %formatted_name,
                    mapped_name = mapped_name.unwrap_or("not mapped"),
                    %reason,
                    "icon not resolved"
                );
            }
        }
    }
}
