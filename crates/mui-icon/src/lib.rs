//! Material UI icon resolution for mui-icon.
//!
//! This crate turns a kebab-case icon identifier such as `"shopping-cart"`
//! into a self-contained SVG document:
//!
//! - **Names**: identifiers are mapped to package export names through an
//!   alias table, falling back to a mechanical PascalCase conversion
//! - **Built-in icons**: a small set of common icons is answered without any
//!   network access
//! - **Remote lookup**: up to eight candidate module paths are fetched from
//!   the package CDN, strictly in order
//! - **Extraction**: an ordered chain of text heuristics pulls path data out
//!   of whatever module format was served
//! - **Caching**: every outcome, hit or miss, is remembered per resolver
//!
//! Resolution never surfaces errors to the caller; failures end in `None`
//! and are reported through `tracing` and an optional
//! [`ResolveObserver`](diagnostics::ResolveObserver).
//!
//! ## Quick Start
//!
//! ```ignore
//! use mui_icon::IconResolver;
//!
//! let resolver = IconResolver::new()?;
//! if let Some(svg) = resolver.resolve("home").await {
//!     println!("{svg}");
//! }
//! ```
//!
//! ## Custom transport
//!
//! ```ignore
//! use mui_icon::{IconResolver, ModuleFetcher};
//!
//! struct Offline;
//!
//! impl ModuleFetcher for Offline {
//!     async fn fetch(&self, path: &str) -> Result<String, mui_icon_net::NetworkError> {
//!         std::fs::read_to_string(format!("node_modules/@mui/icons-material/{path}"))
//!             .map_err(|e| mui_icon_net::NetworkError::Connection(e.to_string()))
//!     }
//! }
//!
//! let resolver = IconResolver::with_fetcher(Offline);
//! ```

pub mod alias;
mod cache;
mod config;
pub mod diagnostics;
mod error;
pub mod extract;
pub mod fallback;
pub mod markup;
mod name;
pub mod remote;
mod resolver;

pub use cache::{CacheEntry, MissReason, ResolutionCache};
pub use config::{DEFAULT_BASE_URL, ResolverConfig};
pub use diagnostics::{ResolveEvent, ResolveObserver};
pub use error::{Error, LookupError, Result};
pub use extract::{Extraction, Heuristic, extract_markup};
pub use name::{ResolvedName, SEGMENT_SEPARATOR, SYMBOL_SUFFIX, resolve_name, to_symbol_name};
pub use remote::{
    CandidateAttempt, CandidateLocation, CandidateVariant, FetchedModule, HttpModuleFetcher,
    ModuleFetcher, RemoteLookup, candidate_locations,
};
pub use resolver::{IconResolver, IconResolverBuilder, Resolution};

pub use mui_icon_net::NetworkError;
