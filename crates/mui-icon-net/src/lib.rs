//! Networking layer for mui-icon.
//!
//! This crate provides the transport used to pull icon modules from a
//! package CDN:
//!
//! - **HTTP Client**: configurable `reqwest` wrapper with timeouts, redirect
//!   policy, user agent and proxy settings
//! - **CDN Client**: joins relative module paths onto a fixed base URL and
//!   returns response bodies as text
//! - **Runtime**: a shared tokio runtime for synchronous callers
//!
//! ## Configuration
//!
//! ```ignore
//! let client = HttpClient::builder()
//!     .timeout(Duration::from_secs(10))
//!     .user_agent("MyApp/1.0")
//!     .build()?;
//! ```
//!
//! ## Fetching module text
//!
//! ```ignore
//! use mui_icon_net::CdnClient;
//!
//! let cdn = CdnClient::builder("https://unpkg.com/@mui/icons-material/").build()?;
//! match cdn.fetch_text("esm/Home.js").await {
//!     Ok(source) => println!("{} bytes", source.len()),
//!     Err(err) => eprintln!("candidate failed: {err}"),
//! }
//! ```

mod error;
pub mod http;

pub use error::{NetworkError, Result};

pub use http::{CdnClient, CdnClientBuilder, HttpClient, HttpClientBuilder, HttpClientConfig};
