//! HTTP transport for fetching icon modules.
//!
//! # Example
//!
//! ```ignore
//! use mui_icon_net::http::{CdnClient, HttpClient};
//!
//! let client = HttpClient::builder().timeout(Duration::from_secs(10)).build()?;
//! let cdn = CdnClient::builder("https://unpkg.com/@mui/icons-material/")
//!     .http_client(client)
//!     .build()?;
//!
//! let source = cdn.fetch_text("esm/ShoppingCart.js").await?;
//! ```

mod cdn;
mod client;
pub mod runtime;

pub use cdn::{CdnClient, CdnClientBuilder};
pub use client::{HttpClient, HttpClientBuilder, HttpClientConfig};
