//! Error types for icon resolution.
//!
//! None of these reach the caller of [`crate::IconResolver::resolve`]; they
//! describe why a lookup continued or ended and feed diagnostics.

use mui_icon_net::NetworkError;

use super::remote::CandidateAttempt;

/// Result type alias for resolver construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while setting up a resolver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP transport could not be created.
    #[error("Failed to create HTTP transport: {0}")]
    Transport(#[from] NetworkError),
}

/// Terminal failure of a remote lookup.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    /// Every candidate location failed at the transport level.
    #[error("No module found for '{symbol}' after {} candidates", .attempts.len())]
    NotFound {
        /// Symbol name the candidates were derived from.
        symbol: String,
        /// Each failed attempt, in the order tried.
        attempts: Vec<CandidateAttempt>,
    },
}

impl LookupError {
    /// The failed attempts behind this error.
    pub fn attempts(&self) -> &[CandidateAttempt] {
        match self {
            Self::NotFound { attempts, .. } => attempts,
        }
    }
}
