//! Error types for the transport layer.

use std::fmt;

/// Why a module could not be fetched.
#[derive(Debug, Clone)]
pub enum NetworkError {
    /// The request failed for a reason not covered below.
    Request(String),
    /// The module URL could not be parsed.
    InvalidUrl(String),
    /// The request timed out.
    Timeout,
    /// Connection refused or failed.
    Connection(String),
    /// The response body could not be read as text.
    InvalidBody(String),
    /// The server answered with a non-2xx status.
    HttpStatus {
        /// The HTTP status code.
        status: u16,
    },
    /// Redirect limit exceeded.
    TooManyRedirects,
    /// The configured proxy is unusable.
    Proxy(String),
}

impl NetworkError {
    /// The HTTP status code, if this error came from a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(msg) => write!(f, "HTTP request error: {msg}"),
            Self::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
            Self::Timeout => write!(f, "Request timed out"),
            Self::Connection(msg) => write!(f, "Connection error: {msg}"),
            Self::InvalidBody(msg) => write!(f, "Invalid response body: {msg}"),
            Self::HttpStatus { status } => write!(f, "HTTP {status}"),
            Self::TooManyRedirects => write!(f, "Too many redirects"),
            Self::Proxy(msg) => write!(f, "Proxy error: {msg}"),
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else if err.is_redirect() {
            Self::TooManyRedirects
        } else if err.is_body() || err.is_decode() {
            Self::InvalidBody(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<url::ParseError> for NetworkError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

/// A specialized Result type for transport operations.
pub type Result<T> = std::result::Result<T, NetworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = NetworkError::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "HTTP 404");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_non_status_errors_have_no_code() {
        assert_eq!(NetworkError::Timeout.status(), None);
        assert_eq!(
            NetworkError::Connection("refused".into()).to_string(),
            "Connection error: refused"
        );
    }

    #[test]
    fn test_from_url_parse_error() {
        let err: NetworkError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, NetworkError::InvalidUrl(_)));
    }
}
