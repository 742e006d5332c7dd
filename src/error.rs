//! Unified error handling for the trendwatch crate
//!
//! Provider-side failures are non-fatal and are contained at the category
//! boundary by the assembler; everything else (I/O, serialization, config)
//! is fatal and propagates to the process exit.

use std::io;
use thiserror::Error;

/// Errors raised while talking to the external trends provider
///
/// All variants are treated identically by the assembler: the category that
/// triggered the error falls back to curated backup scoring and the run
/// continues with the next category.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout
    #[error("request timed out")]
    Timeout,

    /// Provider rate limit hit (429)
    #[error("rate limited by provider")]
    RateLimited,

    /// Authentication rejected (401/403)
    #[error("authentication rejected by provider (status {0})")]
    Auth(u16),

    /// Any other non-success status
    #[error("provider returned status {0}")]
    Status(u16),

    /// Response body did not match the expected shape
    #[error("malformed provider response: {0}")]
    Decode(String),

    /// Keyword given to the fetcher was empty
    #[error("keyword must not be empty")]
    EmptyKeyword,
}

/// Unified error type for the trendwatch crate
#[derive(Error, Debug)]
pub enum Error {
    /// Trends provider errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this error is scoped to one category (non-fatal to the run)
    pub fn is_category_scoped(&self) -> bool {
        matches!(self, Self::Provider(_))
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_errors_are_category_scoped() {
        let err = Error::Provider(ProviderError::Timeout);
        assert!(err.is_category_scoped());

        let err = Error::config("bad base_url");
        assert!(!err.is_category_scoped());
    }

    #[test]
    fn test_provider_error_conversion() {
        let provider_err = ProviderError::RateLimited;
        let unified: Error = provider_err.into();
        assert!(matches!(unified, Error::Provider(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ProviderError::Status(503);
        assert_eq!(err.to_string(), "provider returned status 503");

        let err = ProviderError::Auth(403);
        assert!(err.to_string().contains("403"));
    }
}
