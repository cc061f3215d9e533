//! Error types for costwatch
//!
//! All errors are derived from `thiserror` for convenient error handling
//! and automatic `From` implementations.

use thiserror::Error;

/// Main error type for costwatch operations
///
/// Delivery failures deliberately split into two variants: [`Rejected`]
/// means the remote endpoint answered and refused the payload, while
/// [`Network`] covers transport-level failures (timeout, DNS, connection
/// refused). Callers need to tell these apart even though neither is
/// retried.
///
/// [`Rejected`]: CostwatchError::Rejected
/// [`Network`]: CostwatchError::Network
#[derive(Error, Debug)]
pub enum CostwatchError {
    /// Transport-level HTTP failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The remote endpoint answered with an error status
    #[error("Remote rejected request (HTTP {status}): {detail}")]
    Rejected {
        /// HTTP status code returned by the remote
        status: u16,
        /// Response body, as far as it could be read
        detail: String,
    },

    /// A cost record in the fetched batch failed validation
    #[error("Invalid cost record: {0}")]
    InvalidRecord(String),

    /// Invalid timezone
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in costwatch
pub type Result<T> = std::result::Result<T, CostwatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CostwatchError::Rejected {
            status: 403,
            detail: "invalid token".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Remote rejected request (HTTP 403): invalid token"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: CostwatchError = json_error.into();
        assert!(matches!(error, CostwatchError::Json(_)));
    }
}
