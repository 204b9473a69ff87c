//! Error types for address validation.

use thiserror::Error;

/// Failure talking to, or interpreting the answer of, the verification provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    // === Network ===
    #[error("connection failed: {0}")]
    Transport(String),

    #[error("provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    // === Response shape ===
    #[error("malformed provider response: {0}")]
    Malformed(String),

    #[error("Missing results from provider: expected {expected}, got {actual}")]
    MissingResults { expected: usize, actual: usize },

    // === Generic fallback ===
    #[error("{0}")]
    Other(String),
}

/// Errors returned by the validation client and provider construction.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Provider credentials are absent or empty.
    #[error("Missing required provider credentials (SMARTY_AUTH_ID, SMARTY_AUTH_TOKEN)")]
    MissingCredentials,

    #[error("invalid provider URL {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    /// Any provider failure; fatal for the whole validation call.
    #[error("Error validating addresses: {0}")]
    Provider(#[source] ProviderError),
}

impl From<ProviderError> for ValidationError {
    fn from(err: ProviderError) -> Self {
        Self::Provider(err)
    }
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_are_wrapped() {
        let err: ValidationError = ProviderError::MissingResults {
            expected: 10,
            actual: 9,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Error validating addresses: Missing results from provider: expected 10, got 9"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn status_error_display() {
        let err = ProviderError::Status {
            status: 401,
            message: "unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "provider returned HTTP 401: unauthorized");
    }
}
