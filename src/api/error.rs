//! Fetch Error Types
//!
//! Every way a request to the stats API can fail. Callers above the section
//! layer only ever show a generic message; the variants exist for logs.

use thiserror::Error;

/// Errors that can occur when fetching from the stats API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Could not connect
    #[error("Stats API unavailable: {0}")]
    Unavailable(String),

    /// No response within the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Transport or request construction failure
    #[error("Request failed: {0}")]
    Request(String),

    /// Non-2xx response
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Body did not match the expected shape
    #[error("Failed to decode {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl FetchError {
    /// Build a decode error for an endpoint path
    pub fn decode(endpoint: impl Into<String>, err: impl std::fmt::Display) -> Self {
        FetchError::Decode {
            endpoint: endpoint.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "API error 503: maintenance");

        let err = FetchError::decode("amplo-geral", "missing field `nome_municipio`");
        assert_eq!(
            err.to_string(),
            "Failed to decode amplo-geral: missing field `nome_municipio`"
        );
    }
}
