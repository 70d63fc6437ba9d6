//! Error types for Posterwall fetch operations

use thiserror::Error;

/// Main error type for collection fetch operations
///
/// Every variant takes the same path at the gallery boundary (log and keep
/// last-known-good state); the split exists for diagnostics and tests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Endpoint URL is empty or not parseable
    #[error("Invalid collections URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// Transport-level failure (connection refused, timeout, TLS)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Endpoint answered with a non-2xx status
    #[error("Unexpected status {status} from collections endpoint")]
    Status { status: reqwest::StatusCode },

    /// Body was not a JSON array of movie collections
    #[error("Malformed collections body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias using FetchError
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_display() {
        let err = FetchError::InvalidUrl {
            url: String::new(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        let msg = format!("{}", err);
        assert!(msg.starts_with("Invalid collections URL"));
    }

    #[test]
    fn test_status_display() {
        let err = FetchError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(
            format!("{}", err),
            "Unexpected status 404 Not Found from collections endpoint"
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let fetch_err: FetchError = json_err.into();
        assert!(matches!(fetch_err, FetchError::Decode(_)));
    }
}
