//! Application error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the remote-data layer.
///
/// Only catalog-level failures propagate; per-branch and per-build failures
/// are absorbed to `None`/`0` sentinels at their call sites.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("HTTP error fetching {url}: status {status}")]
    Http { status: u16, url: String },

    #[error("JSON parsing error: {message}")]
    Json { message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("{what} not provided")]
    MissingInput { what: &'static str },
}

impl Error {
    pub fn http(status: u16, url: impl Into<String>) -> Self {
        Self::Http {
            status,
            url: url.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn missing_input(what: &'static str) -> Self {
        Self::MissingInput { what }
    }

    /// HTTP 404 is modeled as "no data", not a failure, at branch granularity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Http { status: 404, .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::http(500, "https://example.org/devices.json");
        assert_eq!(
            err.to_string(),
            "HTTP error fetching https://example.org/devices.json: status 500"
        );

        let err = Error::missing_input("Codename");
        assert_eq!(err.to_string(), "Codename not provided");
    }

    #[test]
    fn test_error_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_error_is_not_found() {
        assert!(Error::http(404, "u").is_not_found());
        assert!(!Error::http(500, "u").is_not_found());
        assert!(!Error::network("offline").is_not_found());
    }
}
