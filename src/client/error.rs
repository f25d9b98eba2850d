use std::time::Duration;

use serde_json::Value;

use crate::domain::ValidationError;
use crate::settings::ConfigurationError;
use crate::transport::BoxError;

/// The HTTP exchange failed.
///
/// When a response was received, the upstream status and body are kept for
/// inspection by the caller.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// No complete response arrived within the configured timeout.
    #[error("timeout of {}ms exceeded", timeout.as_millis())]
    Timeout {
        timeout: Duration,
        #[source]
        source: BoxError,
    },

    /// DNS, connection, TLS or other transport failure.
    #[error("network error: {source}")]
    Network {
        #[source]
        source: BoxError,
    },

    /// The API answered with a non-2xx status.
    #[error("request failed with status code {status}")]
    HttpStatus { status: u16, body: Option<Value> },

    /// The base URL and path do not form a valid URL.
    #[error("invalid request URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl RequestError {
    /// Upstream HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Upstream response body, when a non-empty response was received.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::HttpStatus { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`crate::SakariClient`].
///
/// Configuration and request failures are kept apart so callers can choose
/// how to present them; neither is retried.
pub enum SakariError {
    /// A required credential is missing.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The HTTP exchange failed.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// A request body could not be serialized to JSON.
    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl SakariError {
    /// The underlying request error, if this is one.
    pub fn as_request(&self) -> Option<&RequestError> {
        match self {
            Self::Request(err) => Some(err),
            _ => None,
        }
    }

    /// Process exit status for the command-line front end.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 2,
            Self::Request(_) => 3,
            Self::Encode(_) | Self::Validation(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn http_status_exposes_status_and_body() {
        let err = RequestError::HttpStatus {
            status: 401,
            body: Some(json!({"error": "unauthorized"})),
        };
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.body(), Some(&json!({"error": "unauthorized"})));
        assert!(!err.is_timeout());
        assert_eq!(err.to_string(), "request failed with status code 401");
    }

    #[test]
    fn timeout_message_names_the_limit() {
        let err = RequestError::Timeout {
            timeout: Duration::from_millis(30_000),
            source: "deadline".into(),
        };
        assert!(err.is_timeout());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "timeout of 30000ms exceeded");
    }

    #[test]
    fn exit_codes_distinguish_error_kinds() {
        let config = SakariError::from(ConfigurationError::missing(
            "clientId",
            "Client ID",
            "SAKARI_CLIENT_ID",
        ));
        assert_eq!(config.exit_code(), 2);

        let request = SakariError::from(RequestError::HttpStatus {
            status: 500,
            body: None,
        });
        assert_eq!(request.exit_code(), 3);
        assert_eq!(request.as_request().and_then(RequestError::status), Some(500));
    }
}
