//! Error taxonomy for API calls.
//!
//! Any non-2xx response is translated into a typed error carrying the
//! original status code and the parsed JSON error body. The client never
//! retries; every failure surfaces to the caller synchronously.

use std::collections::HashMap;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Parsed JSON error body returned by the API.
///
/// Simple failures carry only `message`; validation failures add a map
/// from field name to human-readable violations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
}

impl ErrorBody {
    /// Fallback for responses whose body is not the JSON error shape.
    pub(crate) fn from_raw(status: StatusCode, text: &str) -> Self {
        let trimmed = text.trim();
        let message = if trimmed.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            message,
            errors: HashMap::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DnsimpleError {
    /// HTTP 400, with the server's per-field violation messages.
    #[error("{message}")]
    Validation {
        status: StatusCode,
        message: String,
        errors: HashMap<String, Vec<String>>,
    },

    /// HTTP 404, naming the missing resource.
    #[error("{message}")]
    NotFound { status: StatusCode, message: String },

    /// Any other non-2xx status. Known upstream defects that answer 500
    /// while still applying the operation land here unchanged.
    #[error("server returned {status}: {message}")]
    Server { status: StatusCode, message: String },

    /// Network-level failure before an HTTP status was produced.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl DnsimpleError {
    /// Translate a non-2xx status and its parsed body.
    pub(crate) fn from_response(status: StatusCode, body: ErrorBody) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::Validation {
                status,
                message: body.message,
                errors: body.errors,
            },
            StatusCode::NOT_FOUND => Self::NotFound {
                status,
                message: body.message,
            },
            _ => Self::Server {
                status,
                message: body.message,
            },
        }
    }

    /// The HTTP status of the failed response, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Validation { status, .. }
            | Self::NotFound { status, .. }
            | Self::Server { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
        }
    }

    /// The server's error message, when a body was parsed.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Validation { message, .. }
            | Self::NotFound { message, .. }
            | Self::Server { message, .. } => Some(message),
            Self::Transport(_) => None,
        }
    }

    /// Field violations from a validation failure.
    pub fn field_errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            Self::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_validation_with_field_errors() {
        let body: ErrorBody = serde_json::from_str(
            r#"{
                "message": "Validation failed",
                "errors": {"name": ["can't be blank", "is an invalid domain"]}
            }"#,
        )
        .expect("error body");

        let err = DnsimpleError::from_response(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.message(), Some("Validation failed"));
        let errors = err.field_errors().expect("field errors");
        assert_eq!(errors["name"], ["can't be blank", "is an invalid domain"]);
    }

    #[test]
    fn not_found_keeps_the_server_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message": "Domain `invalid-domain` not found"}"#)
                .expect("error body");

        let err = DnsimpleError::from_response(StatusCode::NOT_FOUND, body);
        match err {
            DnsimpleError::NotFound { status, message } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message, "Domain `invalid-domain` not found");
            }
            other => panic!("expected not-found error, got {other:?}"),
        }
    }

    #[test]
    fn other_statuses_map_to_server_errors() {
        let body = ErrorBody::from_raw(StatusCode::INTERNAL_SERVER_ERROR, "");
        let err = DnsimpleError::from_response(StatusCode::INTERNAL_SERVER_ERROR, body);
        match err {
            DnsimpleError::Server { status, message } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn raw_fallback_keeps_non_json_text() {
        let body = ErrorBody::from_raw(StatusCode::BAD_GATEWAY, "<html>upstream down</html>\n");
        assert_eq!(body.message, "<html>upstream down</html>");
        assert!(body.errors.is_empty());
    }
}
