//! The error surfaced by every API client operation.

use thiserror::Error;

use super::category::ErrorKind;
use crate::traits::HttpError;

/// Why a fetch failed.
///
/// `Clone` so it can sit inside a [`crate::view_state::ViewState`] snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection to the server failed.
    #[error("connection to '{url}' failed: {message}")]
    ConnectionFailed { url: String, message: String },

    /// The configured request timeout elapsed.
    #[error("request to '{url}' timed out")]
    Timeout { url: String },

    /// Non-2xx response that does not mean "not found".
    #[error("'{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Body could not be decoded into the expected shape.
    #[error("invalid response from '{url}': {message}")]
    InvalidResponse { url: String, message: String },

    /// The resource is logically absent.
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    /// A route parameter that does not name any user.
    #[error("'{raw}' is not a valid user id")]
    InvalidId { raw: String },

    /// Anything else the transport reported.
    #[error("network error: {message}")]
    Other { message: String },
}

impl FetchError {
    /// Attach the request URL to a transport-level error.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => FetchError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(_) => FetchError::Timeout {
                url: url.to_string(),
            },
            HttpError::InvalidUrl(message) => FetchError::Other {
                message: format!("invalid URL '{}': {}", url, message),
            },
            HttpError::Other(message) => FetchError::Other { message },
        }
    }

    /// The user resource is absent.
    pub fn user_not_found(id: impl ToString) -> Self {
        FetchError::NotFound {
            resource: "user",
            id: id.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::NotFound { .. } | FetchError::InvalidId { .. } => ErrorKind::NotFound,
            _ => ErrorKind::Transport,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::ConnectionFailed { .. } => {
                "Unable to reach the directory service. Please check your internet connection."
                    .to_string()
            }
            FetchError::Timeout { .. } => {
                "The directory service took too long to respond.".to_string()
            }
            FetchError::HttpStatus { status, .. } => match *status {
                500..=599 => {
                    "The directory service is having trouble. Please try again later.".to_string()
                }
                _ => format!("The directory service returned an error (HTTP {}).", status),
            },
            FetchError::InvalidResponse { .. } => {
                "Received an invalid response from the directory service.".to_string()
            }
            FetchError::NotFound { resource, id } => {
                format!("No {} with id {} exists.", resource, id)
            }
            FetchError::InvalidId { raw } => format!("'{}' is not a valid user id.", raw),
            FetchError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::ConnectionFailed { .. } => "E_NET_CONN",
            FetchError::Timeout { .. } => "E_NET_TIMEOUT",
            FetchError::HttpStatus { .. } => "E_NET_HTTP",
            FetchError::InvalidResponse { .. } => "E_NET_INVALID",
            FetchError::NotFound { .. } => "E_NOT_FOUND",
            FetchError::InvalidId { .. } => "E_INVALID_ID",
            FetchError::Other { .. } => "E_NET_OTHER",
        }
    }
}
