//! Error kind classification.
//!
//! The directory service gives no structured not-found signal, so failures
//! are split into only two kinds: the request itself failed, or it worked and
//! the resource is absent.

use std::fmt;

/// High-level kind of a fetch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Network unreachable, non-2xx status, undecodable body, or cancellation.
    Transport,

    /// The requested resource does not exist (or the request named no valid one).
    NotFound,
}

impl ErrorKind {
    /// Returns a short label suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Transport => "transport",
            ErrorKind::NotFound => "not_found",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
