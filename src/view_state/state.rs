use crate::error::FetchError;

/// Lifecycle of one asynchronous load. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// A fetch cycle is in flight.
    Loading,
    /// The cycle completed with a payload.
    Ready(T),
    /// The cycle failed; nothing partial is kept.
    Error(FetchError),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            ViewState::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Short label for logs.
    pub fn tag(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Ready(_) => "ready",
            ViewState::Error(_) => "error",
        }
    }
}
