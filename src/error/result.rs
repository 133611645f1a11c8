//! Result type alias for fetch operations.

use super::fetch::FetchError;

/// Type alias for Results using [`FetchError`].
pub type FetchResult<T> = Result<T, FetchError>;
