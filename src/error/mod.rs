//! Error handling for directory fetches.
//!
//! | Kind | Variants |
//! |------|----------|
//! | Transport | connection, timeout, HTTP status, invalid body, other |
//! | NotFound | absent user, invalid route id |
//!
//! Every API client operation returns [`FetchResult`]. Controllers never
//! retry; a failure moves the whole fetch cycle to the error state.

mod category;
mod fetch;
mod result;

pub use category::ErrorKind;
pub use fetch::FetchError;
pub use result::FetchResult;
