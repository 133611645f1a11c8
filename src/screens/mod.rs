//! Screen controllers.
//!
//! Each controller owns one [`crate::view_state::ViewStateStore`] and is the
//! only thing that mutates it. Fetches run on spawned tasks that report back
//! through [`crate::app::AppMessage`]; the event loop hands those messages to
//! the owning controller, so every state transition happens on the loop.
//!
//! - [`UserListController`]: fetch-all once per activation
//! - [`ProfileController`]: user + posts keyed by a re-suppliable id
//! - [`AboutScreen`]: static information, no fetches

pub mod about;
pub mod list;
pub mod profile;

pub use about::{AboutInfo, AboutScreen, ABOUT};
pub use list::UserListController;
pub use profile::ProfileController;

use std::fmt;

/// Identifies one screen instance on the navigation stack.
///
/// Completions carry it so they reach the instance that started them, even
/// when two screens of the same kind exist over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(pub u64);

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen-{}", self.0)
    }
}
