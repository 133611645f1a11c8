//! AppMessage enum for async communication within the application.

use crate::error::FetchResult;
use crate::models::{Profile, UserId, UserRecord};
use crate::screens::ScreenId;

/// Completions sent from fetch tasks back to the event loop.
///
/// Each carries the screen instance and cycle that started it so stale
/// results can be recognised and dropped.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// `GET /users` finished for a list screen
    UsersLoaded {
        screen: ScreenId,
        cycle: u64,
        result: FetchResult<Vec<UserRecord>>,
    },
    /// User and posts fetches finished for a profile screen
    ProfileLoaded {
        screen: ScreenId,
        cycle: u64,
        user_id: UserId,
        result: FetchResult<Profile>,
    },
}

impl AppMessage {
    pub fn screen(&self) -> ScreenId {
        match self {
            AppMessage::UsersLoaded { screen, .. } | AppMessage::ProfileLoaded { screen, .. } => {
                *screen
            }
        }
    }
}
