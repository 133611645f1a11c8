//! Routes and navigation intents.
//!
//! Controllers never navigate themselves. They return a [`NavigationIntent`]
//! and the [`crate::app::App`] applies it to its screen stack.

use std::fmt;

use crate::models::{InvalidUserId, UserId};

/// A screen address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    UserList,
    /// `/profile/{id}`
    Profile(UserId),
    /// `/about`
    About,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no screen is registered at '{0}'")]
    UnknownPath(String),
    #[error(transparent)]
    InvalidParam(#[from] InvalidUserId),
}

impl Route {
    /// Parse a path such as `/profile/3`.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] | ["index"] => Ok(Route::UserList),
            ["about"] => Ok(Route::About),
            ["profile", raw] => Ok(Route::Profile(raw.parse()?)),
            _ => Err(RouteError::UnknownPath(path.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::UserList => "/".to_string(),
            Route::Profile(id) => format!("/profile/{}", id),
            Route::About => "/about".to_string(),
        }
    }

    /// Screen name without parameters.
    pub fn target(&self) -> &'static str {
        match self {
            Route::UserList => "index",
            Route::Profile(_) => "profile",
            Route::About => "about",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// What a screen asks the navigation layer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Push a new screen.
    Navigate(Route),
    /// Pop the current screen.
    Back,
}

impl NavigationIntent {
    /// Target screen name, `None` for [`NavigationIntent::Back`].
    pub fn target(&self) -> Option<&'static str> {
        match self {
            NavigationIntent::Navigate(route) => Some(route.target()),
            NavigationIntent::Back => None,
        }
    }

    /// Route parameter carried by the intent, if any.
    pub fn param(&self) -> Option<UserId> {
        match self {
            NavigationIntent::Navigate(Route::Profile(id)) => Some(*id),
            _ => None,
        }
    }
}
