//! Static "about" screen.

use crate::navigation::NavigationIntent;

/// Fixed application information shown on the about screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub data_source: &'static str,
    pub technologies: &'static [&'static str],
    /// (title, description)
    pub features: &'static [(&'static str, &'static str)],
}

pub const ABOUT: AboutInfo = AboutInfo {
    name: "User Browser",
    version: env!("CARGO_PKG_VERSION"),
    tagline: "About this application",
    description: "User Browser lists the people in a public directory and shows \
                  each person's details and posts.",
    data_source: "Users and posts come from JSONPlaceholder, a free fake REST API \
                  for testing and prototyping.",
    technologies: &["Rust", "tokio", "reqwest", "ratatui", "JSONPlaceholder"],
    features: &[
        ("User List", "Browse all registered users"),
        ("Profile Details", "Complete user information"),
        ("User Posts", "View posts from each user"),
        ("Modern UI", "Responsive keyboard-driven terminal layout"),
    ],
};

/// The about screen has no state and performs no fetches.
#[derive(Debug, Clone, Copy, Default)]
pub struct AboutScreen;

impl AboutScreen {
    pub fn info(&self) -> &'static AboutInfo {
        &ABOUT
    }

    pub fn go_back(&self) -> NavigationIntent {
        NavigationIntent::Back
    }
}
