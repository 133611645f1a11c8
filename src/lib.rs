//! Rolodex - a terminal client for browsing a people directory.
//!
//! The library holds the fetch and view-state core (API client, per-screen
//! stores, screen controllers, navigation) plus the terminal front end the
//! binary drives. Modules are public for integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod screens;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
