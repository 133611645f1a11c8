//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET against the directory service

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
