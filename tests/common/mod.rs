//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rolodex::adapters::MockHttpClient;
use rolodex::api::DirectoryClient;
use rolodex::app::AppMessage;
use rolodex::models::UserId;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub const BASE: &str = "http://directory.test";

/// A full user object in the directory service's JSON shape.
pub fn user_json(id: u64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "username": format!("user{}", id),
        "email": format!("user{}@example.com", id),
        "phone": "1-770-736-8031",
        "website": "example.org",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}

pub fn post_json(id: u64, user_id: u64, title: &str, body: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "userId": user_id, "title": title, "body": body })
}

pub fn uid(raw: u64) -> UserId {
    UserId::new(raw).expect("test ids are positive")
}

pub fn users_url() -> String {
    format!("{}/users", BASE)
}

pub fn user_url(id: u64) -> String {
    format!("{}/users/{}", BASE, id)
}

pub fn posts_url(id: u64) -> String {
    format!("{}/posts?userId={}", BASE, id)
}

/// A directory client backed by a fresh mock transport.
pub fn mock_client() -> (DirectoryClient, MockHttpClient) {
    let mock = MockHttpClient::new();
    let client = DirectoryClient::with_http(BASE, Arc::new(mock.clone()));
    (client, mock)
}

/// Wait for the next completion, failing the test after five seconds.
pub async fn next_message(rx: &mut mpsc::UnboundedReceiver<AppMessage>) -> AppMessage {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for a fetch completion")
        .expect("message channel closed")
}
