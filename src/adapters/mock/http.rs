//! Mock HTTP client for testing.
//!
//! Returns predefined responses or errors per URL, records every request, and
//! can hold a response back until the test releases it. The hold is what lets
//! tests force a specific completion order between overlapping fetch cycles.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// Clones share configuration and recorded requests.
///
/// # Example
///
/// ```ignore
/// use rolodex::adapters::MockHttpClient;
///
/// let client = MockHttpClient::new();
/// client.set_json("https://api.example.com/users", serde_json::json!([]));
/// let gate = client.hold("https://api.example.com/users");
/// // ... start the request, assert on the Loading state ...
/// gate.notify_one();
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by exact URL
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Gates that delay a URL's response until notified
    gates: Arc<Mutex<HashMap<String, Arc<Notify>>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a specific URL. The URL is matched exactly.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a 200 JSON response for a specific URL.
    pub fn set_json(&self, url: &str, value: serde_json::Value) {
        self.set_response(url, MockResponse::Success(Response::json_body(&value)));
    }

    /// Hold responses for `url` until the returned gate is notified.
    ///
    /// Each `notify_one` releases one pending (or the next) request.
    pub fn hold(&self, url: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(url.to_string(), Arc::clone(&gate));
        gate
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Count recorded requests for one URL.
    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url == url)
            .count()
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        self.responses.lock().unwrap().get(url).cloned()
    }

    fn gate_for(&self, url: &str) -> Option<Arc<Notify>> {
        self.gates.lock().unwrap().get(url).cloned()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers);

        if let Some(gate) = self.gate_for(url) {
            gate.notified().await;
        }

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
