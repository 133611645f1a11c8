//! Directory API client.
//!
//! Three read-only operations against the directory service. Every failure is
//! reported as a [`FetchError`]; nothing is retried or cached, and each call is
//! one independent request/response.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::config::ClientConfig;
use crate::error::{FetchError, FetchResult};
use crate::models::{PostRecord, UserId, UserRecord};
use crate::traits::{Headers, HttpClient, Response};

/// Client for the `/users` and `/posts` endpoints.
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct DirectoryClient {
    /// Service root without a trailing slash
    pub base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for DirectoryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DirectoryClient {
    /// Build a reqwest-backed client from configuration.
    pub fn from_config(config: &ClientConfig) -> FetchResult<Self> {
        let http = match config.request_timeout {
            Some(timeout) => ReqwestHttpClient::with_timeout(timeout)
                .map_err(|e| FetchError::from_http(e, &config.base_url))?,
            None => ReqwestHttpClient::new(),
        };
        Ok(Self::with_http(config.base_url.clone(), Arc::new(http)))
    }

    /// Use an arbitrary transport, e.g. [`crate::adapters::MockHttpClient`].
    pub fn with_http(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn user_url(&self, id: UserId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    pub fn posts_url(&self, id: UserId) -> String {
        format!("{}/posts?userId={}", self.base_url, id)
    }

    /// `GET /users`, in server order.
    pub async fn fetch_all_users(&self) -> FetchResult<Vec<UserRecord>> {
        let url = self.users_url();
        let response = self.get_ok(&url).await?;
        decode(&response, &url)
    }

    /// `GET /users/{id}`.
    ///
    /// A 404, or a successful response whose body is empty, `{}`, `null`, or not
    /// shaped like a user, is reported as [`FetchError::NotFound`].
    pub async fn fetch_user_by_id(&self, id: UserId) -> FetchResult<UserRecord> {
        let url = self.user_url(id);
        let response = self.get(&url).await?;

        if response.status == 404 {
            tracing::debug!(%id, "user lookup returned 404");
            return Err(FetchError::user_not_found(id));
        }
        let response = ensure_success(response, &url)?;

        if response.is_empty_body() {
            return Err(FetchError::user_not_found(id));
        }

        let value: serde_json::Value = response.json().map_err(|_| FetchError::user_not_found(id))?;
        if value.is_null() || value.as_object().is_some_and(|o| o.is_empty()) {
            return Err(FetchError::user_not_found(id));
        }

        serde_json::from_value(value).map_err(|e| {
            tracing::warn!(%id, error = %e, "user body did not match the expected shape");
            FetchError::user_not_found(id)
        })
    }

    /// `GET /posts?userId={id}`. An empty list is a normal result.
    pub async fn fetch_posts_by_user_id(&self, id: UserId) -> FetchResult<Vec<PostRecord>> {
        let url = self.posts_url(id);
        let response = self.get_ok(&url).await?;
        decode(&response, &url)
    }

    async fn get(&self, url: &str) -> FetchResult<Response> {
        tracing::debug!(url, "GET");
        self.http.get(url, &request_headers()).await.map_err(|e| {
            tracing::warn!(url, error = %e, "request failed");
            FetchError::from_http(e, url)
        })
    }

    async fn get_ok(&self, url: &str) -> FetchResult<Response> {
        let response = self.get(url).await?;
        ensure_success(response, url)
    }
}

/// Sent with every request.
fn request_headers() -> Headers {
    Headers::from([
        ("accept".to_string(), "application/json".to_string()),
        (
            "user-agent".to_string(),
            format!("rolodex/{}", env!("CARGO_PKG_VERSION")),
        ),
    ])
}

fn ensure_success(response: Response, url: &str) -> FetchResult<Response> {
    if response.is_success() {
        Ok(response)
    } else {
        tracing::warn!(url, status = response.status, "non-success status");
        Err(FetchError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        })
    }
}

fn decode<T: DeserializeOwned>(response: &Response, url: &str) -> FetchResult<T> {
    response.json().map_err(|e| {
        tracing::warn!(url, error = %e, "failed to decode response body");
        FetchError::InvalidResponse {
            url: url.to_string(),
            message: e.to_string(),
        }
    })
}
