//! # HTTP Transport
//!
//! Thin JSON-over-HTTP layer shared by every actor. It owns the `reqwest::Client`
//! (connection pool, request timeout) and turns every failure into an [`ApiError`].

use crate::envelope::{ErrorBody, ListQuery};
use crate::error::ApiError;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Shared HTTP client bound to the API base URL (e.g. `http://localhost:3002/api`).
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins path segments onto the base URL.
    pub fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(segment.trim_matches('/'));
        }
        url
    }

    pub async fn get_json<R: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: Option<&ListQuery>,
    ) -> Result<R, ApiError> {
        let mut request = self.request(Method::GET, segments);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            request = request.query(query.params());
        }
        let response = self.execute(request).await?;
        self.decode(response).await
    }

    pub async fn send_json<B, R>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut request = self.request(method, segments);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.execute(request).await?;
        self.decode(response).await
    }

    /// Sends a request whose answer body is irrelevant (delete, actions).
    pub async fn send_empty(&self, method: Method, segments: &[&str]) -> Result<(), ApiError> {
        let request = self.request(method, segments);
        self.execute(request).await.map(|_| ())
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.url(segments);
        debug!(%method, %url, "HTTP request");
        self.client.request(method, url)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| self.map_reqwest(e))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(ErrorBody::into_message);
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<R: DeserializeOwned>(&self, response: Response) -> Result<R, ApiError> {
        response
            .json::<R>()
            .await
            .map_err(|e| self.map_reqwest(e))
    }

    fn map_reqwest(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}
