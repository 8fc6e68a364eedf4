//! Native status source and timer for the terminal front end.
//!
//! `HttpStatusSource` issues `GET {base_url}/status/{task_id}` with reqwest;
//! `TokioTimer` sleeps on the tokio clock. Both plug into the same
//! `StatusPoller` the browser build uses.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::time::Duration;

use client::{FetchError, StatusSource, Timer};
use status::TaskStatus;

use crate::CliError;

/// Status endpoint client bound to one server.
#[derive(Clone, Debug)]
pub struct HttpStatusSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStatusSource {
    /// Build a source for `base_url` (scheme + host, optional path prefix).
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] if `base_url` is not an absolute
    /// http(s) URL, or [`CliError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CliError> {
        let parsed = reqwest::Url::parse(base_url).map_err(|_| CliError::InvalidBaseUrl(base_url.to_owned()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// Absolute URL polled for `task_id`.
    #[must_use]
    pub fn status_url(&self, task_id: &str) -> String {
        format!("{}{}", self.base_url, status::status_endpoint(task_id))
    }
}

#[async_trait::async_trait(?Send)]
impl StatusSource for HttpStatusSource {
    async fn fetch(&self, task_id: &str) -> Result<TaskStatus, FetchError> {
        let url = self.status_url(task_id);
        tracing::debug!(%url, "fetching task status");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        let body = response.text().await.map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(status::parse_task_status(&body)?)
    }
}

/// Poll delays on the tokio clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[async_trait::async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
