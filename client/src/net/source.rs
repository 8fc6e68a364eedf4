//! Status fetching for the poll loop.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the page's
//! own origin.
//!
//! ERROR HANDLING
//! ==============
//! The HTTP status code is not inspected. The body is decoded as JSON whatever
//! the code, and any transport or decode failure is returned to the poller,
//! which stops polling on the first one.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use status::{StatusError, TaskStatus};

/// Failure of a single status fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response body.
    #[error("status request failed: {0}")]
    Request(String),
    /// The response body is not a status object.
    #[error(transparent)]
    Decode(#[from] StatusError),
}

/// Where a poll cycle gets its `TaskStatus` from.
#[async_trait::async_trait(?Send)]
pub trait StatusSource {
    /// Fetch the current status of `task_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the request fails or the body cannot be
    /// decoded.
    async fn fetch(&self, task_id: &str) -> Result<TaskStatus, FetchError>;
}

/// Same-origin `GET /status/{task_id}` through `gloo-net`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooStatusSource;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl StatusSource for GlooStatusSource {
    async fn fetch(&self, task_id: &str) -> Result<TaskStatus, FetchError> {
        let url = status::status_endpoint(task_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        let body = resp.text().await.map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(status::parse_task_status(&body)?)
    }
}
