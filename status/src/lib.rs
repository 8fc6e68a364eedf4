//! Wire schema for the task status endpoint.
//!
//! This crate owns the `GET /status/{task_id}` response shape used by both the
//! browser `client` and the native `cli`. The server side is external; the
//! types here accept exactly what it sends and ignore anything else.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Text shown while the server has not reported a status line yet.
pub const WAITING_PLACEHOLDER: &str = "Waiting...";

/// Suffix appended to the status line once the task has finished.
pub const DONE_SUFFIX: &str = " (Done)";

/// Error returned by [`parse_task_status`].
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    /// The response body is not a JSON status object.
    #[error("failed to decode status body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Progress block nested in a status response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Completion percentage on a 0–100 scale, when the server knows it.
    /// Numeric strings are accepted; any other type reads as absent.
    #[serde(default, deserialize_with = "lenient_percent", skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
}

/// One poll response from `GET /status/{task_id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    /// Human-readable status line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Terminal flag, read with JavaScript truthiness: missing, `null`,
    /// `false`, `0` and `""` all mean the task is still running.
    #[serde(default, deserialize_with = "truthy")]
    pub finished: bool,
    /// Optional progress report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
}

impl TaskStatus {
    /// Status line to display while polling, falling back to `placeholder`
    /// when the server sent no (or an empty) status.
    #[must_use]
    pub fn status_text<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.status.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => placeholder,
        }
    }

    /// Status line to display once the task has finished.
    ///
    /// An absent status yields just the suffix, e.g. `" (Done)"`.
    #[must_use]
    pub fn done_text(&self) -> String {
        format!("{}{DONE_SUFFIX}", self.status.as_deref().unwrap_or(""))
    }

    /// Reported percentage as sent, if any. Out-of-range values are passed
    /// through so the bar renders exactly what the server reported.
    #[must_use]
    pub fn percent(&self) -> Option<f64> {
        self.progress.as_ref().and_then(|p| p.percent).filter(|p| p.is_finite())
    }
}

/// Path of the status endpoint for `task_id`.
#[must_use]
pub fn status_endpoint(task_id: &str) -> String {
    format!("/status/{task_id}")
}

/// CSS width value for a percentage, e.g. `30.0` -> `"30%"`.
#[must_use]
pub fn percent_width(percent: f64) -> String {
    format!("{percent}%")
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

fn lenient_percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Decode a status response body.
///
/// # Errors
///
/// Returns [`StatusError::Decode`] if `body` is not a JSON object of the
/// expected shape.
pub fn parse_task_status(body: &str) -> Result<TaskStatus, StatusError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
