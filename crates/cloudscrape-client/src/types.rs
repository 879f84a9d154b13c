//! Request and response types for the CloudScrape API.
//!
//! These types mirror the service's JSON contract. Unknown fields and
//! unknown execution states are rejected at decode time instead of being
//! silently dropped, so contract drift surfaces as a decode error.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::response::ApiResponse;

// ─────────────────────────────────────────────────────────────────────────────
// Runs
// ─────────────────────────────────────────────────────────────────────────────

/// A saved scraping job definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Run {
    /// Run ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Human-readable run name.
    pub name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Executions
// ─────────────────────────────────────────────────────────────────────────────

/// Lifecycle state of an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionState {
    /// Accepted, waiting for a worker slot.
    Queued,
    /// Scheduled but not yet started.
    Pending,
    /// Currently running.
    Running,
    /// Finished unsuccessfully.
    Failed,
    /// Stopped by request.
    Stopped,
    /// Finished successfully.
    Ok,
}

impl ExecutionState {
    /// Whether the execution has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            ExecutionState::Failed | ExecutionState::Stopped | ExecutionState::Ok
        )
    }
}

/// One invocation of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Execution {
    /// Execution ID.
    #[serde(rename = "_id")]
    pub id: String,
    /// Current lifecycle state.
    #[serde(rename = "_state")]
    pub state: ExecutionState,
    /// Start time (wire format: epoch milliseconds).
    #[serde(rename = "_starts", with = "chrono::serde::ts_milliseconds")]
    pub starts: DateTime<Utc>,
    /// Finish time, unset while the execution is still in flight.
    #[serde(
        rename = "_finished",
        default,
        with = "chrono::serde::ts_milliseconds_option"
    )]
    pub finished: Option<DateTime<Utc>>,
}

/// One page of executions belonging to a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExecutionList {
    /// Offset of this page within the full listing.
    pub offset: u64,
    /// Total number of executions across all pages.
    pub total_rows: u64,
    /// Executions in this page, in server order.
    pub rows: Vec<Execution>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Results
// ─────────────────────────────────────────────────────────────────────────────

/// Tabular output produced by an execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExecutionResult {
    /// Column headers, in column order.
    pub headers: Vec<String>,
    /// Data rows; cells align positionally with `headers`.
    pub rows: Vec<Vec<serde_json::Value>>,
    /// Total number of rows the execution produced; the server may
    /// paginate `rows` below this count.
    pub total_rows: u64,
}

/// Fallback MIME type when a file response carries no `content-type`.
const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A file attached to an execution result.
#[derive(Debug, Clone)]
pub struct ResultFile {
    /// MIME type reported by the server.
    pub mime_type: String,
    /// Raw file contents.
    pub contents: Bytes,
}

impl ResultFile {
    /// Build a file from a raw download response.
    pub(crate) fn from_response(response: ApiResponse) -> Self {
        let mime_type = response
            .header("content-type")
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();
        Self {
            mime_type,
            contents: response.body,
        }
    }
}
