//! Executions API.

use crate::client::CloudScrapeClient;
use crate::error::Result;
use crate::types::{Execution, ExecutionResult, ResultFile};

/// Executions API client.
pub struct ExecutionsApi {
    client: CloudScrapeClient,
}

impl ExecutionsApi {
    pub(crate) fn new(client: CloudScrapeClient) -> Self {
        Self { client }
    }

    /// Get an execution by ID.
    pub async fn get(&self, execution_id: &str) -> Result<Execution> {
        self.client.get_json(&["executions", execution_id]).await
    }

    /// Delete an execution and its result.
    pub async fn remove(&self, execution_id: &str) -> Result<bool> {
        self.client.delete_bool(&["executions", execution_id]).await
    }

    /// Get the result produced by an execution.
    pub async fn get_result(&self, execution_id: &str) -> Result<ExecutionResult> {
        self.client
            .get_json(&["executions", execution_id, "result"])
            .await
    }

    /// Download a file attached to an execution result.
    ///
    /// The MIME type comes from the response's `content-type` header.
    pub async fn get_result_file(&self, execution_id: &str, file_id: &str) -> Result<ResultFile> {
        let response = self
            .client
            .get_raw(&["executions", execution_id, "file", file_id])
            .await?;
        Ok(ResultFile::from_response(response))
    }

    /// Stop a running execution.
    pub async fn stop(&self, execution_id: &str) -> Result<bool> {
        self.client
            .post_bool(&["executions", execution_id, "stop"])
            .await
    }

    /// Resume a stopped execution.
    pub async fn resume(&self, execution_id: &str) -> Result<bool> {
        self.client
            .post_bool(&["executions", execution_id, "continue"])
            .await
    }
}
