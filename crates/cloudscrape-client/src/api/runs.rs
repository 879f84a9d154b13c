//! Runs API.

use serde::Serialize;

use crate::client::CloudScrapeClient;
use crate::error::Result;
use crate::types::{Execution, ExecutionList, ExecutionResult, Run};

/// Query parameters for listing a run's executions.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListExecutionsQuery {
    /// Number of executions to skip.
    pub offset: u32,
    /// Maximum number of executions to return.
    pub limit: u32,
}

impl Default for ListExecutionsQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 30,
        }
    }
}

/// Runs API client.
pub struct RunsApi {
    client: CloudScrapeClient,
}

impl RunsApi {
    pub(crate) fn new(client: CloudScrapeClient) -> Self {
        Self { client }
    }

    /// Get a run by ID.
    pub async fn get(&self, run_id: &str) -> Result<Run> {
        self.client.get_json(&["runs", run_id]).await
    }

    /// Permanently delete a run.
    pub async fn remove(&self, run_id: &str) -> Result<bool> {
        self.client.delete_bool(&["runs", run_id]).await
    }

    /// Queue an execution of the run.
    pub async fn execute(&self, run_id: &str) -> Result<Execution> {
        self.client.post_json(&["runs", run_id, "execute"]).await
    }

    /// Execute the run and wait for its result.
    ///
    /// The server holds the connection until the job finishes, so the
    /// configured request timeout bounds the wait.
    pub async fn execute_sync(&self, run_id: &str) -> Result<ExecutionResult> {
        self.client
            .post_json(&["runs", run_id, "execute", "wait"])
            .await
    }

    /// Queue an execution with an input payload.
    pub async fn execute_with_input<I>(&self, run_id: &str, inputs: &I) -> Result<Execution>
    where
        I: Serialize + ?Sized,
    {
        self.client
            .post_json_with_body(&["runs", run_id, "execute", "inputs"], inputs)
            .await
    }

    /// Execute the run with an input payload and wait for its result.
    pub async fn execute_with_input_sync<I>(
        &self,
        run_id: &str,
        inputs: &I,
    ) -> Result<ExecutionResult>
    where
        I: Serialize + ?Sized,
    {
        self.client
            .post_json_with_body(&["runs", run_id, "execute", "inputs", "wait"], inputs)
            .await
    }

    /// Queue one execution over a batch of input payloads.
    pub async fn execute_bulk<I: Serialize>(
        &self,
        run_id: &str,
        inputs: &[I],
    ) -> Result<Execution> {
        self.client
            .post_json_with_body(&["runs", run_id, "execute", "bulk"], inputs)
            .await
    }

    /// Execute over a batch of input payloads and wait for the result.
    pub async fn execute_bulk_sync<I: Serialize>(
        &self,
        run_id: &str,
        inputs: &[I],
    ) -> Result<ExecutionResult> {
        self.client
            .post_json_with_body(&["runs", run_id, "execute", "bulk", "wait"], inputs)
            .await
    }

    /// Get the result of the run's most recent execution.
    pub async fn get_latest_result(&self, run_id: &str) -> Result<ExecutionResult> {
        self.client
            .get_json(&["runs", run_id, "latest", "result"])
            .await
    }

    /// List the run's executions with default pagination.
    pub async fn get_executions(&self, run_id: &str) -> Result<ExecutionList> {
        self.get_executions_with_query(run_id, ListExecutionsQuery::default())
            .await
    }

    /// List the run's executions with caller-controlled pagination.
    pub async fn get_executions_with_query(
        &self,
        run_id: &str,
        query: ListExecutionsQuery,
    ) -> Result<ExecutionList> {
        self.client
            .get_json_with_query(&["runs", run_id, "executions"], &query)
            .await
    }
}
