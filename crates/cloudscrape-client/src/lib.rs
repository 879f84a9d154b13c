//! HTTP client SDK for the CloudScrape scraping API.
//!
//! CloudScrape hosts saved scraping jobs ("runs"); invoking one produces
//! an "execution", which in turn produces tabular results and files.
//! This crate provides a typed async client for that API:
//! derived-credential authentication, JSON request/response handling,
//! and accessors for the runs and executions endpoints.
//!
//! # Example
//!
//! ```no_run
//! use cloudscrape_client::{CloudScrapeClient, Result};
//!
//! # async fn example() -> Result<()> {
//! // Create a client
//! let client = CloudScrapeClient::new("api-key", "account-id")?;
//!
//! // Queue an execution of a saved run
//! let execution = client.runs().execute("run-id").await?;
//! println!("queued: {} ({:?})", execution.id, execution.state);
//!
//! // ... or run it synchronously and read the rows
//! let result = client.runs().execute_sync("run-id").await?;
//! for row in &result.rows {
//!     println!("{:?}", row);
//! }
//!
//! // Inspect a finished execution later
//! let result = client.executions().get_result(&execution.id).await?;
//! println!("{} rows total", result.total_rows);
//! # Ok(())
//! # }
//! ```
//!
//! Hosts that prefer configuring once can bind a process-wide default
//! client instead of passing one around:
//!
//! ```no_run
//! # async fn example() -> cloudscrape_client::Result<()> {
//! cloudscrape_client::init("api-key", "account-id")?;
//! let run = cloudscrape_client::runs()?.get("run-id").await?;
//! println!("{}", run.name);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Runs**: fetch, delete, execute (queued, synchronous, with inputs,
//!   bulk), latest result, execution listing with pagination
//! - **Executions**: fetch, delete, results, result files, stop, resume

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod global;
pub mod response;
pub mod types;

pub use client::{
    ClientBuilder, CloudScrapeClient, ACCESS_HEADER, ACCOUNT_HEADER, DEFAULT_ENDPOINT,
};
pub use error::{Error, Result};
pub use global::{default_client, executions, init, runs};
pub use response::ApiResponse;
pub use types::*;

// Re-export API types that are commonly used with query methods
pub use api::{ExecutionsApi, ListExecutionsQuery, RunsApi};
