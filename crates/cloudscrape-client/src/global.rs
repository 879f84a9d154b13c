//! Process-wide default client.
//!
//! Sugar over an explicitly constructed [`CloudScrapeClient`]: hosts
//! that want one shared client call [`init`] once and use the
//! module-level accessors everywhere else. Library code should prefer
//! passing a client around; every accessor here just clones a handle to
//! the same shared client.

use parking_lot::RwLock;

use crate::api::{ExecutionsApi, RunsApi};
use crate::client::CloudScrapeClient;
use crate::error::{Error, Result};

static DEFAULT_CLIENT: RwLock<Option<CloudScrapeClient>> = RwLock::new(None);

/// Bind the process-wide default client.
///
/// Builds a client with default configuration for the given credentials
/// and stores it, replacing any previously bound client (last write
/// wins). Safe to call from any thread.
pub fn init(api_key: &str, account_id: &str) -> Result<()> {
    let client = CloudScrapeClient::new(api_key, account_id)?;
    *DEFAULT_CLIENT.write() = Some(client);
    Ok(())
}

/// Get a handle to the default client.
///
/// Fails with [`Error::Uninitialized`] before the first [`init`].
pub fn default_client() -> Result<CloudScrapeClient> {
    DEFAULT_CLIENT.read().clone().ok_or(Error::Uninitialized)
}

/// Access the runs API of the default client.
pub fn runs() -> Result<RunsApi> {
    Ok(default_client()?.runs())
}

/// Access the executions API of the default client.
pub fn executions() -> Result<ExecutionsApi> {
    Ok(default_client()?.executions())
}
