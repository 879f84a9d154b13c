//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::RwLock;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::{Position, Url};

use crate::api::{ExecutionsApi, RunsApi};
use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::response::ApiResponse;

/// Default API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://app.cloudscrape.com/api/";

/// Header carrying the derived access key.
pub const ACCESS_HEADER: &str = "X-CloudScrape-Access";

/// Header carrying the account id.
pub const ACCOUNT_HEADER: &str = "X-CloudScrape-Account";

/// Default timeout for requests. Generous because synchronous execution
/// endpoints hold the connection open until the job finishes.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(3600);

/// CloudScrape API client.
///
/// Provides typed access to the runs and executions endpoints.
///
/// # Example
///
/// ```no_run
/// use cloudscrape_client::CloudScrapeClient;
///
/// # async fn example() -> cloudscrape_client::Result<()> {
/// let client = CloudScrapeClient::new("api-key", "account-id")?;
///
/// let execution = client.runs().execute("run-id").await?;
/// println!("queued execution {}", execution.id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CloudScrapeClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    /// HTTP client.
    http: reqwest::Client,
    /// Credentials with the derived access key, fixed for the client's
    /// lifetime.
    credentials: Credentials,
    /// Mutable configuration, read fresh by every request.
    config: RwLock<ClientConfig>,
}

/// Configuration readable and settable after construction.
struct ClientConfig {
    /// Base endpoint URL, always with a trailing slash.
    endpoint: Url,
    /// User-agent sent with every request.
    user_agent: String,
    /// Per-request timeout.
    request_timeout: Duration,
}

impl CloudScrapeClient {
    /// Create a client with default configuration.
    pub fn new(api_key: impl AsRef<str>, account_id: impl Into<String>) -> Result<Self> {
        Self::builder()
            .api_key(api_key.as_ref())
            .account_id(account_id)
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the configured endpoint.
    pub fn endpoint(&self) -> Url {
        self.inner.config.read().endpoint.clone()
    }

    /// Point the client at a different endpoint.
    pub fn set_endpoint(&self, endpoint: &str) -> Result<()> {
        let endpoint = normalize_endpoint(endpoint)?;
        self.inner.config.write().endpoint = endpoint;
        Ok(())
    }

    /// Get the configured user-agent.
    pub fn user_agent(&self) -> String {
        self.inner.config.read().user_agent.clone()
    }

    /// Set the user-agent sent with every request.
    pub fn set_user_agent(&self, user_agent: impl Into<String>) {
        self.inner.config.write().user_agent = user_agent.into();
    }

    /// Get the per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.inner.config.read().request_timeout
    }

    /// Set the per-request timeout.
    ///
    /// Synchronous execution endpoints hold the connection for the whole
    /// job, so this bounds how long the client waits for them.
    pub fn set_request_timeout(&self, timeout: Duration) {
        self.inner.config.write().request_timeout = timeout;
    }

    /// Credentials backing this client.
    pub(crate) fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the runs API.
    pub fn runs(&self) -> RunsApi {
        RunsApi::new(self.clone())
    }

    /// Access the executions API.
    pub fn executions(&self) -> ExecutionsApi {
        ExecutionsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Make a GET request, decoding the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let response = self.send::<(), ()>(Method::GET, segments, None, None).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Make a GET request with query parameters, decoding the JSON body.
    pub(crate) async fn get_json_with_query<T, Q>(&self, segments: &[&str], query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .send::<Q, ()>(Method::GET, segments, Some(query), None)
            .await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Make a bodyless POST request, decoding the JSON body.
    pub(crate) async fn post_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let response = self
            .send::<(), ()>(Method::POST, segments, None, None)
            .await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Make a POST request with a JSON body, decoding the JSON response.
    pub(crate) async fn post_json_with_body<T, B>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .send::<(), B>(Method::POST, segments, None, Some(body))
            .await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Make a bodyless POST request, discarding the response body.
    ///
    /// Returns `Ok(true)` on success; failures surface as errors, so
    /// `false` is never produced.
    pub(crate) async fn post_bool(&self, segments: &[&str]) -> Result<bool> {
        self.send::<(), ()>(Method::POST, segments, None, None)
            .await?;
        Ok(true)
    }

    /// Make a DELETE request, discarding the response body.
    ///
    /// Same boolean contract as [`Self::post_bool`].
    pub(crate) async fn delete_bool(&self, segments: &[&str]) -> Result<bool> {
        self.send::<(), ()>(Method::DELETE, segments, None, None)
            .await?;
        Ok(true)
    }

    /// Make a GET request, returning the raw captured response.
    pub(crate) async fn get_raw(&self, segments: &[&str]) -> Result<ApiResponse> {
        self.send::<(), ()>(Method::GET, segments, None, None).await
    }

    /// Issue one request and capture the response.
    ///
    /// Fails with [`Error::Request`] when the status falls outside the
    /// accepted [100, 399] range or no response could be obtained
    /// (status 0).
    async fn send<Q, B>(
        &self,
        method: Method,
        segments: &[&str],
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<ApiResponse>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        // Snapshot the mutable configuration; the guard must not be held
        // across an await point.
        let (url, user_agent, timeout) = {
            let config = self.inner.config.read();
            (
                join_segments(&config.endpoint, segments)?,
                config.user_agent.clone(),
                config.request_timeout,
            )
        };

        let mut request = self
            .inner
            .http
            .request(method, url)
            .timeout(timeout)
            .header(ACCESS_HEADER, self.inner.credentials.access_key())
            .header(ACCOUNT_HEADER, self.inner.credentials.account_id())
            .header(USER_AGENT, user_agent)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");

        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let request = request.build()?;
        let path = request.url()[Position::BeforePath..].to_string();

        tracing::debug!(method = %request.method(), %path, "sending request");

        let response = match self.inner.http.execute(request).await {
            Ok(response) => response,
            // No response at all: surface as a failure with status 0.
            Err(source) => {
                tracing::warn!(%path, error = %source, "request produced no response");
                return Err(Error::Request {
                    path,
                    response: ApiResponse::empty(),
                    source: Some(source),
                });
            }
        };

        let status = response.status().as_u16();
        let reason = response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string();
        let headers = response.headers().clone();
        let body = match response.bytes().await {
            Ok(body) => body,
            // The connection died mid-body; keep what was captured.
            Err(source) => {
                return Err(Error::Request {
                    path,
                    response: ApiResponse {
                        status,
                        reason,
                        headers,
                        body: Bytes::new(),
                    },
                    source: Some(source),
                });
            }
        };

        let response = ApiResponse {
            status,
            reason,
            headers,
            body,
        };
        if !response.is_success() {
            tracing::warn!(status = response.status, %path, "request failed");
            return Err(Error::Request {
                path,
                response,
                source: None,
            });
        }

        Ok(response)
    }
}

/// Join percent-encoded path segments onto the endpoint.
///
/// Each segment is encoded as a whole, so a `/` inside an id becomes
/// `%2F` instead of a path boundary.
fn join_segments(endpoint: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = endpoint.clone();
    url.path_segments_mut()
        .map_err(|()| Error::Config(format!("endpoint {endpoint} cannot be a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Parse an endpoint URL, enforcing a trailing slash so joined paths
/// extend it instead of replacing its last segment.
fn normalize_endpoint(endpoint: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint)?;
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!(
            "endpoint {url} cannot be a base URL"
        )));
    }
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}

/// Builder for creating a CloudScrapeClient.
#[derive(Debug)]
pub struct ClientBuilder {
    api_key: Option<String>,
    account_id: Option<String>,
    endpoint: Option<String>,
    user_agent: Option<String>,
    request_timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            api_key: None,
            account_id: None,
            endpoint: None,
            user_agent: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Set the API key (required).
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the account id (required).
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Set the API endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CloudScrapeClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::Config("api_key is required".to_string()))?;
        let account_id = self
            .account_id
            .ok_or_else(|| Error::Config("account_id is required".to_string()))?;

        let endpoint = normalize_endpoint(self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("cloudscrape-client/{}", env!("CARGO_PKG_VERSION")));

        // Redirects are not followed: 3xx responses count as success and
        // must reach the caller unchanged.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(CloudScrapeClient {
            inner: Arc::new(ClientInner {
                http,
                credentials: Credentials::new(api_key, account_id),
                config: RwLock::new(ClientConfig {
                    endpoint,
                    user_agent,
                    request_timeout: self.request_timeout,
                }),
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
