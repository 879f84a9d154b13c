//! Credentials and access-key derivation.

use md5::{Digest, Md5};

/// API credentials with their derived access key.
///
/// The access key is the lowercase hex digest of
/// `md5(account_id + api_key)`, computed exactly once at construction.
/// The same credential pair always derives the same key, so clients can
/// be rebuilt freely without re-authenticating.
#[derive(Debug, Clone)]
pub struct Credentials {
    account_id: String,
    access_key: String,
}

impl Credentials {
    /// Create credentials, deriving the access key.
    ///
    /// The API key itself is not retained; only the account id and the
    /// derived key ever travel with a request.
    pub fn new(api_key: impl AsRef<str>, account_id: impl Into<String>) -> Self {
        let account_id = account_id.into();
        let access_key = derive_access_key(&account_id, api_key.as_ref());
        Self {
            account_id,
            access_key,
        }
    }

    /// The account identifier sent with every request.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// The derived access key sent with every request.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }
}

/// Lowercase hex digest of `md5(account_id + api_key)`.
fn derive_access_key(account_id: &str, api_key: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(account_id.as_bytes());
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}
