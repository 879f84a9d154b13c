//! Common test utilities for integration tests.
#![allow(dead_code)]

use cloudscrape_client::{ClientBuilder, CloudScrapeClient};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Access key for the `("", "")` credential pair: md5("").
pub const EMPTY_CREDS_ACCESS_KEY: &str = "d41d8cd98f00b204e9800998ecf8427e";

/// Access key for api key "c" + account id "ab": md5("abc").
pub const ABC_CREDS_ACCESS_KEY: &str = "900150983cd24fb0d6963f7d28e17f72";

/// Build a client pointed at the mock server, with the ("c", "ab")
/// credential pair whose access key is [`ABC_CREDS_ACCESS_KEY`].
pub fn test_client(server: &MockServer) -> CloudScrapeClient {
    client_with_credentials(server, "c", "ab")
}

/// Build a client with explicit credentials against the mock server.
pub fn client_with_credentials(
    server: &MockServer,
    api_key: &str,
    account_id: &str,
) -> CloudScrapeClient {
    ClientBuilder::new()
        .api_key(api_key)
        .account_id(account_id)
        .endpoint(format!("{}/api/", server.uri()))
        .build()
        .expect("client must build")
}

/// Wire-shaped execution JSON with an open finish timestamp.
pub fn execution_json(id: &str, state: &str) -> Value {
    json!({
        "_id": id,
        "_state": state,
        "_starts": 1432380674000u64,
        "_finished": null
    })
}

/// Wire-shaped result JSON with two rows.
pub fn result_json() -> Value {
    json!({
        "headers": ["title", "price"],
        "rows": [["Widget", 9.99], ["Gadget", 19.99]],
        "totalRows": 2
    })
}
