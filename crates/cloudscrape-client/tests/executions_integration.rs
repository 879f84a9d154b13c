//! Integration tests for the executions API and transport edge cases.

mod common;

use std::time::Duration;

use anyhow::Result;
use common::*;
use cloudscrape_client::{ClientBuilder, ExecutionState};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_execution() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/executions/ex-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "ex-1",
            "_state": "OK",
            "_starts": 1432380674000u64,
            "_finished": 1432380700000u64
        })))
        .expect(1)
        .mount(&server)
        .await;

    let execution = test_client(&server).executions().get("ex-1").await?;

    assert_eq!(execution.state, ExecutionState::Ok);
    assert_eq!(execution.starts.timestamp_millis(), 1432380674000);
    assert_eq!(
        execution.finished.map(|finished| finished.timestamp_millis()),
        Some(1432380700000)
    );
    Ok(())
}

#[tokio::test]
async fn test_get_result() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/executions/ex-1/result"))
        .respond_with(ResponseTemplate::new(200).set_body_json(result_json()))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server).executions().get_result("ex-1").await?;

    assert_eq!(result.headers, ["title", "price"]);
    assert_eq!(result.rows[0][1], json!(9.99));
    assert_eq!(result.total_rows, 2);
    Ok(())
}

#[tokio::test]
async fn test_stop_and_resume_post_to_lifecycle_paths() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/executions/ex-1/stop"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/executions/ex-1/continue"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert!(client.executions().stop("ex-1").await?);
    assert!(client.executions().resume("ex-1").await?);
    Ok(())
}

#[tokio::test]
async fn test_remove_execution_on_no_content() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/executions/ex-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    assert!(test_client(&server).executions().remove("ex-1").await?);
    Ok(())
}

#[tokio::test]
async fn test_get_result_file_wraps_mime_and_bytes() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/executions/ex-1/file/file-9"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("a,b\n1,2", "text/csv"))
        .expect(1)
        .mount(&server)
        .await;

    let file = test_client(&server)
        .executions()
        .get_result_file("ex-1", "file-9")
        .await?;

    assert_eq!(file.mime_type, "text/csv");
    assert_eq!(&file.contents[..], b"a,b\n1,2");
    Ok(())
}

#[tokio::test]
async fn test_get_result_file_defaults_mime_type() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/executions/ex-1/file/file-9"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let file = test_client(&server)
        .executions()
        .get_result_file("ex-1", "file-9")
        .await?;

    assert_eq!(file.mime_type, "application/octet-stream");
    assert!(file.contents.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unknown_state_is_a_decode_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/executions/ex-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(execution_json("ex-1", "EXPLODED")))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .executions()
        .get("ex-1")
        .await
        .unwrap_err();

    assert!(err.is_decode_error());
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_is_a_decode_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/executions/ex-1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .executions()
        .get("ex-1")
        .await
        .unwrap_err();

    assert!(err.is_decode_error());
    Ok(())
}

#[tokio::test]
async fn test_failure_body_is_not_decoded() -> Result<()> {
    let server = MockServer::start().await;

    // Out-of-range statuses fail before any decoding, even with a body
    // that happens to parse.
    Mock::given(method("GET"))
        .and(path("/api/executions/ex-1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(execution_json("ex-1", "OK")))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .executions()
        .get("ex-1")
        .await
        .unwrap_err();

    assert!(err.is_request_failure());
    assert_eq!(err.status(), Some(500));
    Ok(())
}

#[tokio::test]
async fn test_connection_failure_surfaces_status_zero() -> Result<()> {
    // Nothing listens on the discard port; the failure carries status 0
    // and an empty response payload.
    let client = ClientBuilder::new()
        .api_key("c")
        .account_id("ab")
        .endpoint("http://127.0.0.1:9/api/")
        .build()?;

    let err = client.executions().get("ex-1").await.unwrap_err();

    assert!(err.is_request_failure());
    assert_eq!(err.status(), Some(0));
    let response = err.response().expect("diagnostic payload");
    assert!(response.reason.is_empty());
    assert!(response.headers.is_empty());
    assert!(response.body.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_timeout_surfaces_status_zero() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/executions/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(execution_json("slow", "OK"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    client.set_request_timeout(Duration::from_millis(100));

    let err = client.executions().get("slow").await.unwrap_err();

    assert_eq!(err.status(), Some(0));
    Ok(())
}
