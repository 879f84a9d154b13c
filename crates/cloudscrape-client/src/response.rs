//! Raw response capture and status classification.

use bytes::Bytes;
use reqwest::header::HeaderMap;

/// Everything captured from one HTTP exchange.
///
/// Successful calls normally hand back a decoded type instead; this is
/// surfaced directly for raw endpoints (file downloads) and carried
/// inside request-failure errors for diagnostics.
///
/// Header names are normalized to lowercase by the HTTP stack and looked
/// up case-insensitively; for repeated headers the first value wins. An
/// exchange that produced no response at all (connection failure,
/// timeout) is represented with status 0, an empty reason and no headers
/// or body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code; 0 when no response was obtained.
    pub status: u16,
    /// Canonical reason phrase for the status, empty when unknown.
    pub reason: String,
    /// Response headers as received.
    pub headers: HeaderMap,
    /// Raw body bytes.
    pub body: Bytes,
}

impl ApiResponse {
    /// Placeholder for an exchange that produced no response at all.
    pub(crate) fn empty() -> Self {
        Self {
            status: 0,
            reason: String::new(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Whether the status falls in the accepted range.
    ///
    /// The service treats every status from 100 to 399 inclusive as
    /// success, redirects included; status 0 never is.
    pub fn is_success(&self) -> bool {
        (100..=399).contains(&self.status)
    }

    /// Look up a header value by name, case-insensitively.
    ///
    /// Returns the first value for repeated headers, and `None` for
    /// values that are not valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Body interpreted as UTF-8 text, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn response_with_status(status: u16) -> ApiResponse {
        ApiResponse {
            status,
            reason: String::new(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    #[test]
    fn test_success_range_is_inclusive() {
        assert!(!response_with_status(0).is_success());
        assert!(!response_with_status(99).is_success());
        assert!(response_with_status(100).is_success());
        assert!(response_with_status(200).is_success());
        assert!(response_with_status(204).is_success());
        assert!(response_with_status(302).is_success());
        assert!(response_with_status(399).is_success());
        assert!(!response_with_status(400).is_success());
        assert!(!response_with_status(500).is_success());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/csv"));
        let response = ApiResponse {
            status: 200,
            reason: "OK".to_string(),
            headers,
            body: Bytes::new(),
        };

        assert_eq!(response.header("Content-Type"), Some("text/csv"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("text/csv"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_repeated_headers_return_first_value() {
        let mut headers = HeaderMap::new();
        headers.append("x-note", HeaderValue::from_static("first"));
        headers.append("x-note", HeaderValue::from_static("second"));
        let response = ApiResponse {
            status: 200,
            reason: "OK".to_string(),
            headers,
            body: Bytes::new(),
        };

        assert_eq!(response.header("x-note"), Some("first"));
    }

    #[test]
    fn test_empty_response_has_status_zero() {
        let response = ApiResponse::empty();
        assert_eq!(response.status, 0);
        assert!(response.reason.is_empty());
        assert!(response.headers.is_empty());
        assert!(!response.is_success());
    }

    #[test]
    fn test_text_reads_body_bytes() {
        let response = ApiResponse {
            status: 200,
            reason: "OK".to_string(),
            headers: HeaderMap::new(),
            body: Bytes::from_static(b"a,b\n1,2"),
        };

        assert_eq!(response.text(), "a,b\n1,2");
    }
}
