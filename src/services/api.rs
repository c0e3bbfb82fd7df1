// src/services/api.rs

//! Review API client.
//!
//! Performs the single HTTP call of the poll cycle and maps every
//! transport or HTTP failure to a typed error. Retry policy lives in the
//! poll loop, not here.

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::error::{AppError, Result};

/// The only endpoint the bot talks to.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const USER_AGENT: &str = concat!("hwbot/", env!("CARGO_PKG_VERSION"));

/// Client for the homework review API.
pub struct PracticumClient {
    http: reqwest::Client,
    token: String,
    endpoint: String,
}

impl PracticumClient {
    /// Create a client for the fixed production endpoint.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(token, ENDPOINT)
    }

    /// Create a client against an arbitrary endpoint.
    pub fn with_endpoint(token: impl Into<String>, endpoint: impl Into<String>) -> Result<Self> {
        // No explicit request timeout: a stalled upstream call blocks the
        // poll loop indefinitely. Known weakness, kept as-is.
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            http,
            token: token.into(),
            endpoint: endpoint.into(),
        })
    }

    /// Fetch homework statuses changed since `from_date` (Unix seconds).
    ///
    /// Returns the decoded JSON body on HTTP 200; every other outcome is
    /// an [`AppError::Endpoint`], except an undecodable 200 body which is
    /// [`AppError::MalformedResponse`].
    pub async fn fetch(&self, from_date: i64) -> Result<Value> {
        let response = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| AppError::endpoint(format!("request to review API failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::endpoint(
                "review API endpoint not found (HTTP 404)",
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Endpoint(describe_failure(status, &body)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::endpoint(format!("failed to read response body: {e}")))?;
        serde_json::from_str(&body).map_err(|e| AppError::MalformedResponse(e.to_string()))
    }
}

/// Describe a non-success upstream response.
///
/// Prefers an error detail decoded from the body (`code`, `message` or
/// `error`), falling back to the raw body text.
fn describe_failure(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["code", "message", "error"] {
            if let Some(detail) = value.get(key).and_then(Value::as_str) {
                return format!("review API returned HTTP {status}: {detail}");
            }
        }
    }

    let raw = body.trim();
    if raw.is_empty() {
        format!("review API returned HTTP {status}")
    } else {
        format!("review API returned HTTP {status}: {raw}")
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use super::*;

    /// Serve one canned HTTP response on a local port and return the
    /// endpoint URL to point the client at.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn test_fetch_success_returns_decoded_body() {
        let endpoint = serve_once("200 OK", r#"{"homeworks": [], "current_date": 1}"#).await;
        let client = PracticumClient::with_endpoint("token", endpoint).unwrap();

        let value = client.fetch(0).await.unwrap();
        assert!(value["homeworks"].is_array());
    }

    #[tokio::test]
    async fn test_fetch_404_is_endpoint_error() {
        let endpoint = serve_once("404 Not Found", "").await;
        let client = PracticumClient::with_endpoint("token", endpoint).unwrap();

        let result = client.fetch(0).await;
        assert!(matches!(
            result,
            Err(AppError::Endpoint(msg)) if msg.contains("404")
        ));
    }

    #[tokio::test]
    async fn test_fetch_503_carries_upstream_code() {
        let endpoint = serve_once("503 Service Unavailable", r#"{"code": "UnknownError"}"#).await;
        let client = PracticumClient::with_endpoint("token", endpoint).unwrap();

        let result = client.fetch(0).await;
        assert!(matches!(
            result,
            Err(AppError::Endpoint(msg)) if msg.contains("UnknownError")
        ));
    }

    #[tokio::test]
    async fn test_fetch_undecodable_200_is_malformed() {
        let endpoint = serve_once("200 OK", "<html>definitely not json</html>").await;
        let client = PracticumClient::with_endpoint("token", endpoint).unwrap();

        let result = client.fetch(0).await;
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_endpoint_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        let client = PracticumClient::with_endpoint("token", endpoint).unwrap();
        let result = client.fetch(0).await;
        assert!(matches!(result, Err(AppError::Endpoint(_))));
    }

    #[test]
    fn test_failure_with_upstream_code() {
        let message = describe_failure(
            StatusCode::SERVICE_UNAVAILABLE,
            r#"{"code": "UnknownError"}"#,
        );
        assert!(message.contains("503"));
        assert!(message.contains("UnknownError"));
    }

    #[test]
    fn test_failure_with_message_field() {
        let message = describe_failure(StatusCode::BAD_REQUEST, r#"{"message": "bad from_date"}"#);
        assert!(message.contains("bad from_date"));
    }

    #[test]
    fn test_failure_raw_body_fallback() {
        let message = describe_failure(StatusCode::BAD_GATEWAY, "upstream exploded");
        assert!(message.contains("502"));
        assert!(message.contains("upstream exploded"));
    }

    #[test]
    fn test_failure_empty_body() {
        let message = describe_failure(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(message, "review API returned HTTP 500 Internal Server Error");
    }

    #[test]
    fn test_failure_json_without_known_keys() {
        let message = describe_failure(StatusCode::FORBIDDEN, r#"{"detail": "nope"}"#);
        // Unknown shape falls back to the raw text
        assert!(message.contains(r#"{"detail": "nope"}"#));
    }
}
