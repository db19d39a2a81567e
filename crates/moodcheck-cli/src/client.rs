//! Async HTTP gateway posting check-ins to the endpoint.

use std::time::Duration;

use anyhow::{Context, Result};
use moodcheck_core::{
  SubmissionError, SubmissionGateway,
  checkin::{CheckInReceipt, CheckInRecord},
};
use reqwest::Client;
use serde::Deserialize;

/// Where and how to deliver check-ins.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
  /// Full URL that accepts `POST` of a check-in record.
  pub endpoint: String,
  pub timeout:  Duration,
}

/// [`SubmissionGateway`] over HTTP.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpGateway {
  client: Client,
  config: GatewayConfig,
}

/// The part of the endpoint's reply we rely on.
#[derive(Deserialize)]
struct SubmitResponse {
  id: u64,
}

impl HttpGateway {
  pub fn new(config: GatewayConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(config.timeout)
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  pub fn endpoint(&self) -> &str { &self.config.endpoint }
}

impl SubmissionGateway for HttpGateway {
  /// `POST <endpoint>` with the record as JSON. One request, no retries.
  async fn submit(
    &self,
    record: CheckInRecord,
  ) -> Result<CheckInReceipt, SubmissionError> {
    let resp = self
      .client
      .post(&self.config.endpoint)
      .json(&record)
      .send()
      .await
      .map_err(|e| SubmissionError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
      return Err(SubmissionError::HttpStatus(status.as_u16()));
    }

    let body: SubmitResponse = resp
      .json()
      .await
      .map_err(|e| SubmissionError::Response(e.to_string()))?;
    Ok(CheckInReceipt::new(body.id, record))
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
  };

  use super::*;

  fn gateway(endpoint: String) -> HttpGateway {
    HttpGateway::new(GatewayConfig {
      endpoint,
      timeout: Duration::from_secs(5),
    })
    .unwrap()
  }

  fn record() -> CheckInRecord {
    CheckInRecord {
      emotion:   "Happy".into(),
      notes:     String::new(),
      timestamp: "2024-01-01T00:00:00Z".into(),
    }
  }

  #[tokio::test]
  async fn success_returns_assigned_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/posts"))
      .and(header("content-type", "application/json"))
      .and(body_json(json!({
        "emotion": "Happy",
        "notes": "",
        "timestamp": "2024-01-01T00:00:00Z",
      })))
      .respond_with(
        ResponseTemplate::new(201).set_body_json(json!({ "id": 101, "extra": true })),
      )
      .expect(1)
      .mount(&server)
      .await;

    let receipt = gateway(format!("{}/posts", server.uri()))
      .submit(record())
      .await
      .unwrap();
    assert_eq!(receipt.id, 101);
    assert_eq!(receipt.emotion, "Happy");
    assert_eq!(receipt.timestamp, "2024-01-01T00:00:00Z");
  }

  #[tokio::test]
  async fn server_error_keeps_status_and_does_not_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(500))
      .expect(1)
      .mount(&server)
      .await;

    let err = gateway(format!("{}/posts", server.uri()))
      .submit(record())
      .await
      .unwrap_err();
    assert_eq!(err, SubmissionError::HttpStatus(500));
    assert_eq!(err.to_string(), "HTTP error! status: 500");
  }

  #[tokio::test]
  async fn success_without_id_is_a_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
      .mount(&server)
      .await;

    let err = gateway(server.uri()).submit(record()).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Response(_)), "{err:?}");
  }

  #[tokio::test]
  async fn unreachable_endpoint_is_a_transport_error() {
    // Bind an ephemeral port, then release it so nothing is listening.
    let port = {
      let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
      listener.local_addr().unwrap().port()
    };
    let err = gateway(format!("http://127.0.0.1:{port}/posts"))
      .submit(record())
      .await
      .unwrap_err();
    assert!(matches!(err, SubmissionError::Transport(_)), "{err:?}");
  }
}
