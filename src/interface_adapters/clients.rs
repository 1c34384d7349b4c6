use crate::domain::{ApiResponse, ApiTransport, SubmissionPayload, TransportError};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

// Thin wrapper around reqwest for calls to the site API.
// Status interpretation is left to the use cases; this only classifies transport failures.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
}

impl ApiClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!("form_client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }

    // The bound covers the wait for response headers only; a response that has
    // started arriving is read to the end.
    async fn exchange(
        request: RequestBuilder,
        timeout: Duration,
    ) -> Result<ApiResponse, TransportError> {
        let response = tokio::time::timeout(timeout, request.send())
            .await
            .map_err(|_| TransportError::Timeout)?
            .map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;
        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl ApiTransport for ApiClient {
    async fn post_json(
        &self,
        url: &str,
        payload: &SubmissionPayload,
        timeout: Duration,
    ) -> Result<ApiResponse, TransportError> {
        // `.json()` sets `Content-Type: application/json`.
        let request = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .json(payload);
        Self::exchange(request, timeout).await
    }

    async fn get(&self, url: &str, timeout: Duration) -> Result<ApiResponse, TransportError> {
        let request = self.http.get(url).header(ACCEPT, "application/json");
        Self::exchange(request, timeout).await
    }
}

// Map reqwest failures onto the transport taxonomy. Timeout is checked first:
// a timed-out connect also reports `is_connect()`.
fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() || err.is_request() {
        TransportError::Network(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}
