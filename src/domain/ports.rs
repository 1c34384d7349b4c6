use async_trait::async_trait;
use std::time::Duration;

use crate::domain::errors::TransportError;
use crate::domain::payload::SubmissionPayload;

// Raw response handed back by a transport: the use case decides what it means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// Port for the HTTP calls made by the submission and health use cases.
// Dependencies point inwards: the reqwest client implements this, tests script it.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        payload: &SubmissionPayload,
        timeout: Duration,
    ) -> Result<ApiResponse, TransportError>;

    async fn get(&self, url: &str, timeout: Duration) -> Result<ApiResponse, TransportError>;
}

// Port for the form a submission runs against. Exclusively borrowed for the attempt.
pub trait FormView {
    fn set_submitting(&mut self, submitting: bool);
    fn clear_fields(&mut self);
    fn alert(&mut self, message: &str);
    fn close_modal(&mut self);
}
