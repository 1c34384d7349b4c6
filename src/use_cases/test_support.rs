use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::domain::{
    ApiResponse, ApiTransport, FormKind, FormState, FormView, PageEnvironment, SubmissionPayload,
    TransportError,
};

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub url: String,
    pub timeout: Duration,
    // `None` for GET requests.
    pub payload: Option<SubmissionPayload>,
}

// Transport that answers every call with the same scripted result and records it.
#[derive(Clone)]
pub(crate) struct ScriptedTransport {
    result: Result<ApiResponse, TransportError>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedTransport {
    pub(crate) fn responding(status: u16, body: &str) -> Self {
        Self {
            result: Ok(ApiResponse {
                status,
                body: body.to_string(),
            }),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn failing(error: TransportError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn record(&self, call: RecordedCall) -> Result<ApiResponse, TransportError> {
        self.calls.lock().expect("calls mutex poisoned").push(call);
        self.result.clone()
    }
}

#[async_trait]
impl ApiTransport for ScriptedTransport {
    async fn post_json(
        &self,
        url: &str,
        payload: &SubmissionPayload,
        timeout: Duration,
    ) -> Result<ApiResponse, TransportError> {
        self.record(RecordedCall {
            url: url.to_string(),
            timeout,
            payload: Some(payload.clone()),
        })
    }

    async fn get(&self, url: &str, timeout: Duration) -> Result<ApiResponse, TransportError> {
        self.record(RecordedCall {
            url: url.to_string(),
            timeout,
            payload: None,
        })
    }
}

// Form view that keeps real form state and records every interaction.
pub(crate) struct RecordingView {
    pub state: FormState,
    pub alerts: Vec<String>,
    pub submitting_history: Vec<bool>,
    pub labels_seen: Vec<String>,
    pub cleared: usize,
    pub modal_closed: usize,
}

impl RecordingView {
    pub(crate) fn new(kind: FormKind) -> Self {
        Self {
            state: FormState::new(kind),
            alerts: Vec::new(),
            submitting_history: Vec::new(),
            labels_seen: Vec::new(),
            cleared: 0,
            modal_closed: 0,
        }
    }
}

impl FormView for RecordingView {
    fn set_submitting(&mut self, submitting: bool) {
        self.state.submit_control_mut().set_busy(submitting);
        self.submitting_history.push(submitting);
        self.labels_seen
            .push(self.state.submit_control().label().to_string());
    }

    fn clear_fields(&mut self) {
        self.state.reset();
        self.cleared += 1;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn close_modal(&mut self) {
        self.state.close_modal();
        self.modal_closed += 1;
    }
}

pub(crate) fn remote_page() -> PageEnvironment {
    PageEnvironment::new(Url::parse("https://www.example.com/contato").expect("test page url"))
}

fn collect(kind: FormKind, pairs: &[(&str, &str)]) -> SubmissionPayload {
    let raw: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    SubmissionPayload::collect(kind, &raw)
}

pub(crate) fn contact_payload() -> SubmissionPayload {
    collect(
        FormKind::Contact,
        &[
            ("name", "Ana Souza"),
            ("email", "ana@example.com"),
            ("subject", "Website"),
            ("message", "I would like a quote."),
        ],
    )
}

pub(crate) fn budget_payload() -> SubmissionPayload {
    collect(
        FormKind::Budget,
        &[
            ("name", "Ana Souza"),
            ("email", "ana@example.com"),
            ("phone", "(88) 9 0000-0000"),
            ("service", "Landing pages"),
            ("details", "Single page for a bakery."),
            ("city", "Fortaleza"),
        ],
    )
}
