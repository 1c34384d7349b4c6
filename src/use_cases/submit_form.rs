use serde_json::Value;
use std::time::Duration;

use crate::domain::{
    ApiTransport, ContactChannels, FormKind, FormView, PageEnvironment, SubmissionPayload,
    SubmitError, TransportError,
};
use crate::use_cases::alerts::failure_alert;
use crate::use_cases::diagnose::diagnose;
use crate::use_cases::error_body::error_message_from_body;
use crate::use_cases::resolve_base_url::{endpoint_url, resolve_base_url};

pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

// Returned after a 2xx response.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub url: String,
    pub status: u16,
    // Parsed response body, `None` when the body was empty or not JSON.
    pub body: Option<Value>,
}

// Terminal state of one attempt. The user re-triggers submission to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    FailedValidation,
    FailedConfig,
    FailedNetwork,
    FailedTimeout,
    FailedApplication,
}

impl SubmissionOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, SubmissionOutcome::Succeeded)
    }

    fn from_error(error: &SubmitError) -> Self {
        match error {
            SubmitError::Configuration(_) => SubmissionOutcome::FailedConfig,
            SubmitError::Validation { .. } => SubmissionOutcome::FailedValidation,
            SubmitError::Network { .. } => SubmissionOutcome::FailedNetwork,
            SubmitError::Timeout { .. } => SubmissionOutcome::FailedTimeout,
            SubmitError::Application { .. } => SubmissionOutcome::FailedApplication,
        }
    }
}

// One parameterized submission flow shared by every form on the page.
pub struct SubmitFormUseCase<T> {
    pub transport: T,
    pub page: PageEnvironment,
    pub contact: ContactChannels,
    pub timeout: Duration,
}

impl<T> SubmitFormUseCase<T>
where
    T: ApiTransport,
{
    pub fn new(transport: T, page: PageEnvironment, contact: ContactChannels) -> Self {
        Self {
            transport,
            page,
            contact,
            timeout: SUBMIT_TIMEOUT,
        }
    }

    // Validate, resolve the API origin and send the payload. No view side effects.
    pub async fn execute(
        &self,
        kind: FormKind,
        payload: &SubmissionPayload,
    ) -> Result<SubmitReceipt, SubmitError> {
        payload.validate(kind)?;
        self.dispatch(kind, payload).await
    }

    // Full user-facing flow against a bound form view.
    #[tracing::instrument(name = "submit_form", skip_all, fields(form = kind.name()))]
    pub async fn submit<V>(
        &self,
        kind: FormKind,
        payload: &SubmissionPayload,
        view: &mut V,
    ) -> SubmissionOutcome
    where
        V: FormView,
    {
        // Missing fields never reach the network and never touch the submit control.
        if let Err(err) = payload.validate(kind) {
            tracing::info!(error = %err, "submission rejected by validation.");
            view.alert(kind.validation_message());
            return SubmissionOutcome::FailedValidation;
        }

        view.set_submitting(true);
        let result = self.dispatch(kind, payload).await;

        let outcome = match result {
            Ok(receipt) => {
                tracing::info!(url = %receipt.url, status = receipt.status, "submission accepted.");
                view.clear_fields();
                view.alert(kind.success_message());
                if kind.in_modal() {
                    view.close_modal();
                }
                SubmissionOutcome::Succeeded
            }
            Err(err) => {
                let diagnosis = diagnose(&err, &self.page.origin());
                tracing::error!(
                    error = %err,
                    error_type = %diagnosis.error_type,
                    url = diagnosis.url.as_deref().unwrap_or("unavailable"),
                    page_origin = %self.page.origin(),
                    ?diagnosis,
                    "submission failed."
                );
                view.alert(&failure_alert(kind, &err, &diagnosis, &self.contact));
                SubmissionOutcome::from_error(&err)
            }
        };

        view.set_submitting(false);
        outcome
    }

    async fn dispatch(
        &self,
        kind: FormKind,
        payload: &SubmissionPayload,
    ) -> Result<SubmitReceipt, SubmitError> {
        let base_url = resolve_base_url(&self.page).inspect_err(|err| {
            tracing::error!(error = %err, "api base url could not be resolved.");
        })?;
        let url = endpoint_url(&base_url, kind.endpoint());
        tracing::debug!(url = %url, payload = ?payload.fields(), "sending submission.");

        let response = self
            .transport
            .post_json(&url, payload, self.timeout)
            .await
            .map_err(|err| match err {
                TransportError::Timeout => SubmitError::Timeout {
                    url: url.clone(),
                    after: self.timeout,
                },
                TransportError::Network(reason) => SubmitError::Network {
                    url: url.clone(),
                    reason,
                },
                TransportError::Other(reason) => SubmitError::Application {
                    url: url.clone(),
                    status: None,
                    message: reason,
                },
            })?;

        tracing::debug!(url = %url, status = response.status, "api responded.");

        if !response.is_success() {
            return Err(SubmitError::Application {
                message: error_message_from_body(response.status, &response.body),
                status: Some(response.status),
                url,
            });
        }

        // A success body that is not JSON is tolerated.
        let body = serde_json::from_str::<Value>(&response.body)
            .inspect_err(|_| {
                if !response.body.trim().is_empty() {
                    tracing::warn!(url = %url, "success response is not valid json.");
                }
            })
            .ok();

        Ok(SubmitReceipt {
            url,
            status: response.status,
            body,
        })
    }
}
