pub mod alerts;
pub mod diagnose;
pub mod error_body;
pub mod health;
pub mod resolve_base_url;
pub mod submit_form;
#[cfg(test)]
pub(crate) mod test_support;

pub use alerts::failure_alert;
pub use diagnose::diagnose;
pub use error_body::error_message_from_body;
pub use health::{HEALTH_TIMEOUT, HealthProbeUseCase};
pub use resolve_base_url::{LOCAL_DEFAULT_BASE_URL, resolve_base_url};
pub use submit_form::{SUBMIT_TIMEOUT, SubmissionOutcome, SubmitFormUseCase, SubmitReceipt};
