mod diagnosis;
mod errors;
mod form;
mod page;
mod payload;
mod ports;
mod view;

// Re-export the domain boundary types and ports.
pub use diagnosis::{Diagnosis, ErrorType};
pub use errors::{ConfigError, SubmitError, TransportError, describe_duration};
pub use form::{BUSY_LABEL, FormKind};
pub use page::{ContactChannels, PageEnvironment};
pub use payload::SubmissionPayload;
pub use ports::{ApiResponse, ApiTransport, FormView};
pub use view::{FormState, Modal, SubmitControl};
