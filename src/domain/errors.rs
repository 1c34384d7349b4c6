use std::fmt;
use std::time::Duration;

// Problems with the API origin configuration. Always raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingBaseUrl,
    InvalidBaseUrl { value: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingBaseUrl => write!(
                f,
                "API base URL is not configured. Set API_BASE_URL, [page].api_base_url or \
                 [page].meta_api_base_url to the API origin (e.g. https://api.example.com)."
            ),
            ConfigError::InvalidBaseUrl { value, reason } => {
                write!(f, "invalid API URL: {value} ({reason})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// Failures reported by a transport implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    // The bounded wait elapsed before response headers arrived.
    Timeout,
    // No server could be reached (refused, DNS, reset, offline).
    Network(String),
    // Anything else the client raised (redirect loops, body errors, ...).
    Other(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Timeout => write!(f, "request timed out"),
            TransportError::Network(reason) => write!(f, "network error: {reason}"),
            TransportError::Other(reason) => write!(f, "request error: {reason}"),
        }
    }
}

impl std::error::Error for TransportError {}

// Every way a submission attempt can end without success. All are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Configuration(ConfigError),
    Validation {
        missing: Vec<&'static str>,
    },
    Network {
        url: String,
        reason: String,
    },
    Timeout {
        url: String,
        after: Duration,
    },
    // `status` is `None` when the request failed client-side without a response.
    Application {
        url: String,
        status: Option<u16>,
        message: String,
    },
}

impl SubmitError {
    // The URL that was attempted, if the attempt got that far.
    pub fn url(&self) -> Option<&str> {
        match self {
            SubmitError::Configuration(_) | SubmitError::Validation { .. } => None,
            SubmitError::Network { url, .. }
            | SubmitError::Timeout { url, .. }
            | SubmitError::Application { url, .. } => Some(url),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Configuration(err) => write!(f, "configuration error: {err}"),
            SubmitError::Validation { missing } => {
                write!(f, "missing required fields: {}", missing.join(", "))
            }
            SubmitError::Network { url, reason } => {
                write!(f, "could not reach {url}: {reason}")
            }
            SubmitError::Timeout { url, after } => {
                write!(f, "request to {url} timed out after {}", describe_duration(*after))
            }
            SubmitError::Application { message, .. } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::Configuration(err) => Some(err),
            _ => None,
        }
    }
}

// Human wording for a timeout bound; sub-second bounds are kept in milliseconds.
pub fn describe_duration(duration: Duration) -> String {
    if duration.subsec_nanos() == 0 {
        let secs = duration.as_secs();
        format!("{secs} second{}", if secs == 1 { "" } else { "s" })
    } else {
        format!("{} milliseconds", duration.as_millis())
    }
}

impl From<ConfigError> for SubmitError {
    fn from(err: ConfigError) -> Self {
        SubmitError::Configuration(err)
    }
}
