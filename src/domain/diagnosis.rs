use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    NetworkError,
    Timeout,
    Unknown,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorType::NetworkError => "network_error",
            ErrorType::Timeout => "timeout",
            ErrorType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

// Built per failed request for user messaging, then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub url: Option<String>,
    pub error_type: ErrorType,
    pub possible_causes: Vec<String>,
    pub suggestion: String,
}
