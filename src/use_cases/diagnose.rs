use url::Url;

use crate::domain::{Diagnosis, ErrorType, SubmitError, describe_duration};

const NETWORK_CAUSES: [&str; 5] = [
    "The API is offline or not reachable",
    "CORS (Cross-Origin Resource Sharing) misconfiguration",
    "The API URL is wrong or does not exist",
    "Network connectivity problem",
    "A firewall or proxy is blocking the request",
];

const CHECK_SERVER_SUGGESTION: &str = "Check that the API is running and reachable.";

// Classify a failed submission for user messaging. Never influences retries.
pub fn diagnose(error: &SubmitError, page_origin: &str) -> Diagnosis {
    let url = error.url().map(str::to_string);

    match error {
        SubmitError::Network { url, .. } => Diagnosis {
            url: Some(url.clone()),
            error_type: ErrorType::NetworkError,
            possible_causes: NETWORK_CAUSES.iter().map(|c| c.to_string()).collect(),
            suggestion: network_suggestion(url, page_origin),
        },
        SubmitError::Timeout { url, after } => Diagnosis {
            url: Some(url.clone()),
            error_type: ErrorType::Timeout,
            possible_causes: vec![format!(
                "The request took longer than {}",
                describe_duration(*after)
            )],
            suggestion: "The API may be slow or overloaded. Please try again.".to_string(),
        },
        _ => Diagnosis {
            url,
            error_type: ErrorType::Unknown,
            possible_causes: vec!["Unknown error".to_string()],
            suggestion: "Check the logs for more details.".to_string(),
        },
    }
}

fn network_suggestion(attempted_url: &str, page_origin: &str) -> String {
    let Ok(parsed) = Url::parse(attempted_url) else {
        return CHECK_SERVER_SUGGESTION.to_string();
    };
    let api_origin = parsed.origin().ascii_serialization();

    if api_origin != page_origin {
        format!(
            "The request is being made from {page_origin} to {api_origin}. \
             Check that the server allows CORS requests from this origin."
        )
    } else {
        CHECK_SERVER_SUGGESTION.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn network(url: &str) -> SubmitError {
        SubmitError::Network {
            url: url.to_string(),
            reason: "connection refused".to_string(),
        }
    }

    #[test]
    fn when_connection_fails_then_error_type_is_network_error_with_all_causes() {
        let diagnosis = diagnose(
            &network("https://api.example.com/api/messages"),
            "https://www.example.com",
        );

        assert_eq!(diagnosis.error_type, ErrorType::NetworkError);
        assert_eq!(diagnosis.possible_causes.len(), 5);
        assert_eq!(
            diagnosis.url.as_deref(),
            Some("https://api.example.com/api/messages")
        );
    }

    #[test]
    fn when_origins_differ_then_suggestion_names_both() {
        let diagnosis = diagnose(
            &network("https://api.example.com/api/messages"),
            "https://www.example.com",
        );

        assert!(diagnosis.suggestion.contains("https://www.example.com"));
        assert!(diagnosis.suggestion.contains("https://api.example.com"));
        assert!(diagnosis.suggestion.contains("CORS"));
    }

    #[test]
    fn when_origins_match_then_suggestion_asks_to_check_server() {
        let same = diagnose(
            &network("https://www.example.com/api/messages"),
            "https://www.example.com",
        );
        let cross = diagnose(
            &network("https://api.example.com/api/messages"),
            "https://www.example.com",
        );

        assert_eq!(same.suggestion, CHECK_SERVER_SUGGESTION);
        assert_ne!(same.suggestion, cross.suggestion);
    }

    #[test]
    fn when_attempted_url_is_unparseable_then_generic_suggestion_is_used() {
        let diagnosis = diagnose(&network("not a url"), "https://www.example.com");

        assert_eq!(diagnosis.suggestion, CHECK_SERVER_SUGGESTION);
    }

    #[test]
    fn when_request_times_out_then_error_type_is_timeout_with_bound() {
        let diagnosis = diagnose(
            &SubmitError::Timeout {
                url: "https://api.example.com/api/budgets".to_string(),
                after: Duration::from_secs(30),
            },
            "https://www.example.com",
        );

        assert_eq!(diagnosis.error_type, ErrorType::Timeout);
        assert_eq!(
            diagnosis.possible_causes,
            vec!["The request took longer than 30 seconds".to_string()]
        );
    }

    #[test]
    fn when_bound_is_sub_second_then_cause_keeps_milliseconds() {
        let diagnosis = diagnose(
            &SubmitError::Timeout {
                url: "https://api.example.com/api/messages".to_string(),
                after: Duration::from_millis(250),
            },
            "https://www.example.com",
        );

        assert_eq!(
            diagnosis.possible_causes,
            vec!["The request took longer than 250 milliseconds".to_string()]
        );
    }

    #[test]
    fn when_server_rejected_request_then_error_type_is_unknown() {
        let diagnosis = diagnose(
            &SubmitError::Application {
                url: "https://api.example.com/api/budgets".to_string(),
                status: Some(400),
                message: "Missing fields: city".to_string(),
            },
            "https://www.example.com",
        );

        assert_eq!(diagnosis.error_type, ErrorType::Unknown);
        assert_eq!(diagnosis.error_type.to_string(), "unknown");
    }
}
