use serde_json::Value;

// Raw text bodies are quoted in the alert up to this many characters.
pub const MAX_DETAILS_CHARS: usize = 200;

pub fn generic_status_message(status: u16) -> String {
    format!("request failed with status {status}")
}

// Turn a non-success response body into the message shown to the user.
//
// - `{"error": "..", "details": ".."}` -> the error, with details appended
// - `".."` (bare JSON string)          -> the string
// - other non-empty text               -> generic message + truncated text
// - nothing usable                     -> generic message
pub fn error_message_from_body(status: u16, body: &str) -> String {
    let generic = generic_status_message(status);
    let body = body.trim();
    if body.is_empty() {
        return generic;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            let message = non_empty_str(map.get("error")).unwrap_or(generic.as_str());
            match non_empty_str(map.get("details")) {
                Some(details) => with_details(message, details),
                None => message.to_string(),
            }
        }
        Ok(Value::String(message)) if !message.trim().is_empty() => message,
        Ok(_) => generic,
        Err(_) => with_details(&generic, &truncate_chars(body, MAX_DETAILS_CHARS)),
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.trim().is_empty())
}

fn with_details(message: &str, details: &str) -> String {
    format!("{message}\n\nDetails: {details}")
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
