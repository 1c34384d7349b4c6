use crate::domain::{ContactChannels, Diagnosis, FormKind, SubmitError};

// Only the most likely causes are listed in the alert.
pub const MAX_LISTED_CAUSES: usize = 3;

// Build the blocking alert text for a failed submission.
pub fn failure_alert(
    kind: FormKind,
    error: &SubmitError,
    diagnosis: &Diagnosis,
    contact: &ContactChannels,
) -> String {
    match error {
        SubmitError::Configuration(err) => format!("Configuration error: {err}"),
        SubmitError::Validation { .. } => kind.validation_message().to_string(),
        SubmitError::Network { .. } => {
            let mut msg = diagnosis_block(kind.failure_headline(), diagnosis);
            msg.push_str("\nYou can also:\n");
            msg.push_str("• Check your internet connection\n");
            msg.push_str("• Try again in a few moments\n");
            msg.push_str(&contact_block(contact));
            msg
        }
        SubmitError::Timeout { .. } => {
            let headline = format!(
                "{}\nThe request took too long (timeout).",
                kind.failure_headline()
            );
            let mut msg = diagnosis_block(&headline, diagnosis);
            msg.push('\n');
            msg.push_str(&contact_block(contact));
            msg
        }
        SubmitError::Application { message, .. } => {
            let mut msg = format!("{}\n\n{message}", kind.failure_headline());
            if !contact.mentioned_in(message) {
                msg.push_str("\n\n");
                msg.push_str(&contact_block(contact));
            }
            msg
        }
    }
}

// Headline, the most likely causes and the suggestion.
fn diagnosis_block(headline: &str, diagnosis: &Diagnosis) -> String {
    let mut msg = format!("{headline}\n\nPossible causes:\n");
    for cause in diagnosis.possible_causes.iter().take(MAX_LISTED_CAUSES) {
        msg.push_str(&format!("• {cause}\n"));
    }
    msg.push_str(&format!("\nSuggestion: {}\n", diagnosis.suggestion));
    msg
}

fn contact_block(contact: &ContactChannels) -> String {
    let lines = contact.lines();
    if lines.is_empty() {
        return "If the problem persists, please reach us through our other contact channels."
            .to_string();
    }

    let mut block = "If the problem persists, contact us directly:".to_string();
    for line in lines {
        block.push_str("\n  ");
        block.push_str(&line);
    }
    block
}
