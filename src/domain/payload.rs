use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::errors::SubmitError;
use crate::domain::form::FormKind;

// Field name -> trimmed value, serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmissionPayload {
    fields: BTreeMap<String, String>,
}

impl SubmissionPayload {
    // Picks the fields the form declares out of the raw values. Unknown keys are
    // dropped and absent optional fields are sent as empty strings.
    pub fn collect(kind: FormKind, raw: &BTreeMap<String, String>) -> Self {
        let fields = kind
            .all_fields()
            .map(|name| {
                let value = raw.get(name).map(|v| v.trim()).unwrap_or_default();
                (name.to_string(), value.to_string())
            })
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn missing_required(&self, kind: FormKind) -> Vec<&'static str> {
        kind.required_fields()
            .iter()
            .copied()
            .filter(|name| self.get(name).is_none_or(|value| value.trim().is_empty()))
            .collect()
    }

    pub fn validate(&self, kind: FormKind) -> Result<(), SubmitError> {
        let missing = self.missing_required(kind);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SubmitError::Validation { missing })
        }
    }
}
