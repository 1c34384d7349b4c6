use std::collections::BTreeMap;

use crate::domain::form::{BUSY_LABEL, FormKind};
use crate::domain::payload::SubmissionPayload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    enabled: bool,
    label: String,
    idle_label: &'static str,
}

impl SubmitControl {
    pub fn new(idle_label: &'static str) -> Self {
        Self {
            enabled: true,
            label: idle_label.to_string(),
            idle_label,
        }
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.enabled = !busy;
        self.label = if busy { BUSY_LABEL } else { self.idle_label }.to_string();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

// Overlay dialog state; `aria_hidden` mirrors the attribute the page toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    visible: bool,
    aria_hidden: bool,
}

impl Default for Modal {
    fn default() -> Self {
        Self {
            visible: false,
            aria_hidden: true,
        }
    }
}

impl Modal {
    pub fn open(&mut self) {
        self.visible = true;
        self.aria_hidden = false;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.aria_hidden = true;
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn aria_hidden(&self) -> bool {
        self.aria_hidden
    }
}

// View binding for one form: the field values, its submit control and its modal.
// Built once, then handed to the submission flow through the `FormView` port.
#[derive(Debug, Clone)]
pub struct FormState {
    kind: FormKind,
    fields: BTreeMap<String, String>,
    submit: SubmitControl,
    modal: Option<Modal>,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            fields: BTreeMap::new(),
            submit: SubmitControl::new(kind.idle_label()),
            modal: kind.in_modal().then(Modal::default),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload::collect(self.kind, &self.fields)
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn submit_control_mut(&mut self) -> &mut SubmitControl {
        &mut self.submit
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn reset(&mut self) {
        self.fields.clear();
    }

    pub fn open_modal(&mut self) {
        if let Some(modal) = self.modal.as_mut() {
            modal.open();
        }
    }

    // Service-card entry point: opens the modal with the service already chosen.
    pub fn open_modal_for_service(&mut self, service: &str) {
        let service = service.trim();
        if !service.is_empty() {
            self.set_field("service", service);
        }
        self.open_modal();
    }

    pub fn close_modal(&mut self) {
        if let Some(modal) = self.modal.as_mut() {
            modal.close();
        }
    }
}
