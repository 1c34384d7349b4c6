// Submit control label shown while a request is in flight.
pub const BUSY_LABEL: &str = "Sending...";

// The forms the site exposes. Each kind owns its field layout, endpoint and copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Contact,
    Budget,
}

impl FormKind {
    pub fn name(self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Budget => "budget",
        }
    }

    // Fields that must be non-empty after trimming before any request is made.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            FormKind::Contact => &["name", "email", "subject", "message"],
            FormKind::Budget => &["name", "email", "phone", "service", "details", "city"],
        }
    }

    pub fn optional_fields(self) -> &'static [&'static str] {
        match self {
            FormKind::Contact => &[],
            FormKind::Budget => &["company"],
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            FormKind::Contact => "/api/messages",
            FormKind::Budget => "/api/budgets",
        }
    }

    pub fn idle_label(self) -> &'static str {
        match self {
            FormKind::Contact => "Send message",
            FormKind::Budget => "Send request",
        }
    }

    // Budget requests are filled in from the service modal.
    pub fn in_modal(self) -> bool {
        matches!(self, FormKind::Budget)
    }

    pub fn validation_message(self) -> &'static str {
        match self {
            FormKind::Contact => "Please fill in all fields.",
            FormKind::Budget => "Please fill in all required fields.",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::Contact => "Message sent successfully!",
            FormKind::Budget => "Budget request sent successfully! We will get in touch soon.",
        }
    }

    pub fn failure_headline(self) -> &'static str {
        match self {
            FormKind::Contact => "We could not send your message.",
            FormKind::Budget => "We could not send your budget request.",
        }
    }

    pub(crate) fn all_fields(self) -> impl Iterator<Item = &'static str> {
        self.required_fields()
            .iter()
            .chain(self.optional_fields())
            .copied()
    }
}
