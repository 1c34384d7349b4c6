use serde::Deserialize;
use url::Url;

// What the hosting page knows about itself and the API it talks to.
// Passed explicitly into use cases instead of being read from globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEnvironment {
    // Explicit runtime-injected API origin (highest priority).
    pub runtime_base_url: Option<String>,
    // API origin declared in the page metadata.
    pub meta_base_url: Option<String>,
    // Address the page itself is served from.
    pub page_url: Url,
}

impl PageEnvironment {
    pub fn new(page_url: Url) -> Self {
        Self {
            runtime_base_url: None,
            meta_base_url: None,
            page_url,
        }
    }

    pub fn with_runtime_base_url(mut self, value: impl Into<String>) -> Self {
        self.runtime_base_url = Some(value.into());
        self
    }

    pub fn with_meta_base_url(mut self, value: impl Into<String>) -> Self {
        self.meta_base_url = Some(value.into());
        self
    }

    pub fn hostname(&self) -> &str {
        self.page_url.host_str().unwrap_or_default()
    }

    pub fn origin(&self) -> String {
        self.page_url.origin().ascii_serialization()
    }

    pub fn is_local(&self) -> bool {
        matches!(self.hostname(), "localhost" | "127.0.0.1")
    }

    // True when the page declares an origin on its own, without the local fallback.
    pub fn has_configured_base_url(&self) -> bool {
        [&self.runtime_base_url, &self.meta_base_url]
            .into_iter()
            .flatten()
            .any(|value| !value.trim().is_empty())
    }
}

// Manual fallback contact path quoted in failure alerts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactChannels {
    pub whatsapp: Option<String>,
    pub email: Option<String>,
}

impl ContactChannels {
    // Lines listing each configured channel.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(whatsapp) = self.whatsapp.as_deref().filter(|v| !v.is_empty()) {
            lines.push(format!("WhatsApp: {whatsapp}"));
        }
        if let Some(email) = self.email.as_deref().filter(|v| !v.is_empty()) {
            lines.push(format!("Email: {email}"));
        }
        lines
    }

    // Whether a server-provided message already quotes one of the configured channels.
    pub fn mentioned_in(&self, text: &str) -> bool {
        [&self.whatsapp, &self.email]
            .into_iter()
            .flatten()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .any(|value| text.contains(value))
    }
}
