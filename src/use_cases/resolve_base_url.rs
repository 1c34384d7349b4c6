use url::Url;

use crate::domain::{ConfigError, PageEnvironment};

// Development API origin used when the page itself runs on a local host.
pub const LOCAL_DEFAULT_BASE_URL: &str = "http://localhost:5000";

// Resolve the API origin: runtime value, then page metadata, then the local default.
// The result has no trailing slash and parses as an absolute URL.
pub fn resolve_base_url(page: &PageEnvironment) -> Result<String, ConfigError> {
    let candidate = non_blank(page.runtime_base_url.as_deref())
        .or_else(|| non_blank(page.meta_base_url.as_deref()))
        .or_else(|| page.is_local().then_some(LOCAL_DEFAULT_BASE_URL))
        .ok_or(ConfigError::MissingBaseUrl)?;

    let base_url = candidate.trim_end_matches('/');

    let parsed = Url::parse(base_url).map_err(|err| ConfigError::InvalidBaseUrl {
        value: base_url.to_string(),
        reason: err.to_string(),
    })?;
    // Endpoint paths are appended to the origin, so it must be able to act as a base.
    if parsed.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }

    Ok(base_url.to_string())
}

// Join an endpoint path onto a resolved origin.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
