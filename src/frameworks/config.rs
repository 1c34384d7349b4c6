use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fmt, fs, io};
use url::Url;

use crate::domain::{ContactChannels, PageEnvironment};

pub const DEFAULT_CONFIG_PATH: &str = "site.toml";
pub const DEFAULT_PAGE_URL: &str = "http://localhost/";

// Explicit runtime API origin; takes precedence over the config file.
pub fn api_base_url_override() -> Option<String> {
    non_blank(env::var("API_BASE_URL").ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub page: PageConfig,
    pub contact: ContactChannels,
    pub timeouts: TimeoutConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub url: String,
    pub api_base_url: Option<String>,
    pub meta_api_base_url: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PAGE_URL.to_string(),
            api_base_url: None,
            meta_api_base_url: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    pub submit_secs: u64,
    pub health_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            submit_secs: 30,
            health_secs: 5,
        }
    }
}

#[derive(Debug)]
pub enum ConfigLoadError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    InvalidPageUrl { value: String, source: url::ParseError },
    InvalidTimeout { path: PathBuf, key: &'static str },
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLoadError::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            ConfigLoadError::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            ConfigLoadError::InvalidPageUrl { value, source } => {
                write!(f, "invalid page url {value}: {source}")
            }
            ConfigLoadError::InvalidTimeout { path, key } => {
                write!(f, "invalid [timeouts].{key} in {}: must be at least 1", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigLoadError::Read { source, .. } => Some(source),
            ConfigLoadError::Parse { source, .. } => Some(source),
            ConfigLoadError::InvalidPageUrl { source, .. } => Some(source),
            ConfigLoadError::InvalidTimeout { .. } => None,
        }
    }
}

impl SiteConfig {
    // Load the config file (defaults when absent) and apply env overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let mut config = match fs::read_to_string(path) {
            Ok(text) => Self::from_toml(path, &text)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "config file not found, using defaults.");
                Self::default()
            }
            Err(source) => {
                return Err(ConfigLoadError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        config.apply_api_base_url_override(api_base_url_override());

        Ok(config)
    }

    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        for (key, secs) in [
            ("submit_secs", config.timeouts.submit_secs),
            ("health_secs", config.timeouts.health_secs),
        ] {
            if secs == 0 {
                return Err(ConfigLoadError::InvalidTimeout {
                    path: path.to_path_buf(),
                    key,
                });
            }
        }

        Ok(config)
    }

    // A non-blank runtime origin replaces whatever the file declared.
    pub fn apply_api_base_url_override(&mut self, value: Option<String>) {
        if let Some(value) = non_blank(value) {
            tracing::debug!(api_base_url = %value, "using API_BASE_URL from environment.");
            self.page.api_base_url = Some(value);
        }
    }

    pub fn page_environment(&self) -> Result<PageEnvironment, ConfigLoadError> {
        let page_url =
            Url::parse(&self.page.url).map_err(|source| ConfigLoadError::InvalidPageUrl {
                value: self.page.url.clone(),
                source,
            })?;

        Ok(PageEnvironment {
            runtime_base_url: self.page.api_base_url.clone(),
            meta_base_url: self.page.meta_api_base_url.clone(),
            page_url,
        })
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.timeouts.submit_secs)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.timeouts.health_secs)
    }
}

// Field values for one form, stored as a flat TOML table of strings.
pub fn read_form_file(path: &Path) -> Result<BTreeMap<String, String>, ConfigLoadError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
