use serde::Deserialize;
use std::time::Duration;

use crate::domain::{ApiTransport, PageEnvironment, TransportError};
use crate::use_cases::resolve_base_url::{endpoint_url, resolve_base_url};

pub const HEALTH_PATH: &str = "/api/health";
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

// Lightweight reachability check. Failures are logged as warnings, never raised.
pub struct HealthProbeUseCase<T> {
    pub transport: T,
    pub page: PageEnvironment,
    pub timeout: Duration,
}

impl<T> HealthProbeUseCase<T>
where
    T: ApiTransport,
{
    pub fn new(transport: T, page: PageEnvironment) -> Self {
        Self {
            transport,
            page,
            timeout: HEALTH_TIMEOUT,
        }
    }

    #[tracing::instrument(name = "health_probe", skip_all)]
    pub async fn execute(&self) -> bool {
        let base_url = match resolve_base_url(&self.page) {
            Ok(base_url) => base_url,
            Err(err) => {
                tracing::warn!(error = %err, "api configuration not available, skipping probe.");
                return false;
            }
        };
        let url = endpoint_url(&base_url, HEALTH_PATH);
        tracing::debug!(url = %url, "probing api.");

        match self.transport.get(&url, self.timeout).await {
            Ok(response) if response.is_success() => {
                match serde_json::from_str::<HealthBody>(&response.body) {
                    Ok(body) => tracing::info!(url = %url, status = %body.status, "api is reachable."),
                    Err(_) => tracing::info!(url = %url, "api is reachable."),
                }
                true
            }
            Ok(response) => {
                tracing::warn!(url = %url, status = response.status, "health check returned failure status.");
                false
            }
            Err(TransportError::Timeout) => {
                tracing::warn!(url = %url, timeout_secs = self.timeout.as_secs(), "health check timed out.");
                false
            }
            Err(TransportError::Network(reason)) => {
                tracing::warn!(url = %url, %reason, "api is not reachable right now.");
                false
            }
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "health check failed.");
                false
            }
        }
    }
}
