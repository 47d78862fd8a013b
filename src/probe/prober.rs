//! The liveness probe itself.

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use tokio::time;

use crate::config::schema::{EndpointConfig, ProbeConfig};
use crate::probe::outcome::ProbeOutcome;

const PROBE_USER_AGENT: &str = "keepalive-probe";

/// Issues bounded GET requests against the configured endpoint and
/// classifies what came back.
pub struct Prober {
    client: Client,
    endpoint: EndpointConfig,
    request_timeout: Duration,
}

/// Raw result of one HTTP attempt, before classification.
enum Attempt {
    Status(StatusCode),
    TimedOut,
    Failed(String),
}

impl Prober {
    pub fn new(endpoint: EndpointConfig, probe: &ProbeConfig) -> Self {
        // Plain client: no cookie store, no default auth headers. Liveness
        // pings must not carry credentials.
        Self {
            client: Client::new(),
            endpoint,
            request_timeout: probe.timeout(),
        }
    }

    /// Issue one liveness probe. Never fails; every outcome is classified
    /// and logged.
    pub async fn probe(&self) -> ProbeOutcome {
        match self.attempt(&self.endpoint.health_path).await {
            Attempt::Status(status) if status == StatusCode::NOT_FOUND => {
                tracing::info!(
                    path = %self.endpoint.health_path,
                    "Health path not found, probing service root instead"
                );
                let fallback = self.attempt(&self.endpoint.fallback_path).await;
                self.classify(fallback)
            }
            attempt => self.classify(attempt),
        }
    }

    async fn attempt(&self, path: &str) -> Attempt {
        let url = format!("{}{}", self.endpoint.base_url.trim_end_matches('/'), path);

        let request = self
            .client
            .get(&url)
            .header(header::USER_AGENT, PROBE_USER_AGENT);

        // Dropping the request future on deadline expiry aborts the
        // in-flight call.
        match time::timeout(self.request_timeout, request.send()).await {
            Ok(Ok(response)) => Attempt::Status(response.status()),
            Ok(Err(e)) => Attempt::Failed(e.to_string()),
            Err(_) => Attempt::TimedOut,
        }
    }

    fn classify(&self, attempt: Attempt) -> ProbeOutcome {
        match attempt {
            Attempt::Status(status) if status.is_success() => {
                tracing::debug!("Ping successful");
                ProbeOutcome::Success
            }
            Attempt::Status(status) if status == StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!("Rate limited (429), will retry at next interval");
                ProbeOutcome::ClientRateLimited
            }
            Attempt::Status(status) if status.is_server_error() => {
                tracing::warn!(
                    status = status.as_u16(),
                    "Server error, will retry at next interval"
                );
                ProbeOutcome::ServerError(status.as_u16())
            }
            Attempt::Status(status) => {
                // Any other response still proves the backend is awake.
                tracing::debug!(
                    status = status.as_u16(),
                    "Unexpected status, treating backend as alive"
                );
                ProbeOutcome::Success
            }
            Attempt::TimedOut => {
                tracing::warn!(
                    timeout_ms = self.request_timeout.as_millis() as u64,
                    "Request timed out, will retry at next interval"
                );
                ProbeOutcome::Timeout
            }
            Attempt::Failed(message) => {
                tracing::warn!(error = %message, "Ping failed");
                ProbeOutcome::NetworkFailure(message)
            }
        }
    }
}
