//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the endpoint base URL and probe paths
//! - Validate value ranges (intervals and timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config
//! - Runs before a config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::KeepaliveConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid probe path '{path}': must start with '/'")]
    InvalidPath { path: String },

    #[error("schedule.interval_ms must be greater than zero")]
    ZeroInterval,

    #[error("probe.timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("schedule.jitter_ms ({jitter_ms}) must not exceed schedule.interval_ms ({interval_ms})")]
    JitterExceedsInterval { jitter_ms: u64, interval_ms: u64 },
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &KeepaliveConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.endpoint.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.endpoint.base_url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.endpoint.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    for path in [&config.endpoint.health_path, &config.endpoint.fallback_path] {
        if !path.starts_with('/') {
            errors.push(ValidationError::InvalidPath { path: path.clone() });
        }
    }

    if config.schedule.interval_ms == 0 {
        errors.push(ValidationError::ZeroInterval);
    }

    if config.probe.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.schedule.jitter_ms > config.schedule.interval_ms {
        errors.push(ValidationError::JitterExceedsInterval {
            jitter_ms: config.schedule.jitter_ms,
            interval_ms: config.schedule.interval_ms,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&KeepaliveConfig::default()).is_ok());
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let mut config = KeepaliveConfig::default();
        config.endpoint.base_url = "not a url".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::InvalidBaseUrl { .. }]
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let mut config = KeepaliveConfig::default();
        config.endpoint.base_url = "ftp://example.com".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::InvalidBaseUrl { .. }]
        ));
    }

    #[test]
    fn collects_every_error() {
        let mut config = KeepaliveConfig::default();
        config.endpoint.health_path = "health".to_string();
        config.schedule.interval_ms = 0;
        config.probe.timeout_ms = 0;

        let errors = validate_config(&config).unwrap_err();
        // bad path, zero interval, zero timeout, jitter > interval
        assert_eq!(errors.len(), 4);
    }
}
