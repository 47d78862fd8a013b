//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files. The
//! defaults are the design constants of the keep-alive schedule; a default
//! `KeepaliveConfig` is a fully working configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the keep-alive scheduler.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct KeepaliveConfig {
    /// Remote endpoint to keep warm.
    pub endpoint: EndpointConfig,

    /// Probe cadence settings.
    pub schedule: ScheduleConfig,

    /// Per-request probe settings.
    pub probe: ProbeConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Remote endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL of the backend to keep alive.
    pub base_url: String,

    /// Primary liveness path probed each cycle.
    pub health_path: String,

    /// Fallback path probed once when the primary path returns 404.
    pub fallback_path: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "https://real-estate-price-backend.onrender.com".to_string(),
            health_path: "/api/v1/health".to_string(),
            fallback_path: "/".to_string(),
        }
    }
}

/// Probe cadence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Delay before the first probe after startup, in milliseconds.
    /// Confirms backend availability shortly after launch, outside the
    /// jittered cadence.
    pub warmup_ms: u64,

    /// Base interval between probes, in milliseconds.
    pub interval_ms: u64,

    /// Maximum random perturbation applied to each interval, in
    /// milliseconds. Spreads out pings from many concurrent sessions so
    /// they do not synchronize into traffic spikes.
    pub jitter_ms: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            warmup_ms: 60_000,
            interval_ms: 600_000,
            jitter_ms: 30_000,
        }
    }
}

impl ScheduleConfig {
    pub fn warmup(&self) -> Duration {
        Duration::from_millis(self.warmup_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn jitter(&self) -> Duration {
        Duration::from_millis(self.jitter_ms)
    }
}

/// Per-request probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Deadline for a single probe request, in milliseconds. On expiry the
    /// in-flight request is aborted.
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { timeout_ms: 8_000 }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_design_constants() {
        let config = KeepaliveConfig::default();
        assert_eq!(config.schedule.warmup_ms, 60_000);
        assert_eq!(config.schedule.interval_ms, 600_000);
        assert_eq!(config.schedule.jitter_ms, 30_000);
        assert_eq!(config.probe.timeout_ms, 8_000);
        assert_eq!(config.endpoint.health_path, "/api/v1/health");
        assert_eq!(config.endpoint.fallback_path, "/");
    }

    #[test]
    fn duration_helpers_convert_milliseconds() {
        let schedule = ScheduleConfig {
            warmup_ms: 1_500,
            interval_ms: 2_000,
            jitter_ms: 250,
        };
        assert_eq!(schedule.warmup(), Duration::from_millis(1_500));
        assert_eq!(schedule.interval(), Duration::from_secs(2));
        assert_eq!(schedule.jitter(), Duration::from_millis(250));
    }
}
