//! Probe metrics.
//!
//! # Metrics
//! - `keepalive_probes_total` (counter): probes by outcome label
//! - `keepalive_backend_alive` (gauge): 1 after a successful probe, 0 after
//!   a failed one
//!
//! # Design Decisions
//! - Emitted through the `metrics` facade; a no-op unless the hosting
//!   process installs a recorder

use crate::probe::ProbeOutcome;

/// Record one settled probe cycle.
pub fn record_probe(outcome: &ProbeOutcome) {
    metrics::counter!("keepalive_probes_total", "outcome" => outcome.as_label()).increment(1);
    metrics::gauge!("keepalive_backend_alive").set(if outcome.is_success() { 1.0 } else { 0.0 });
}
