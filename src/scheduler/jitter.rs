//! Interval jitter.

use rand::Rng;
use std::time::Duration;

/// Perturb a base interval by a uniformly distributed offset in
/// `[-jitter_max, +jitter_max]`, floored at zero.
///
/// Keeps many concurrent sessions from synchronizing their pings into
/// traffic spikes against the backend.
pub fn jittered_interval(base: Duration, jitter_max: Duration) -> Duration {
    let jitter_ms = jitter_max.as_millis() as i64;
    if jitter_ms == 0 {
        return base;
    }

    let offset = rand::thread_rng().gen_range(-jitter_ms..=jitter_ms);
    let next_ms = (base.as_millis() as i64).saturating_add(offset).max(0);

    Duration::from_millis(next_ms as u64)
}
