//! The scheduler task and its lifecycle.

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::config::schema::{KeepaliveConfig, ScheduleConfig};
use crate::observability::metrics;
use crate::probe::Prober;
use crate::scheduler::jitter::jittered_interval;
use crate::visibility::Visibility;

/// Owns the repeating probe timer.
///
/// `start()` spawns the scheduler task; `stop()` (or dropping the handle)
/// shuts it down. At most one task runs per instance, and within the task at
/// most one timer is ever pending.
pub struct KeepaliveScheduler {
    config: KeepaliveConfig,
    visibility: Visibility,
    shutdown_tx: broadcast::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl KeepaliveScheduler {
    pub fn new(config: KeepaliveConfig) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            config,
            visibility: Visibility::new(),
            shutdown_tx,
            task: None,
        }
    }

    /// Handle for reporting foreground/background changes of the hosting
    /// session.
    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    /// Start probing. Idempotent: calling while running is a no-op.
    pub fn start(&mut self) {
        if self.task.is_some() {
            tracing::debug!("Keepalive scheduler already started");
            return;
        }

        let prober = Prober::new(self.config.endpoint.clone(), &self.config.probe);
        let schedule = self.config.schedule.clone();
        let visibility = self.visibility.subscribe();
        let shutdown = self.shutdown_tx.subscribe();

        self.task = Some(tokio::spawn(run_loop(
            prober, schedule, visibility, shutdown,
        )));
    }

    /// Stop probing. Cancels the pending timer; a probe already in flight is
    /// left to settle, its outcome logged and discarded. Safe to call more
    /// than once and from teardown paths.
    pub fn stop(&mut self) {
        match self.task.take() {
            Some(_handle) => {
                let _ = self.shutdown_tx.send(());
                tracing::info!("Keepalive scheduler stopping");
            }
            None => {
                tracing::debug!("Keepalive scheduler already stopped");
            }
        }
    }
}

impl Drop for KeepaliveScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_loop(
    prober: Prober,
    schedule: ScheduleConfig,
    mut visibility: watch::Receiver<bool>,
    mut shutdown: broadcast::Receiver<()>,
) {
    tracing::info!(
        warmup_ms = schedule.warmup_ms,
        interval_ms = schedule.interval_ms,
        jitter_ms = schedule.jitter_ms,
        "Keepalive scheduler starting"
    );

    let mut was_visible = *visibility.borrow_and_update();
    let mut visibility_alive = true;

    // The single pending timer. First wait is the fixed warm-up delay;
    // every later wait is a fresh jittered interval.
    let timer = time::sleep(schedule.warmup());
    tokio::pin!(timer);

    loop {
        tokio::select! {
            // A stop wins over a due tick.
            biased;

            _ = shutdown.recv() => break,

            () = timer.as_mut() => {
                if *visibility.borrow() {
                    let outcome = prober.probe().await;
                    metrics::record_probe(&outcome);
                } else {
                    tracing::debug!("Session hidden, skipping scheduled probe");
                }
                // Re-arm only after the probe has settled; cycles never
                // overlap.
                timer.as_mut().reset(
                    Instant::now() + jittered_interval(schedule.interval(), schedule.jitter()),
                );
            }

            changed = visibility.changed(), if visibility_alive => {
                if changed.is_err() {
                    // Sender gone; the last observed state stands.
                    visibility_alive = false;
                    continue;
                }
                let now_visible = *visibility.borrow_and_update();
                if now_visible && !was_visible {
                    tracing::debug!("Session visible again, probing immediately");
                    let outcome = prober.probe().await;
                    metrics::record_probe(&outcome);
                } else if !now_visible && was_visible {
                    tracing::debug!("Session hidden, pausing probes");
                }
                was_visible = now_visible;
                // The armed timer is left untouched; hidden cycles simply
                // no-op at fire time.
            }
        }
    }

    tracing::info!("Keepalive scheduler stopped");
}
