//! Backend keep-alive daemon.
//!
//! Hosts the keep-alive scheduler as a standalone process:
//!
//! ```text
//! env / TOML file
//!     → config (validated)
//!     → KeepaliveScheduler::start()
//!         warm-up probe ──▶ GET <base>/api/v1/health
//!         every interval ± jitter ──▶ probe again
//!     → ctrl-c → stop()
//! ```
//!
//! The daemon has no foreground/background notion, so the visibility signal
//! stays at its always-visible default.

use keepalive::config;
use keepalive::observability::logging;
use keepalive::scheduler::KeepaliveScheduler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config()?;

    logging::init(&format!("keepalive={}", config.observability.log_level));

    tracing::info!(
        base_url = %config.endpoint.base_url,
        health_path = %config.endpoint.health_path,
        interval_ms = config.schedule.interval_ms,
        "Configuration loaded"
    );

    let mut scheduler = KeepaliveScheduler::new(config);
    scheduler.start();

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");
    scheduler.stop();

    Ok(())
}
