//! Backend Keep-Alive Library
//!
//! Periodically probes a remote backend's health endpoint so that free-tier
//! hosting does not spin the service down between visits. Probing is
//! best-effort: every failure mode is logged and swallowed, and the only
//! retry mechanism is the next regularly scheduled cycle.

pub mod config;
pub mod observability;
pub mod probe;
pub mod scheduler;
pub mod visibility;

pub use config::schema::KeepaliveConfig;
pub use probe::{ProbeOutcome, Prober};
pub use scheduler::KeepaliveScheduler;
pub use visibility::Visibility;
