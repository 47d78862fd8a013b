//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Probe and scheduler produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (probe counters and liveness gauge)
//!
//! Consumers:
//!     → Log aggregation (stdout; filter via RUST_LOG)
//!     → Whatever metrics recorder the hosting process installs
//! ```
//!
//! # Design Decisions
//! - The library only emits; subscriber and recorder installation belong to
//!   the hosting process (the daemon binary installs the subscriber)
//! - Probe failures are diagnostics, never user-facing errors

pub mod logging;
pub mod metrics;
