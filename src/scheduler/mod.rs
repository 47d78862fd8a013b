//! Keep-alive scheduling subsystem.
//!
//! # Data Flow
//! ```text
//! start():
//!     → spawn scheduler task
//!     → wait warm-up delay → probe (if visible)
//!     → loop: wait interval ± jitter → probe (if visible) → re-arm
//!
//! Visibility flips to hidden:
//!     → armed timer keeps running, no-ops at fire time
//!
//! Visibility flips to visible:
//!     → one immediate out-of-cycle probe; armed timer untouched
//!
//! stop() / handle dropped:
//!     → shutdown broadcast → pending timer cancelled, task exits
//! ```
//!
//! # States
//! - Idle: no task running
//! - Armed: timer pending for a future probe cycle
//! - Suspended: session hidden; timer still pending but gated at fire time
//!
//! # Design Decisions
//! - One pinned timer, re-armed only after the previous probe settles, so
//!   cycles never overlap
//! - Fire-time visibility check instead of cancel/recreate on every flip
//! - A probe failure never stops the schedule; the jittered re-arm is the
//!   sole retry mechanism

pub mod jitter;
pub mod runner;

pub use runner::KeepaliveScheduler;
