//! Liveness probing subsystem.
//!
//! # Data Flow
//! ```text
//! Scheduler cycle fires:
//!     → prober.rs issues GET <base_url><health_path> (no credentials)
//!     → Bounded by the per-request deadline
//!     → 404 on the primary path: one fallback GET to the service root
//!     → outcome.rs tags the result
//!     → Outcome is logged at a per-outcome severity, then discarded
//! ```
//!
//! # Design Decisions
//! - A probe never fails: every failure mode maps to a `ProbeOutcome`
//! - Outcomes decide log severity and a metrics label, nothing else;
//!   the schedule is never altered by what a probe observed
//! - The fallback's own outcome stands in for the whole cycle

pub mod outcome;
pub mod prober;

pub use outcome::ProbeOutcome;
pub use prober::Prober;
