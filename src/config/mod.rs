//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! KEEPALIVE_CONFIG env var (optional TOML file)
//!     → loader.rs (parse & deserialize, defaults otherwise)
//!     → KEEPALIVE_API_URL env var (base URL override)
//!     → validation.rs (semantic checks)
//!     → KeepaliveConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults equal to the design constants, so the
//!   zero-config path works out of the box
//! - Config is immutable once loaded; the scheduler never re-reads it
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::EndpointConfig;
pub use schema::KeepaliveConfig;
pub use schema::ProbeConfig;
pub use schema::ScheduleConfig;
