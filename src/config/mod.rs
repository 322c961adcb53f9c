//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → ForwardConfig (validated, immutable)
//!     → forward::GroupManager (one policy instance per group)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ForwardConfig;
pub use schema::GroupConfig;
pub use schema::ObservabilityConfig;
pub use validation::{validate_config, ValidationError, MAX_UPSTREAMS};
