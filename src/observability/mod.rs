//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Config load, group build, per-query planning:
//!     → logging.rs (structured log events)
//!     → metrics.rs (selection counters)
//!
//! Consumers:
//!     → stdout via tracing-subscriber
//!     → whichever metrics recorder the embedding process installs
//! ```
//!
//! # Design Decisions
//! - Structured logging through `tracing`
//! - `RUST_LOG` overrides the configured level
//! - Metrics go through the `metrics` facade; no recorder means no cost

pub mod logging;
pub mod metrics;
