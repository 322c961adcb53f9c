//! Forwarding groups.
//!
//! # Data Flow
//! ```text
//! Query matched → forwarding group identified
//!     → group.rs (look up the group's pool and policy)
//!     → Policy::list orders the pool
//!     → plan.rs wraps the order:
//!         - Ordered (try one at a time, fail over in order)
//!         - Race (send to all, first good answer wins)
//!     → Dispatcher consumes the plan
//! ```
//!
//! # Design Decisions
//! - One policy instance per group; round-robin state is per group
//! - Pools are fixed at startup and never filtered here
//! - Upstreams are shared as `Arc` so plans are cheap to build

pub mod group;
pub mod plan;

pub use group::{GroupManager, UpstreamGroup};
pub use plan::AttemptPlan;
