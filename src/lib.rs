//! Upstream selection for a DNS forwarding proxy.

pub mod config;
pub mod forward;
pub mod observability;
pub mod policy;
pub mod upstream;

pub use config::ForwardConfig;
pub use forward::{AttemptPlan, GroupManager, UpstreamGroup};
pub use policy::{Policy, PolicyKind, SelectionPolicy};
pub use upstream::Upstream;
