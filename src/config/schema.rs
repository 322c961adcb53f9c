//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::policy::PolicyKind;

/// Root configuration for the forwarder.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ForwardConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Forwarding groups, each with its own upstream pool and policy.
    pub groups: Vec<GroupConfig>,
}

/// One forwarding destination group.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupConfig {
    /// Group identifier for lookup and logging (e.g. a zone like ".").
    pub name: String,

    /// Selection policy name.
    #[serde(default = "default_policy")]
    pub policy: String,

    /// Upstream specs, in failover order.
    #[serde(default)]
    pub upstreams: Vec<String>,
}

fn default_policy() -> String {
    PolicyKind::default().name().to_string()
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
