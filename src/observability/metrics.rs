//! Metrics collection.
//!
//! # Metrics
//! - `forward_policy_selections_total` (counter): plans built, by group and policy
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; exporting is up to the host process

/// Counter of attempt plans built.
pub const POLICY_SELECTIONS: &str = "forward_policy_selections_total";

/// Record one policy selection for a group.
pub fn record_selection(group: &str, policy: &'static str) {
    metrics::counter!(
        POLICY_SELECTIONS,
        "group" => group.to_string(),
        "policy" => policy
    )
    .increment(1);
}
