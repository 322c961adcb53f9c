//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every group has a known policy and a usable upstream pool
//! - Detect duplicate group names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ForwardConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system
//! - Empty pools are rejected here so policies never see one

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{ForwardConfig, GroupConfig};
use crate::policy::{PolicyError, PolicyKind};
use crate::upstream::{parse_upstream, UpstreamError};

/// Maximum number of upstreams in one group.
pub const MAX_UPSTREAMS: usize = 15;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("group #{index} has an empty name")]
    EmptyGroupName { index: usize },

    #[error("group '{0}' is defined more than once")]
    DuplicateGroup(String),

    #[error("group '{group}': {source}")]
    Policy { group: String, source: PolicyError },

    #[error("group '{group}' has no upstreams")]
    NoUpstreams { group: String },

    #[error("group '{group}' has {count} upstreams, at most {max} allowed", max = MAX_UPSTREAMS)]
    TooManyUpstreams { group: String, count: usize },

    #[error("group '{group}': {source}")]
    Upstream { group: String, source: UpstreamError },
}

/// Validate the whole configuration.
pub fn validate_config(config: &ForwardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, group) in config.groups.iter().enumerate() {
        if group.name.trim().is_empty() {
            errors.push(ValidationError::EmptyGroupName { index });
        } else if !seen.insert(group.name.as_str()) {
            errors.push(ValidationError::DuplicateGroup(group.name.clone()));
        }

        validate_group(group, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_group(group: &GroupConfig, errors: &mut Vec<ValidationError>) {
    if let Err(source) = group.policy.parse::<PolicyKind>() {
        errors.push(ValidationError::Policy {
            group: group.name.clone(),
            source,
        });
    }

    match group.upstreams.len() {
        0 => errors.push(ValidationError::NoUpstreams {
            group: group.name.clone(),
        }),
        count if count > MAX_UPSTREAMS => errors.push(ValidationError::TooManyUpstreams {
            group: group.name.clone(),
            count,
        }),
        _ => {}
    }

    for spec in &group.upstreams {
        if let Err(source) = parse_upstream(spec) {
            errors.push(ValidationError::Upstream {
                group: group.name.clone(),
                source,
            });
        }
    }
}
