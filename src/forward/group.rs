//! Forwarding group management.
//!
//! # Responsibilities
//! - Build one upstream pool and policy per configured group
//! - Produce attempt plans for queries routed to a group
//! - Count policy selections per group

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{ConfigError, ForwardConfig, GroupConfig, ValidationError};
use crate::forward::AttemptPlan;
use crate::observability::metrics;
use crate::policy::{Policy, PolicyKind, SelectionPolicy};
use crate::upstream::{parse_upstream, Upstream};

/// An upstream pool with its selection policy.
#[derive(Debug)]
pub struct UpstreamGroup {
    name: String,
    upstreams: Vec<Arc<Upstream>>,
    policy: Policy,
}

impl UpstreamGroup {
    pub fn new(name: impl Into<String>, upstreams: Vec<Arc<Upstream>>, policy: Policy) -> Self {
        Self {
            name: name.into(),
            upstreams,
            policy,
        }
    }

    /// Build a group from its configuration entry.
    pub fn from_config(config: &GroupConfig) -> Result<Self, ValidationError> {
        let kind: PolicyKind = config.policy.parse().map_err(|source| ValidationError::Policy {
            group: config.name.clone(),
            source,
        })?;

        let upstreams = config
            .upstreams
            .iter()
            .map(|spec| parse_upstream(spec).map(Arc::new))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ValidationError::Upstream {
                group: config.name.clone(),
                source,
            })?;

        Ok(Self::new(config.name.clone(), upstreams, Policy::new(kind)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn upstreams(&self) -> &[Arc<Upstream>] {
        &self.upstreams
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Order the pool for one query.
    pub fn plan(&self) -> AttemptPlan<Arc<Upstream>> {
        let candidates = self.policy.list(&self.upstreams).into_owned();

        metrics::record_selection(&self.name, self.policy.name());

        tracing::trace!(
            group = %self.name,
            policy = %self.policy,
            first = ?candidates.first().map(|u| u.addr),
            candidates = candidates.len(),
            "Planned upstream attempts"
        );

        AttemptPlan::new(self.policy.kind(), candidates)
    }
}

/// Manages forwarding groups by name.
#[derive(Debug, Default)]
pub struct GroupManager {
    /// Groups in configuration order.
    groups: Vec<UpstreamGroup>,
    /// Group name -> index into `groups`.
    index: HashMap<String, usize>,
}

impl GroupManager {
    /// Validate the configuration and build every group.
    pub fn from_config(config: &ForwardConfig) -> Result<Self, ConfigError> {
        crate::config::validate_config(config).map_err(ConfigError::Validation)?;

        let mut manager = Self::default();
        for group_config in &config.groups {
            let group = UpstreamGroup::from_config(group_config)
                .map_err(|e| ConfigError::Validation(vec![e]))?;

            tracing::debug!(
                group = %group.name,
                policy = %group.policy,
                upstreams = group.upstreams.len(),
                "Forwarding group ready"
            );
            manager.insert(group);
        }

        Ok(manager)
    }

    /// Add a group, replacing any existing group with the same name.
    pub fn insert(&mut self, group: UpstreamGroup) {
        match self.index.get(&group.name) {
            Some(&i) => self.groups[i] = group,
            None => {
                self.index.insert(group.name.clone(), self.groups.len());
                self.groups.push(group);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&UpstreamGroup> {
        self.index.get(name).map(|&i| &self.groups[i])
    }

    /// Plan attempts for a query routed to `name`.
    pub fn plan(&self, name: &str) -> Option<AttemptPlan<Arc<Upstream>>> {
        let plan = self.get(name).map(UpstreamGroup::plan);
        if plan.is_none() {
            tracing::debug!(group = %name, "Group not found in GroupManager");
        }
        plan
    }

    /// All groups, in configuration order.
    pub fn groups(&self) -> impl Iterator<Item = &UpstreamGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::Transport;

    fn upstream(port: u16) -> Arc<Upstream> {
        Arc::new(Upstream::new(
            format!("127.0.0.1:{port}").parse().unwrap(),
            Transport::Dns,
        ))
    }

    fn group_config(name: &str, policy: &str, upstreams: &[&str]) -> GroupConfig {
        GroupConfig {
            name: name.into(),
            policy: policy.into(),
            upstreams: upstreams.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_group_round_robin_plan() {
        let pool = vec![upstream(5301), upstream(5302), upstream(5303)];
        let group = UpstreamGroup::new(".", pool.clone(), PolicyKind::RoundRobin.name().parse().unwrap());

        let plan = group.plan();
        assert!(!plan.is_race());
        assert_eq!(plan.candidates()[0].addr.port(), 5302);
        assert_eq!(plan.candidates()[1].addr.port(), 5301);
        assert_eq!(plan.candidates()[2].addr.port(), 5303);

        // Plans share the pool's handles.
        assert!(Arc::ptr_eq(&plan.candidates()[1], &pool[0]));
    }

    #[test]
    fn test_race_group_fans_out() {
        let pool = vec![upstream(5301), upstream(5302)];
        let group = UpstreamGroup::new("race", pool, Policy::new(PolicyKind::Race));

        let plan = group.plan();
        assert!(plan.is_race());
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_manager_from_config() {
        let config = ForwardConfig {
            groups: vec![
                group_config(".", "sequential", &["8.8.8.8", "8.8.4.4"]),
                group_config("lan", "race", &["192.168.1.1"]),
            ],
            ..Default::default()
        };

        let manager = GroupManager::from_config(&config).unwrap();
        assert_eq!(manager.len(), 2);

        let names: Vec<_> = manager.groups().map(UpstreamGroup::name).collect();
        assert_eq!(names, [".", "lan"]);

        let plan = manager.plan(".").unwrap();
        let order: Vec<_> = plan.candidates().iter().map(|u| u.to_string()).collect();
        assert_eq!(order, ["dns://8.8.8.8:53", "dns://8.8.4.4:53"]);

        assert!(manager.plan("lan").unwrap().is_race());
        assert!(manager.plan("missing").is_none());
    }

    #[test]
    fn test_manager_rejects_invalid_config() {
        let config = ForwardConfig {
            groups: vec![group_config(".", "weighted", &[])],
            ..Default::default()
        };
        match GroupManager::from_config(&config).unwrap_err() {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_insert_replaces_by_name() {
        let mut manager = GroupManager::default();
        manager.insert(UpstreamGroup::new("a", vec![upstream(1)], Policy::default()));
        manager.insert(UpstreamGroup::new("a", vec![upstream(2)], Policy::new(PolicyKind::Sequential)));

        assert_eq!(manager.len(), 1);
        let group = manager.get("a").unwrap();
        assert_eq!(group.policy().kind(), PolicyKind::Sequential);
        assert_eq!(group.upstreams()[0].addr.port(), 2);
    }
}
