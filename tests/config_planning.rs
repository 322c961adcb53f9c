//! End-to-end: config file → groups → attempt plans.

use std::collections::HashSet;

use dns_forward::config::{load_config, ConfigError, ValidationError};
use dns_forward::forward::{AttemptPlan, GroupManager};
use dns_forward::policy::PolicyKind;
use dns_forward::upstream::Transport;

mod common;

const CONFIG: &str = r#"
[observability]
log_level = "warn"

[[groups]]
name = "."
policy = "round_robin"
upstreams = ["127.0.0.1:5301", "127.0.0.1:5302", "127.0.0.1:5303"]

[[groups]]
name = "corp.example"
policy = "sequential"
upstreams = ["10.0.0.53", "tls://10.0.0.54"]

[[groups]]
name = "fast"
policy = "race"
upstreams = ["8.8.8.8", "1.1.1.1", "9.9.9.9"]

[[groups]]
name = "default-policy"
upstreams = ["8.8.4.4", "1.0.0.1"]
"#;

fn manager() -> GroupManager {
    let file = common::write_config(CONFIG);
    let config = load_config(file.path()).unwrap();
    GroupManager::from_config(&config).unwrap()
}

#[test]
fn test_groups_built_in_config_order() {
    let manager = manager();
    let kinds: Vec<_> = manager.groups().map(|g| g.policy().kind()).collect();
    assert_eq!(
        kinds,
        [
            PolicyKind::RoundRobin,
            PolicyKind::Sequential,
            PolicyKind::Race,
            PolicyKind::Random,
        ]
    );

    let corp = manager.get("corp.example").unwrap();
    assert_eq!(corp.upstreams()[1].transport, Transport::Tls);
    assert_eq!(corp.upstreams()[1].addr.port(), 853);
}

#[test]
fn test_round_robin_group_matches_pool_handles() {
    let manager = manager();
    let expected = common::upstream_pool(3);

    let plan = manager.plan(".").unwrap();
    assert!(!plan.is_race());
    assert!(common::same_multiset(plan.candidates(), &expected));

    // Counter keeps going: leading indices 2, 0, 1, 2.
    let firsts: Vec<u16> = (0..4)
        .map(|_| manager.plan(".").unwrap().candidates()[0].addr.port())
        .collect();
    assert_eq!(firsts, [5303, 5301, 5302, 5303]);
}

#[test]
fn test_race_group_returns_every_upstream() {
    let manager = manager();
    match manager.plan("fast").unwrap() {
        AttemptPlan::Race(candidates) => {
            let ips: HashSet<_> = candidates.iter().map(|u| u.addr.ip()).collect();
            assert_eq!(ips.len(), 3);
        }
        AttemptPlan::Ordered(_) => panic!("race group must fan out"),
    }
}

#[test]
fn test_default_policy_group_keeps_membership() {
    let manager = manager();
    let group = manager.get("default-policy").unwrap();
    for _ in 0..50 {
        let plan = group.plan();
        assert!(common::same_multiset(plan.candidates(), group.upstreams()));
    }
}

#[test]
fn test_unknown_group() {
    assert!(manager().plan("nope").is_none());
}

#[test]
fn test_invalid_file_is_rejected() {
    let file = common::write_config(
        r#"
        [[groups]]
        name = "."
        policy = "round-robin"
        upstreams = ["8.8.8.8"]
        "#,
    );

    match load_config(file.path()) {
        Err(ConfigError::Validation(errors)) => {
            assert!(matches!(errors.as_slice(), [ValidationError::Policy { .. }]));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}
