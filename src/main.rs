//! DNS forward policy planner.
//!
//! Loads a forwarding config and prints the order in which each group
//! would try its upstreams for a run of simulated queries.
//!
//! ```text
//! forward.toml
//!     → config (load + validate)
//!     → forward::GroupManager (one policy per group)
//!     → plan() per simulated query
//!     → stdout
//! ```

use std::path::PathBuf;

use clap::Parser;
use dns_forward::config::load_config;
use dns_forward::forward::{AttemptPlan, GroupManager, UpstreamGroup};
use dns_forward::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "dns-forward-plan")]
#[command(about = "Dry-run upstream selection policies for a DNS forwarder", long_about = None)]
struct Cli {
    /// Path to the forwarding config (TOML)
    #[arg(short, long)]
    config: PathBuf,

    /// Number of simulated queries per group
    #[arg(short, long, default_value_t = 5)]
    queries: usize,

    /// Only plan for this group
    #[arg(short, long)]
    group: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let loaded = load_config(&cli.config);
    let level = loaded
        .as_ref()
        .map(|c| c.observability.log_level.as_str())
        .unwrap_or("info");
    init_logging(level);

    let config = loaded.inspect_err(|e| {
        tracing::error!(path = %cli.config.display(), error = %e, "Failed to load configuration");
    })?;
    let manager = GroupManager::from_config(&config)?;

    tracing::info!(groups = manager.len(), queries = cli.queries, "Planning upstream attempts");

    let selected: Vec<&UpstreamGroup> = match &cli.group {
        Some(name) => match manager.get(name) {
            Some(group) => vec![group],
            None => {
                tracing::error!(group = %name, "Unknown group");
                return Err(format!("unknown group '{name}'").into());
            }
        },
        None => manager.groups().collect(),
    };

    for group in selected {
        println!(
            "{} ({}, {} upstreams)",
            group.name(),
            group.policy(),
            group.upstreams().len()
        );
        for query in 1..=cli.queries {
            println!("  #{query}: {}", render(&group.plan()));
        }
    }

    Ok(())
}

fn render<T: std::fmt::Display>(plan: &AttemptPlan<T>) -> String {
    let joined = plan
        .candidates()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    match plan {
        AttemptPlan::Ordered(_) => joined.join(" -> "),
        AttemptPlan::Race(_) => format!("race: {{{}}}", joined.join(", ")),
    }
}
