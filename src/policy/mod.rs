//! Upstream selection policies.
//!
//! # Data Flow
//! ```text
//! Query arrives for a forwarding group
//!     → group's Policy::list(pool)
//!         - random.rs (uniform random permutation)
//!         - round_robin.rs (rotate a new upstream to the front)
//!         - sequential.rs (config order)
//!         - race.rs (config order, caller fans out)
//!     → dispatcher tries candidates in the returned order
//! ```
//!
//! # Design Decisions
//! - Closed set of four strategies; callers match exhaustively on `race`
//! - Policies only reorder: output is always a permutation of the input
//! - Unchanged orders are returned borrowed, no copy
//! - Only round robin holds mutable state (one atomic counter)

pub mod race;
pub mod random;
pub mod rng;
pub mod round_robin;
pub mod sequential;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use race::RacePolicy;
pub use random::RandomPolicy;
pub use rng::SharedRng;
pub use round_robin::RoundRobinPolicy;
pub use sequential::SequentialPolicy;

/// Behaviour shared by every selection strategy.
pub trait SelectionPolicy {
    /// Canonical name used in configuration and logs.
    fn name(&self) -> &'static str;

    /// Order `pool` for a single query.
    ///
    /// The result holds exactly the handles of `pool`, each once.
    /// An empty pool yields an empty result.
    fn list<'a, T: Clone>(&self, pool: &'a [T]) -> Cow<'a, [T]>;
}

/// Error returned when a policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("unknown policy '{0}', expected one of: random, round_robin, sequential, race")]
    Unknown(String),
}

/// Fieldless tag for each strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolicyKind {
    #[default]
    Random,
    RoundRobin,
    Sequential,
    Race,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Random,
        PolicyKind::RoundRobin,
        PolicyKind::Sequential,
        PolicyKind::Race,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PolicyKind::Random => "random",
            PolicyKind::RoundRobin => "round_robin",
            PolicyKind::Sequential => "sequential",
            PolicyKind::Race => "race",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PolicyError::Unknown(s.to_string()))
    }
}

/// A configured selection policy for one forwarding group.
#[derive(Debug)]
pub enum Policy {
    Random(RandomPolicy),
    RoundRobin(RoundRobinPolicy),
    Sequential(SequentialPolicy),
    Race(RacePolicy),
}

impl Policy {
    /// Build a fresh policy of the given kind.
    ///
    /// Random policies draw from the process-wide generator.
    pub fn new(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Random => Policy::Random(RandomPolicy::new()),
            PolicyKind::RoundRobin => Policy::RoundRobin(RoundRobinPolicy::new()),
            PolicyKind::Sequential => Policy::Sequential(SequentialPolicy),
            PolicyKind::Race => Policy::Race(RacePolicy),
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Random(_) => PolicyKind::Random,
            Policy::RoundRobin(_) => PolicyKind::RoundRobin,
            Policy::Sequential(_) => PolicyKind::Sequential,
            Policy::Race(_) => PolicyKind::Race,
        }
    }

    /// True when the caller must query every candidate concurrently.
    pub fn is_race(&self) -> bool {
        matches!(self, Policy::Race(_))
    }
}

impl Default for Policy {
    fn default() -> Self {
        Policy::new(PolicyKind::default())
    }
}

impl SelectionPolicy for Policy {
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn list<'a, T: Clone>(&self, pool: &'a [T]) -> Cow<'a, [T]> {
        match self {
            Policy::Random(p) => p.list(pool),
            Policy::RoundRobin(p) => p.list(pool),
            Policy::Sequential(p) => p.list(pool),
            Policy::Race(p) => p.list(pool),
        }
    }
}

impl From<RandomPolicy> for Policy {
    fn from(p: RandomPolicy) -> Self {
        Policy::Random(p)
    }
}

impl From<RoundRobinPolicy> for Policy {
    fn from(p: RoundRobinPolicy) -> Self {
        Policy::RoundRobin(p)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<PolicyKind>().map(Policy::new)
    }
}
