//! Round-robin upstream ordering.

use std::borrow::Cow;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::policy::{PolicyKind, SelectionPolicy};

/// Round-robin selector.
/// Stores an internal counter to pick which upstream goes first.
///
/// The chosen upstream is moved to the front and the rest keep their
/// configured order, so failover after the first attempt stays stable.
/// The counter is bumped before use: the first call leads with index 1.
#[derive(Debug, Default)]
pub struct RoundRobinPolicy {
    robin: AtomicUsize,
}

impl RoundRobinPolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionPolicy for RoundRobinPolicy {
    fn name(&self) -> &'static str {
        PolicyKind::RoundRobin.name()
    }

    fn list<'a, T: Clone>(&self, pool: &'a [T]) -> Cow<'a, [T]> {
        let len = pool.len();
        if len == 0 {
            return Cow::Borrowed(pool);
        }

        let i = self.robin.fetch_add(1, Ordering::Relaxed).wrapping_add(1) % len;

        let mut robin = Vec::with_capacity(len);
        robin.push(pool[i].clone());
        robin.extend_from_slice(&pool[..i]);
        robin.extend_from_slice(&pool[i + 1..]);
        Cow::Owned(robin)
    }
}
