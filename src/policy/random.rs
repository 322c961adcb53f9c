//! Random upstream ordering.

use std::borrow::Cow;

use crate::policy::{PolicyKind, SelectionPolicy, SharedRng};

/// Uniformly random permutation of the pool on every call.
///
/// Pools of one or two upstreams are the common case and skip the
/// general shuffle: one has a single ordering, two need a coin flip.
#[derive(Debug, Clone, Default)]
pub struct RandomPolicy {
    rng: SharedRng,
}

impl RandomPolicy {
    /// Draw from the process-wide generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw from a caller-owned generator.
    pub fn with_rng(rng: SharedRng) -> Self {
        Self { rng }
    }
}

impl SelectionPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        PolicyKind::Random.name()
    }

    fn list<'a, T: Clone>(&self, pool: &'a [T]) -> Cow<'a, [T]> {
        match pool.len() {
            0 | 1 => Cow::Borrowed(pool),
            2 => {
                if self.rng.coin_flip() {
                    Cow::Owned(vec![pool[1].clone(), pool[0].clone()])
                } else {
                    Cow::Borrowed(pool)
                }
            }
            n => Cow::Owned(
                self.rng
                    .permutation(n)
                    .into_iter()
                    .map(|i| pool[i].clone())
                    .collect(),
            ),
        }
    }
}
