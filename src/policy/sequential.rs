//! Sequential upstream ordering.

use std::borrow::Cow;

use crate::policy::{PolicyKind, SelectionPolicy};

/// Always tries upstreams in configured order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialPolicy;

impl SelectionPolicy for SequentialPolicy {
    fn name(&self) -> &'static str {
        PolicyKind::Sequential.name()
    }

    fn list<'a, T: Clone>(&self, pool: &'a [T]) -> Cow<'a, [T]> {
        Cow::Borrowed(pool)
    }
}
