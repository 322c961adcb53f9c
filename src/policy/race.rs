//! Race (fan-out) upstream selection.

use std::borrow::Cow;

use crate::policy::{PolicyKind, SelectionPolicy};

/// Hands back every upstream so the dispatcher can query them all at once.
///
/// The order carries no meaning here. Sending the query concurrently and
/// keeping the first good answer is the dispatcher's job; see
/// [`AttemptPlan::Race`](crate::forward::AttemptPlan::Race).
#[derive(Debug, Clone, Copy, Default)]
pub struct RacePolicy;

impl SelectionPolicy for RacePolicy {
    fn name(&self) -> &'static str {
        PolicyKind::Race.name()
    }

    fn list<'a, T: Clone>(&self, pool: &'a [T]) -> Cow<'a, [T]> {
        Cow::Borrowed(pool)
    }
}
