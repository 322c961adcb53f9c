//! Attempt plans handed to the dispatcher.

use crate::policy::PolicyKind;

/// The upstreams to try for one query and how to try them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptPlan<T> {
    /// Try candidates one at a time, in this order, until one answers.
    Ordered(Vec<T>),
    /// Query every candidate concurrently and keep the first good answer.
    Race(Vec<T>),
}

impl<T> AttemptPlan<T> {
    pub fn new(kind: PolicyKind, candidates: Vec<T>) -> Self {
        match kind {
            PolicyKind::Race => AttemptPlan::Race(candidates),
            PolicyKind::Random | PolicyKind::RoundRobin | PolicyKind::Sequential => {
                AttemptPlan::Ordered(candidates)
            }
        }
    }

    pub fn candidates(&self) -> &[T] {
        match self {
            AttemptPlan::Ordered(c) | AttemptPlan::Race(c) => c,
        }
    }

    pub fn into_candidates(self) -> Vec<T> {
        match self {
            AttemptPlan::Ordered(c) | AttemptPlan::Race(c) => c,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates().len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates().is_empty()
    }

    pub fn is_race(&self) -> bool {
        matches!(self, AttemptPlan::Race(_))
    }
}
