//! Resource tracking and allocation guards for search routines.
//!
//! Several strategies explore a number of partial paths that grows with the
//! number of simple paths in the graph, not with V+E. To avoid hard OOM
//! aborts and unbounded runs, solvers use:
//! - counter-based budgets ([`crate::context::ResourceLimits`])
//! - `try_reserve` wrappers to surface allocation failures as
//!   [`crate::context::SearchError`]
//!
//! The tracker is intentionally lightweight: budgets are approximate but
//! correlate strongly with memory usage and running time.

use crate::context::{ResourceCounts, ResourceLimits, SearchError};

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a search.
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    /// Generic loop-iteration / node-visit budget.
    #[inline]
    pub fn bump_steps(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        self.bump(stage, "steps", delta, self.limits.max_steps, |c| {
            &mut c.steps
        })
    }

    /// Queue/heap push budget.
    #[inline]
    pub fn bump_frontier(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        self.bump(
            stage,
            "frontier_entries",
            delta,
            self.limits.max_frontier_entries,
            |c| &mut c.frontier_entries,
        )
    }

    /// Partial-path arena budget.
    #[inline]
    pub fn bump_path_entries(
        &mut self,
        stage: &'static str,
        delta: u64,
    ) -> Result<(), SearchError> {
        self.bump(
            stage,
            "path_entries",
            delta,
            self.limits.max_path_entries,
            |c| &mut c.path_entries,
        )
    }

    /// Recursion-depth guard for the game-tree evaluators, checked before
    /// each descent.
    #[inline]
    pub fn check_depth(&self, stage: &'static str, depth: u64) -> Result<(), SearchError> {
        if depth > self.limits.max_depth {
            return Err(SearchError::LimitExceeded {
                stage,
                metric: "depth",
                limit: self.limits.max_depth,
                observed: depth,
                counts: self.counts,
            });
        }
        Ok(())
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut ResourceCounts) -> &mut u64,
    ) -> Result<(), SearchError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }

        Ok(())
    }

    pub fn try_reserve_vec<T>(
        &self,
        stage: &'static str,
        structure: &'static str,
        v: &mut Vec<T>,
        additional: usize,
    ) -> Result<(), SearchError> {
        v.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }
}
