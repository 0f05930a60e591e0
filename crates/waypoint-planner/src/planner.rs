//! Planner configuration and plan types.

use std::ops::Range;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use waypoint_core::Cost;

/// Configuration for the search engine.
///
/// Every budget is off by default, which gives an unbounded search that runs
/// until a target is reached or the frontier is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of states expanded per phase.
    pub max_expansions: Option<usize>,

    /// Maximum wall-clock time per phase in milliseconds.
    pub max_search_time_ms: Option<u64>,

    /// Maximum number of actions in the concatenated plan.
    pub max_plan_length: Option<usize>,
}

impl SearchConfig {
    /// Cap the number of expansions per phase.
    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Cap the wall-clock time per phase.
    pub fn with_max_search_time_ms(mut self, ms: u64) -> Self {
        self.max_search_time_ms = Some(ms);
        self
    }

    /// Cap the length of the whole plan.
    pub fn with_max_plan_length(mut self, max: usize) -> Self {
        self.max_plan_length = Some(max);
        self
    }
}

/// Milliseconds since `started`, clamped to `u64::MAX`.
pub(crate) fn elapsed_ms(started: Instant) -> u64 {
    duration_ms(started.elapsed())
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Counters collected while searching one phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped and expanded.
    pub expanded: usize,

    /// Nodes created, root included.
    pub generated: usize,

    /// Frontier entries popped after their state had already been expanded.
    pub stale_discarded: usize,

    /// Largest frontier size reached.
    pub frontier_high_water: usize,
}

/// One phase of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg<S> {
    /// Index of the phase (0-based).
    pub phase: usize,

    /// State the phase started from.
    pub start: S,

    /// Target state the phase reached.
    pub end: S,

    /// This phase's slice of [`Plan::actions`].
    pub actions: Range<usize>,

    /// Path cost of this phase.
    pub cost: Cost,

    /// Search counters for this phase.
    pub stats: SearchStats,
}

/// A complete multi-phase plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<S, A> {
    actions: Vec<A>,
    legs: Vec<Leg<S>>,
}

impl<S, A> Plan<S, A> {
    pub(crate) fn new() -> Self {
        Self {
            actions: Vec::new(),
            legs: Vec::new(),
        }
    }

    /// Append one phase's actions and bookkeeping.
    pub(crate) fn push_leg(
        &mut self,
        phase: usize,
        start: S,
        end: S,
        actions: Vec<A>,
        cost: Cost,
        stats: SearchStats,
    ) {
        let from = self.actions.len();
        self.actions.extend(actions);
        self.legs.push(Leg {
            phase,
            start,
            end,
            actions: from..self.actions.len(),
            cost,
            stats,
        });
    }

    /// The full action sequence, phases concatenated in order.
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// Consume the plan, keeping only the actions.
    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }

    /// Per-phase breakdown.
    pub fn legs(&self) -> &[Leg<S>] {
        &self.legs
    }

    /// Actions belonging to one phase.
    pub fn leg_actions(&self, phase: usize) -> Option<&[A]> {
        self.legs
            .get(phase)
            .map(|leg| &self.actions[leg.actions.clone()])
    }

    /// Sum of every phase's path cost.
    pub fn total_cost(&self) -> Cost {
        self.legs.iter().map(|leg| leg.cost).sum()
    }

    /// State reached by the last phase.
    pub fn final_state(&self) -> Option<&S> {
        self.legs.last().map(|leg| &leg.end)
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if the plan has no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
