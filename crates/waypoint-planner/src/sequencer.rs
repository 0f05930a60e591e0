//! Multi-phase planning: chain one A* search per target set.

use std::time::Instant;

use tracing::{info, warn};
use waypoint_core::{Problem, Result, SearchError, TargetSet};

use crate::astar::AStar;
use crate::heuristic::Heuristic;
use crate::planner::{elapsed_ms, Plan, SearchConfig};

/// Plans through an ordered list of objectives.
///
/// Phase `i` starts where phase `i - 1` ended. A failed phase fails the whole
/// plan; no partial plan is ever returned.
#[derive(Debug, Clone)]
pub struct WaypointPlanner<H> {
    search: AStar<H>,
}

impl<H> WaypointPlanner<H> {
    /// Create a new planner with default configuration.
    pub fn new(heuristic: H) -> Self {
        Self {
            search: AStar::new(heuristic),
        }
    }

    /// Create a new planner with custom configuration.
    pub fn with_config(heuristic: H, config: SearchConfig) -> Self {
        Self {
            search: AStar::with_config(heuristic, config),
        }
    }

    /// Get the planner configuration.
    pub fn config(&self) -> &SearchConfig {
        self.search.config()
    }

    /// Update the planner configuration.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.search.set_config(config);
    }

    /// The single-phase engine used for each leg.
    pub fn engine(&self) -> &AStar<H> {
        &self.search
    }

    /// Plan from `start` through every target set in order.
    ///
    /// # Errors
    ///
    /// - [`SearchError::NoPhases`] if `targets` is empty.
    /// - [`SearchError::EmptyTargetSet`] for the first empty target set,
    ///   before any phase runs.
    /// - Any single-phase error, tagged with the failing phase index.
    /// - [`SearchError::BudgetExhausted`] if the plan grows past
    ///   `max_plan_length`.
    pub fn solve<P>(
        &self,
        problem: &P,
        targets: &[TargetSet<P::State>],
        start: P::State,
    ) -> Result<Plan<P::State, P::Action>>
    where
        P: Problem,
        H: Heuristic<P::State>,
    {
        if targets.is_empty() {
            return Err(SearchError::NoPhases);
        }
        if let Some(phase) = targets.iter().position(TargetSet::is_empty) {
            warn!("Phase {} of {} has an empty target set", phase, targets.len());
            return Err(SearchError::EmptyTargetSet { phase });
        }

        let started = Instant::now();
        info!("Planning {} phase(s) from {:?}", targets.len(), start);

        let mut plan = Plan::new();
        let mut current = start;

        for (phase, target_set) in targets.iter().enumerate() {
            let found = self
                .search
                .search_phase(problem, current.clone(), target_set, phase)
                .map_err(|err| {
                    warn!("Plan aborted in phase {}: {}", phase, err);
                    err
                })?;

            let cost = found.cost();
            let stats = found.stats();
            let (end, actions) = found.into_parts();
            plan.push_leg(phase, current, end.clone(), actions, cost, stats);

            if let Some(max) = self.config().max_plan_length {
                if plan.len() > max {
                    warn!(
                        "Plan length {} exceeds the limit of {} after phase {}",
                        plan.len(),
                        max,
                        phase
                    );
                    return Err(SearchError::BudgetExhausted {
                        phase,
                        expanded: stats.expanded,
                        elapsed_ms: elapsed_ms(started),
                    });
                }
            }

            current = end;
        }

        info!(
            "Plan complete: {} action(s), total cost {}, in {}ms",
            plan.len(),
            plan.total_cost(),
            elapsed_ms(started)
        );
        Ok(plan)
    }
}

impl<H: Default> Default for WaypointPlanner<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}
