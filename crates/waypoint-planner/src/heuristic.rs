//! Heuristic evaluators.
//!
//! A heuristic estimates the remaining cost from a state to the nearest
//! member of a target set. The engine only returns optimal plans when the
//! heuristic is admissible (never overestimates) and consistent (drops by at
//! most the edge cost between neighbours). Neither property is checked.

use std::hash::Hash;

use waypoint_core::{Cost, Position, TargetSet};

/// Lower-bound estimate of remaining cost.
pub trait Heuristic<S: Eq + Hash> {
    /// Estimate the cost from `state` to the nearest state in `targets`.
    ///
    /// Callers never pass an empty target set.
    fn estimate(&self, state: &S, targets: &TargetSet<S>) -> Cost;
}

impl<S, F> Heuristic<S> for F
where
    S: Eq + Hash,
    F: Fn(&S, &TargetSet<S>) -> Cost,
{
    fn estimate(&self, state: &S, targets: &TargetSet<S>) -> Cost {
        self(state, targets)
    }
}

/// Minimum Manhattan distance to any target.
///
/// Admissible and consistent on 4-connected grids where entering a cell
/// costs at least 1. Linear in the size of the target set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistance;

impl Heuristic<Position> for ManhattanDistance {
    fn estimate(&self, state: &Position, targets: &TargetSet<Position>) -> Cost {
        targets
            .iter()
            .map(|target| state.manhattan(target))
            .min()
            .unwrap_or(0)
    }
}

/// Always zero. Turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S: Eq + Hash> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S, _targets: &TargetSet<S>) -> Cost {
        0
    }
}
