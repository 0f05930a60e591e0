//! Key-then-goal planning over a [`Maze`].

use tracing::info;
use waypoint_core::{Direction, Position, Result};
use waypoint_planner::{ManhattanDistance, Plan, SearchConfig, WaypointPlanner};

use crate::maze::Maze;

/// Find a cheapest route that picks up the key and then reaches a goal.
///
/// # Errors
///
/// Returns [`waypoint_core::SearchError::NoPath`] with `phase: 0` if the key
/// is unreachable and `phase: 1` if no goal is reachable from the key.
pub fn solve(maze: &Maze) -> Result<Plan<Position, Direction>> {
    solve_with(maze, &SearchConfig::default())
}

/// [`solve`] with explicit search budgets.
pub fn solve_with(maze: &Maze, config: &SearchConfig) -> Result<Plan<Position, Direction>> {
    info!(
        "Solving {}x{} maze from {} via key {} to {} goal(s)",
        maze.cols(),
        maze.rows(),
        maze.initial(),
        maze.key(),
        maze.goals().len()
    );

    let planner = WaypointPlanner::with_config(ManhattanDistance, config.clone());
    planner.solve(maze, &[maze.key_set(), maze.goal_set()], maze.initial())
}
