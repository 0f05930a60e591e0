//! # Waypoint Planner
//!
//! A* search and multi-phase waypoint sequencing over any [`Problem`].
//!
//! [`WaypointPlanner`] runs one [`AStar`] search per target set, feeding each
//! phase's end state into the next, and concatenates the resulting actions.
//!
//! [`Problem`]: waypoint_core::Problem

pub mod astar;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod path;
pub mod planner;
pub mod sequencer;
pub mod visited;

pub use astar::{AStar, Found};
pub use heuristic::{Heuristic, ManhattanDistance, ZeroHeuristic};
pub use path::{reconstruct, replay};
pub use planner::{Leg, Plan, SearchConfig, SearchStats};
pub use sequencer::WaypointPlanner;
