//! # Waypoint Maze
//!
//! Grid mazes solved in two phases: reach the key, then any goal.
//!
//! ```
//! use waypoint_maze::{solve, Maze};
//!
//! let maze = Maze::builder(3, 1)
//!     .initial((0, 0))
//!     .key((2, 0))
//!     .goal((1, 0))
//!     .build()
//!     .unwrap();
//! let plan = solve(&maze).unwrap();
//! let tokens: Vec<&str> = plan.actions().iter().map(|d| d.token()).collect();
//! assert_eq!(tokens, ["R", "R", "L"]);
//! ```

pub mod maze;
pub mod solve;

pub use maze::{Maze, MazeBuilder, DEFAULT_CELL_COST};
pub use solve::{solve, solve_with};
