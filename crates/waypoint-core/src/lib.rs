//! # Waypoint Core
//!
//! Core primitives and types for the Waypoint search engine.
//!
//! This crate provides the fundamental building blocks:
//! - [`Problem`] - The implicit graph a search runs against
//! - [`TargetSet`] - The states that complete one phase of a plan
//! - [`Position`] and [`Direction`] - Grid coordinates and moves
//! - [`SearchError`] - Engine error types

pub mod error;
pub mod problem;
pub mod types;

// Re-exports for convenience
pub use error::{Result, SearchError};
pub use problem::{Problem, TargetSet};
pub use types::*;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Result, SearchError};
    pub use crate::problem::{Problem, TargetSet};
    pub use crate::types::{Cost, Direction, Position};
}
