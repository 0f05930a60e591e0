//! Error types for the Waypoint search engine.

use thiserror::Error;

/// Main error type for Waypoint operations.
///
/// Every failure of a search is reported through this type. A phase that
/// exhausts its frontier yields [`SearchError::NoPath`]; the engine never
/// hands back a partial plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier emptied before any target state was reached.
    #[error("No path found in phase {phase}")]
    NoPath { phase: usize },

    /// A phase was invoked against an empty target set.
    #[error("Phase {phase} has an empty target set")]
    EmptyTargetSet { phase: usize },

    /// The sequencer was given no target sets at all.
    #[error("No phases to plan: the ordered target list is empty")]
    NoPhases,

    /// A configured search budget ran out before a target was reached.
    #[error("Search budget exhausted in phase {phase} after {expanded} expansions ({elapsed_ms}ms)")]
    BudgetExhausted {
        phase: usize,
        expanded: usize,
        elapsed_ms: u64,
    },

    /// Replaying a plan hit an action unavailable from the current state.
    #[error("Action {action} at index {index} is not available from the current state")]
    InvalidAction { index: usize, action: String },

    /// The problem instance failed validation.
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),
}

impl SearchError {
    /// Returns true if this error means the objective could not be reached.
    ///
    /// Budget exhaustion counts: a caller bounding search time treats it the
    /// same as an exhausted frontier.
    pub fn is_no_path(&self) -> bool {
        matches!(
            self,
            SearchError::NoPath { .. } | SearchError::BudgetExhausted { .. }
        )
    }

    /// Returns the phase index if the error belongs to a specific phase.
    pub fn phase(&self) -> Option<usize> {
        match self {
            SearchError::NoPath { phase } => Some(*phase),
            SearchError::EmptyTargetSet { phase } => Some(*phase),
            SearchError::BudgetExhausted { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}

/// Convenience Result type for Waypoint operations.
pub type Result<T> = std::result::Result<T, SearchError>;
