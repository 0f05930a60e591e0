//! The problem collaborator and target sets.
//!
//! A [`Problem`] describes an implicit graph: it is asked for the moves out of
//! a state and the cost of entering a state, and nothing else. The engine owns
//! no part of it and never mutates it.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::Cost;

/// An implicit state graph that can be searched.
///
/// # Contract
///
/// - `transitions` must be finite and a pure function of `state`.
/// - The returned order must be deterministic: the engine inserts successors
///   in exactly this order, so equal-priority ties resolve the same way on
///   every run.
/// - `cost` must be stable for the lifetime of a search.
pub trait Problem {
    /// A position in the graph.
    type State: Clone + Eq + Hash + Debug;

    /// Label of a one-step transition.
    type Action: Clone + Debug;

    /// All one-step moves available from `state`, as `(action, resulting state)`.
    fn transitions(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    /// Cost of entering `state`, whichever action reached it.
    fn cost(&self, state: &Self::State) -> Cost;
}

impl<P: Problem + ?Sized> Problem for &P {
    type State = P::State;
    type Action = P::Action;

    fn transitions(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)> {
        (**self).transitions(state)
    }

    fn cost(&self, state: &Self::State) -> Cost {
        (**self).cost(state)
    }
}

/// An immutable set of states, any one of which completes a phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet<S: Eq + Hash> {
    states: HashSet<S>,
}

impl<S: Eq + Hash> TargetSet<S> {
    /// Create a target set from any collection of states.
    pub fn new(states: impl IntoIterator<Item = S>) -> Self {
        Self {
            states: states.into_iter().collect(),
        }
    }

    /// A target set holding exactly one state.
    pub fn single(state: S) -> Self {
        Self::new([state])
    }

    /// Returns true if `state` satisfies this target set.
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Number of states in the set.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if no state can satisfy this set.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over the states in the set.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.states.iter()
    }
}

impl<S: Eq + Hash> FromIterator<S> for TargetSet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
