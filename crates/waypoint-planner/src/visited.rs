//! Closed set of expanded states.

use std::collections::HashSet;
use std::hash::Hash;

/// States already selected for expansion in the current phase.
///
/// Insertion is monotonic: a state is never unmarked.
#[derive(Debug, Clone)]
pub struct VisitedSet<S: Eq + Hash> {
    states: HashSet<S>,
}

impl<S: Eq + Hash> VisitedSet<S> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Returns true if `state` has already been expanded.
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Mark `state` as expanded.
    ///
    /// Returns `false` if it was already marked.
    pub fn mark(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    /// Number of expanded states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if nothing has been expanded yet.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Eq + Hash> Default for VisitedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_is_idempotent() {
        let mut visited = VisitedSet::new();
        assert!(!visited.contains(&(1, 2)));
        assert!(visited.mark((1, 2)));
        assert!(!visited.mark((1, 2)));
        assert!(visited.contains(&(1, 2)));
        assert_eq!(visited.len(), 1);
    }
}
