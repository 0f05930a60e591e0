//! Path reconstruction and plan replay.

use tracing::debug;
use waypoint_core::{Problem, Result, SearchError};

use crate::node::{NodeArena, NodeId};

/// Collect the actions leading from the root to `terminal`, in order.
///
/// The root contributes no action, so a terminal that is the root yields an
/// empty sequence.
pub fn reconstruct<S, A: Clone>(arena: &NodeArena<S, A>, terminal: NodeId) -> Vec<A> {
    let mut actions: Vec<A> = arena
        .ancestors(terminal)
        .filter_map(|node| node.action.clone())
        .collect();
    actions.reverse();
    actions
}

/// Apply `actions` one by one from `start`, returning every state visited.
///
/// The returned trail starts with `start` and has one more entry than
/// `actions`. An action with no matching transition fails the replay.
pub fn replay<P>(problem: &P, start: P::State, actions: &[P::Action]) -> Result<Vec<P::State>>
where
    P: Problem,
    P::Action: PartialEq,
{
    let mut trail = Vec::with_capacity(actions.len() + 1);
    let mut current = start;

    for (index, action) in actions.iter().enumerate() {
        let next = problem
            .transitions(&current)
            .into_iter()
            .find(|(candidate, _)| candidate == action)
            .map(|(_, state)| state);

        match next {
            Some(state) => {
                trail.push(std::mem::replace(&mut current, state));
            }
            None => {
                debug!("Replay rejected {:?} at index {} from {:?}", action, index, current);
                return Err(SearchError::InvalidAction {
                    index,
                    action: format!("{action:?}"),
                });
            }
        }
    }

    trail.push(current);
    Ok(trail)
}
