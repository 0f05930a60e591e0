//! Search-tree nodes stored in a flat arena.
//!
//! Children refer to their parent by [`NodeId`]; parents never refer to
//! children. A node is immutable once pushed.

use std::fmt;

use waypoint_core::Cost;

/// Index of a node inside its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// State this node represents.
    pub state: S,
    /// Action that produced this node (`None` for the root).
    pub action: Option<A>,
    /// Parent node (`None` for the root).
    pub parent: Option<NodeId>,
    /// g(n): accumulated cost from the root.
    pub cost: Cost,
    /// Tree depth (root = 0).
    pub depth: u32,
}

impl<S, A> SearchNode<S, A> {
    /// Returns true for the root of the tree.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only store of search-tree nodes for a single phase.
#[derive(Debug, Clone)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Push the root node for `state` with zero cost.
    pub fn root(&mut self, state: S) -> NodeId {
        self.push(SearchNode {
            state,
            action: None,
            parent: None,
            cost: 0,
            depth: 0,
        })
    }

    /// Push a child of `parent` reached by `action`.
    ///
    /// The child's cost is the parent's cost plus `step_cost`, the cost of
    /// entering `state`.
    pub fn child(&mut self, parent: NodeId, action: A, state: S, step_cost: Cost) -> NodeId {
        let (cost, depth) = {
            let p = self.get(parent);
            (p.cost.saturating_add(step_cost), p.depth + 1)
        };
        self.push(SearchNode {
            state,
            action: Some(action),
            parent: Some(parent),
            cost,
            depth,
        })
    }

    /// Look up a node.
    ///
    /// Ids are only minted by this arena, so a lookup cannot miss.
    pub fn get(&self, id: NodeId) -> &SearchNode<S, A> {
        &self.nodes[id.0]
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node has been created.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S, A>> {
        self.nodes.iter()
    }

    /// Consume the arena, keeping only the state of node `id`.
    pub fn into_state(mut self, id: NodeId) -> S {
        self.nodes.swap_remove(id.0).state
    }

    /// Walk from `id` up to the root, yielding `id` first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, S, A> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }

    fn push(&mut self, node: SearchNode<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node and its ancestors, leaf first.
pub struct Ancestors<'a, S, A> {
    arena: &'a NodeArena<S, A>,
    next: Option<NodeId>,
}

impl<'a, S, A> Iterator for Ancestors<'a, S, A> {
    type Item = &'a SearchNode<S, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.arena.get(id);
        self.next = node.parent;
        Some(node)
    }
}
