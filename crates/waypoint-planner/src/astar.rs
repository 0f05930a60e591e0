//! A* search against a single target set.

use std::hash::Hash;
use std::time::Instant;

use tracing::{debug, info, warn};
use waypoint_core::{Cost, Problem, Result, SearchError, TargetSet};

use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::path;
use crate::planner::{elapsed_ms, SearchConfig, SearchStats};
use crate::visited::VisitedSet;

/// A* search engine.
///
/// Holds no per-search state: every call to [`AStar::search`] builds and
/// drops its own node arena, frontier and visited set, so one engine can be
/// shared freely.
#[derive(Debug, Clone)]
pub struct AStar<H> {
    heuristic: H,
    config: SearchConfig,
}

/// The successful end of a single-phase search.
///
/// Owns the phase's search tree until the path is reconstructed.
#[derive(Debug)]
pub struct Found<S, A> {
    arena: NodeArena<S, A>,
    terminal: NodeId,
    stats: SearchStats,
}

impl<S, A: Clone> Found<S, A> {
    /// The terminal node.
    pub fn terminal(&self) -> &SearchNode<S, A> {
        self.arena.get(self.terminal)
    }

    /// The target state that was reached.
    pub fn state(&self) -> &S {
        &self.terminal().state
    }

    /// Path cost to the terminal node.
    pub fn cost(&self) -> Cost {
        self.terminal().cost
    }

    /// Search counters.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The search tree built by this phase.
    pub fn arena(&self) -> &NodeArena<S, A> {
        &self.arena
    }

    /// Actions from the start state to the terminal node.
    pub fn actions(&self) -> Vec<A> {
        path::reconstruct(&self.arena, self.terminal)
    }

    /// Consume the search tree, returning the terminal state and the actions
    /// that reach it.
    pub fn into_parts(self) -> (S, Vec<A>) {
        let actions = self.actions();
        let state = self.arena.into_state(self.terminal);
        (state, actions)
    }
}

impl<H> AStar<H> {
    /// Create a new engine with default configuration.
    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            config: SearchConfig::default(),
        }
    }

    /// Create a new engine with custom configuration.
    pub fn with_config(heuristic: H, config: SearchConfig) -> Self {
        Self { heuristic, config }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Update the engine configuration.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Get the heuristic.
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Find a minimum-cost path from `start` to any state in `targets`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::EmptyTargetSet`] if `targets` is empty.
    /// - [`SearchError::NoPath`] if the frontier empties first.
    /// - [`SearchError::BudgetExhausted`] if a configured budget runs out.
    pub fn search<P>(
        &self,
        problem: &P,
        start: P::State,
        targets: &TargetSet<P::State>,
    ) -> Result<Found<P::State, P::Action>>
    where
        P: Problem,
        H: Heuristic<P::State>,
    {
        self.search_phase(problem, start, targets, 0)
    }

    pub(crate) fn search_phase<P>(
        &self,
        problem: &P,
        start: P::State,
        targets: &TargetSet<P::State>,
        phase: usize,
    ) -> Result<Found<P::State, P::Action>>
    where
        P: Problem,
        H: Heuristic<P::State>,
    {
        if targets.is_empty() {
            warn!("Refusing to search phase {} against an empty target set", phase);
            return Err(SearchError::EmptyTargetSet { phase });
        }

        let started = Instant::now();
        info!(
            "Starting A* phase {} from {:?} toward {} target(s)",
            phase,
            start,
            targets.len()
        );

        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let mut visited = VisitedSet::new();
        let mut stats = SearchStats::default();

        let root = arena.root(start);
        frontier.insert(root, f_cost(arena.get(root), &self.heuristic, targets));
        stats.generated += 1;

        while let Some(entry) = frontier.pop_min() {
            let current = entry.node;
            let node = arena.get(current);

            // A cheaper entry for this state was already expanded.
            if visited.contains(&node.state) {
                stats.stale_discarded += 1;
                debug!("Discarding stale entry {} for {:?}", current, node.state);
                continue;
            }

            if targets.contains(&node.state) {
                stats.frontier_high_water = frontier.high_water();
                info!(
                    "A* phase {} reached {:?} at cost {}, expanded {} states in {}ms",
                    phase,
                    node.state,
                    node.cost,
                    stats.expanded,
                    elapsed_ms(started)
                );
                return Ok(Found {
                    arena,
                    terminal: current,
                    stats,
                });
            }

            self.check_budget(phase, &stats, started)?;

            let state = node.state.clone();
            debug!(
                "Expanding {:?} (g={}, f={})",
                state, node.cost, entry.key.f_cost
            );
            visited.mark(state.clone());
            stats.expanded += 1;

            for (action, next) in problem.transitions(&state) {
                if visited.contains(&next) {
                    continue;
                }
                let step_cost = problem.cost(&next);
                let child = arena.child(current, action, next, step_cost);
                frontier.insert(child, f_cost(arena.get(child), &self.heuristic, targets));
                stats.generated += 1;
            }
        }

        warn!(
            "A* phase {} exhausted its frontier after {} expansions",
            phase, stats.expanded
        );
        Err(SearchError::NoPath { phase })
    }

    fn check_budget(&self, phase: usize, stats: &SearchStats, started: Instant) -> Result<()> {
        let elapsed = elapsed_ms(started);

        let over_expansions = self
            .config
            .max_expansions
            .is_some_and(|max| stats.expanded >= max);
        let over_time = self
            .config
            .max_search_time_ms
            .is_some_and(|max| elapsed > max);

        if over_expansions || over_time {
            warn!(
                "A* phase {} exceeded its search budget ({} expansions, {}ms)",
                phase, stats.expanded, elapsed
            );
            return Err(SearchError::BudgetExhausted {
                phase,
                expanded: stats.expanded,
                elapsed_ms: elapsed,
            });
        }

        Ok(())
    }
}

impl<H: Default> Default for AStar<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}

/// Estimated total cost of a node, `g + h`.
pub fn f_cost<S: Eq + Hash, A>(
    node: &SearchNode<S, A>,
    heuristic: &impl Heuristic<S>,
    targets: &TargetSet<S>,
) -> Cost {
    node.cost.saturating_add(heuristic.estimate(&node.state, targets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::{ManhattanDistance, ZeroHeuristic};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::thread;
    use std::time::Duration;
    use waypoint_core::{Direction, Position};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// Explicit weighted digraph; edges keep their insertion order.
    #[derive(Default)]
    struct Graph {
        edges: HashMap<&'static str, Vec<(&'static str, &'static str)>>,
        costs: HashMap<&'static str, Cost>,
    }

    impl Graph {
        fn edge(mut self, from: &'static str, label: &'static str, to: &'static str) -> Self {
            self.edges.entry(from).or_default().push((label, to));
            self
        }

        fn entry_cost(mut self, state: &'static str, cost: Cost) -> Self {
            self.costs.insert(state, cost);
            self
        }
    }

    impl Problem for Graph {
        type State = &'static str;
        type Action = &'static str;

        fn transitions(&self, state: &&'static str) -> Vec<(&'static str, &'static str)> {
            self.edges.get(state).cloned().unwrap_or_default()
        }

        fn cost(&self, state: &&'static str) -> Cost {
            self.costs.get(state).copied().unwrap_or(1)
        }
    }

    /// Open `cols` x `rows` grid with unit costs.
    struct Open {
        cols: i64,
        rows: i64,
    }

    impl Problem for Open {
        type State = Position;
        type Action = Direction;

        fn transitions(&self, state: &Position) -> Vec<(Direction, Position)> {
            Direction::ALL
                .iter()
                .map(|d| (*d, state.step(*d)))
                .filter(|(_, p)| p.col >= 0 && p.row >= 0 && p.col < self.cols && p.row < self.rows)
                .collect()
        }

        fn cost(&self, _state: &Position) -> Cost {
            1
        }
    }

    #[test]
    fn test_corridor_single_step() {
        init_tracing();
        let graph = Graph::default().edge("a", "R", "b");
        let found = AStar::new(ZeroHeuristic)
            .search(&graph, "a", &TargetSet::single("b"))
            .unwrap();
        assert_eq!(found.actions(), vec!["R"]);
        assert_eq!(found.cost(), 1);
        assert_eq!(*found.state(), "b");
    }

    #[test]
    fn test_start_is_target() {
        let graph = Graph::default().edge("a", "R", "b");
        let found = AStar::new(ZeroHeuristic)
            .search(&graph, "a", &TargetSet::new(["a", "b"]))
            .unwrap();
        assert!(found.actions().is_empty());
        assert_eq!(found.cost(), 0);
        assert_eq!(found.stats().expanded, 0);
        assert!(found.terminal().is_root());
    }

    #[test]
    fn test_dead_start_is_no_path() {
        let graph = Graph::default();
        let err = AStar::new(ZeroHeuristic)
            .search(&graph, "a", &TargetSet::single("b"))
            .unwrap_err();
        assert_eq!(err, SearchError::NoPath { phase: 0 });
    }

    #[test]
    fn test_empty_target_set_refused() {
        let graph = Graph::default().edge("a", "R", "b");
        let err = AStar::new(ZeroHeuristic)
            .search(&graph, "a", &TargetSet::new(Vec::new()))
            .unwrap_err();
        assert_eq!(err, SearchError::EmptyTargetSet { phase: 0 });
    }

    #[test]
    fn test_weighted_detour_beats_expensive_edge() {
        // Entering "d" costs 1, but entering "s" (shortcut) costs 10.
        let graph = Graph::default()
            .edge("a", "short", "s")
            .edge("s", "on", "d")
            .edge("a", "x", "b")
            .edge("b", "y", "c")
            .edge("c", "z", "d")
            .entry_cost("s", 10);

        let found = AStar::new(ZeroHeuristic)
            .search(&graph, "a", &TargetSet::single("d"))
            .unwrap();
        assert_eq!(found.actions(), vec!["x", "y", "z"]);
        assert_eq!(found.cost(), 3);
    }

    #[test]
    fn test_stale_entries_are_discarded() {
        // "c" is queued directly (g=5) and again through "b" (g=6).
        let graph = Graph::default()
            .edge("a", "to_b", "b")
            .edge("a", "to_c", "c")
            .edge("b", "b_to_c", "c")
            .edge("c", "to_t", "t")
            .entry_cost("c", 5)
            .entry_cost("b", 1);
        let found = AStar::new(ZeroHeuristic)
            .search(&graph, "a", &TargetSet::single("t"))
            .unwrap();
        assert_eq!(found.actions(), vec!["to_c", "to_t"]);
        assert_eq!(found.cost(), 6);
        assert_eq!(found.stats().stale_discarded, 1);
    }

    /// Counts how often each state is expanded.
    struct Counting {
        inner: Open,
        expansions: RefCell<HashMap<Position, usize>>,
    }

    impl Problem for Counting {
        type State = Position;
        type Action = Direction;

        fn transitions(&self, state: &Position) -> Vec<(Direction, Position)> {
            *self.expansions.borrow_mut().entry(*state).or_default() += 1;
            self.inner.transitions(state)
        }

        fn cost(&self, state: &Position) -> Cost {
            self.inner.cost(state)
        }
    }

    #[test]
    fn test_each_state_expanded_once() {
        let grid = Counting {
            inner: Open { cols: 5, rows: 5 },
            expansions: RefCell::new(HashMap::new()),
        };
        let found = AStar::new(ZeroHeuristic)
            .search(&grid, Position::new(0, 0), &TargetSet::single(Position::new(4, 4)))
            .unwrap();

        let expansions = grid.expansions.borrow();
        assert!(expansions.values().all(|&n| n == 1));
        assert_eq!(expansions.len(), found.stats().expanded);
        assert_eq!(found.cost(), 8);
    }

    #[test]
    fn test_node_costs_accumulate_entry_costs() {
        let graph = Graph::default()
            .edge("a", "1", "b")
            .edge("b", "2", "c")
            .entry_cost("b", 4)
            .entry_cost("c", 7);
        let found = AStar::new(ZeroHeuristic)
            .search(&graph, "a", &TargetSet::single("c"))
            .unwrap();
        let arena = found.arena();
        for node in arena.iter() {
            if let Some(parent) = node.parent {
                assert_eq!(node.cost, arena.get(parent).cost + graph.cost(&node.state));
            }
        }
        assert_eq!(found.cost(), 11);
    }

    #[test]
    fn test_manhattan_expands_fewer_than_uniform_cost() {
        let grid = Open { cols: 12, rows: 12 };
        let start = Position::new(0, 0);
        let targets = TargetSet::single(Position::new(11, 0));

        let informed = AStar::new(ManhattanDistance).search(&grid, start, &targets).unwrap();
        let blind = AStar::new(ZeroHeuristic).search(&grid, start, &targets).unwrap();

        assert_eq!(informed.cost(), 11);
        assert_eq!(blind.cost(), 11);
        assert!(informed.stats().expanded < blind.stats().expanded);
    }

    #[test]
    fn test_deterministic_tie_break() {
        let grid = Open { cols: 4, rows: 4 };
        let engine = AStar::new(ManhattanDistance);
        let targets = TargetSet::single(Position::new(3, 3));

        let first = engine.search(&grid, Position::new(0, 0), &targets).unwrap().actions();
        for _ in 0..10 {
            let again = engine.search(&grid, Position::new(0, 0), &targets).unwrap().actions();
            assert_eq!(again, first);
        }
        assert_eq!(first.len(), 6);
    }

    #[test]
    fn test_expansion_budget() {
        let grid = Open { cols: 30, rows: 30 };
        let engine = AStar::with_config(
            ZeroHeuristic,
            SearchConfig::default().with_max_expansions(5),
        );
        let err = engine
            .search(&grid, Position::new(0, 0), &TargetSet::single(Position::new(29, 29)))
            .unwrap_err();
        assert!(matches!(
            err,
            SearchError::BudgetExhausted { phase: 0, expanded: 5, .. }
        ));
        assert!(err.is_no_path());
    }

    /// Sleeps on every expansion.
    struct Slow {
        inner: Open,
        delay: Duration,
    }

    impl Problem for Slow {
        type State = Position;
        type Action = Direction;

        fn transitions(&self, state: &Position) -> Vec<(Direction, Position)> {
            thread::sleep(self.delay);
            self.inner.transitions(state)
        }

        fn cost(&self, state: &Position) -> Cost {
            self.inner.cost(state)
        }
    }

    #[test]
    fn test_search_time_budget() {
        init_tracing();
        let grid = Slow {
            inner: Open { cols: 30, rows: 30 },
            delay: Duration::from_millis(3),
        };
        let engine = AStar::with_config(
            ZeroHeuristic,
            SearchConfig::default().with_max_search_time_ms(5),
        );
        let err = engine
            .search(&grid, Position::new(0, 0), &TargetSet::single(Position::new(29, 29)))
            .unwrap_err();

        match &err {
            SearchError::BudgetExhausted {
                phase,
                expanded,
                elapsed_ms,
            } => {
                assert_eq!(*phase, 0);
                assert!(*expanded >= 1);
                assert!(*elapsed_ms > 5);
            }
            other => panic!("expected an exhausted budget, got {other:?}"),
        }
        assert!(err.is_no_path());
    }

    #[test]
    fn test_set_config_replaces_budgets() {
        let grid = Open { cols: 30, rows: 30 };
        let start = Position::new(0, 0);
        let targets = TargetSet::single(Position::new(29, 29));

        let mut engine = AStar::new(ManhattanDistance);
        assert_eq!(engine.config(), &SearchConfig::default());
        assert!(engine.search(&grid, start, &targets).is_ok());

        engine.set_config(SearchConfig::default().with_max_expansions(2));
        assert_eq!(engine.config().max_expansions, Some(2));
        let err = engine.search(&grid, start, &targets).unwrap_err();
        assert!(matches!(err, SearchError::BudgetExhausted { expanded: 2, .. }));
    }

    #[test]
    fn test_engine_exposes_its_heuristic() {
        let engine = AStar::new(ManhattanDistance);
        let targets = TargetSet::single(Position::new(3, 4));
        assert_eq!(engine.heuristic().estimate(&Position::new(0, 0), &targets), 7);
    }

    #[test]
    fn test_budget_does_not_block_trivial_success() {
        let grid = Open { cols: 3, rows: 3 };
        let engine = AStar::with_config(
            ZeroHeuristic,
            SearchConfig::default().with_max_expansions(0),
        );
        let found = engine
            .search(&grid, Position::new(1, 1), &TargetSet::single(Position::new(1, 1)))
            .unwrap();
        assert!(found.actions().is_empty());
    }

    #[test]
    fn test_f_cost_helper() {
        let mut arena: NodeArena<Position, Direction> = NodeArena::new();
        let root = arena.root(Position::new(0, 0));
        let child = arena.child(root, Direction::Right, Position::new(1, 0), 2);
        let targets = TargetSet::single(Position::new(4, 0));
        assert_eq!(f_cost(arena.get(child), &ManhattanDistance, &targets), 5);
    }
}
