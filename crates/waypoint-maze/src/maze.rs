//! Grid maze with walls, weighted cells, a key and one or more goals.

use std::collections::{HashMap, HashSet};

use waypoint_core::{Cost, Direction, Position, Problem, Result, SearchError, TargetSet};

/// Entry cost of a cell with no explicit cost.
pub const DEFAULT_CELL_COST: Cost = 1;

/// A rectangular maze.
///
/// Column 0, row 0 is the top-left corner. Moving `U` decreases the row.
#[derive(Debug, Clone)]
pub struct Maze {
    cols: i64,
    rows: i64,
    walls: HashSet<Position>,
    costs: HashMap<Position, Cost>,
    initial: Position,
    key: Position,
    goals: Vec<Position>,
}

impl Maze {
    /// Create a new MazeBuilder for a `cols` x `rows` grid.
    pub fn builder(cols: i64, rows: i64) -> MazeBuilder {
        MazeBuilder::new(cols, rows)
    }

    /// Number of columns.
    pub fn cols(&self) -> i64 {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> i64 {
        self.rows
    }

    /// Where the agent starts.
    pub fn initial(&self) -> Position {
        self.initial
    }

    /// The cell that must be visited before any goal.
    pub fn key(&self) -> Position {
        self.key
    }

    /// Goal cells, in the order they were added.
    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    /// Target set of the key phase.
    pub fn key_set(&self) -> TargetSet<Position> {
        TargetSet::single(self.key)
    }

    /// Target set of the goal phase.
    pub fn goal_set(&self) -> TargetSet<Position> {
        self.goals.iter().copied().collect()
    }

    /// Returns true if `pos` lies inside the grid.
    pub fn contains(&self, pos: &Position) -> bool {
        pos.col >= 0 && pos.row >= 0 && pos.col < self.cols && pos.row < self.rows
    }

    /// Returns true if `pos` lies inside the grid and is not a wall.
    pub fn is_open(&self, pos: &Position) -> bool {
        self.contains(pos) && !self.walls.contains(pos)
    }

    /// All open cells, row by row.
    pub fn open_cells(&self) -> Vec<Position> {
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| Position::new(col, row)))
            .filter(|pos| !self.walls.contains(pos))
            .collect()
    }
}

impl Problem for Maze {
    type State = Position;
    type Action = Direction;

    fn transitions(&self, state: &Position) -> Vec<(Direction, Position)> {
        Direction::ALL
            .iter()
            .map(|direction| (*direction, state.step(*direction)))
            .filter(|(_, next)| self.is_open(next))
            .collect()
    }

    fn cost(&self, state: &Position) -> Cost {
        self.costs.get(state).copied().unwrap_or(DEFAULT_CELL_COST)
    }
}

/// Builder for creating mazes.
#[derive(Debug, Clone, Default)]
pub struct MazeBuilder {
    cols: i64,
    rows: i64,
    walls: HashSet<Position>,
    costs: HashMap<Position, Cost>,
    initial: Option<Position>,
    key: Option<Position>,
    goals: Vec<Position>,
}

impl MazeBuilder {
    /// Create a new MazeBuilder for a `cols` x `rows` grid.
    pub fn new(cols: i64, rows: i64) -> Self {
        Self {
            cols,
            rows,
            ..Self::default()
        }
    }

    /// Add a wall.
    pub fn wall(mut self, pos: impl Into<Position>) -> Self {
        self.walls.insert(pos.into());
        self
    }

    /// Add several walls.
    pub fn walls<P: Into<Position>>(mut self, walls: impl IntoIterator<Item = P>) -> Self {
        self.walls.extend(walls.into_iter().map(Into::into));
        self
    }

    /// Set the cost of entering a cell (mud, rough terrain).
    pub fn cell_cost(mut self, pos: impl Into<Position>, cost: Cost) -> Self {
        self.costs.insert(pos.into(), cost);
        self
    }

    /// Set the starting cell.
    pub fn initial(mut self, pos: impl Into<Position>) -> Self {
        self.initial = Some(pos.into());
        self
    }

    /// Set the key cell.
    pub fn key(mut self, pos: impl Into<Position>) -> Self {
        self.key = Some(pos.into());
        self
    }

    /// Add a goal cell.
    pub fn goal(mut self, pos: impl Into<Position>) -> Self {
        let pos = pos.into();
        if !self.goals.contains(&pos) {
            self.goals.push(pos);
        }
        self
    }

    /// Build the Maze.
    pub fn build(self) -> Result<Maze> {
        if self.cols <= 0 || self.rows <= 0 {
            return Err(invalid(format!(
                "maze dimensions must be positive, got {}x{}",
                self.cols, self.rows
            )));
        }

        let initial = self
            .initial
            .ok_or_else(|| invalid("maze initial cell is required".to_string()))?;
        let key = self
            .key
            .ok_or_else(|| invalid("maze key cell is required".to_string()))?;
        if self.goals.is_empty() {
            return Err(invalid("maze needs at least one goal cell".to_string()));
        }

        let maze = Maze {
            cols: self.cols,
            rows: self.rows,
            walls: self.walls,
            costs: self.costs,
            initial,
            key,
            goals: self.goals,
        };

        let designated = [("initial", &maze.initial), ("key", &maze.key)]
            .into_iter()
            .chain(maze.goals.iter().map(|goal| ("goal", goal)));
        for (role, pos) in designated {
            if !maze.is_open(pos) {
                return Err(invalid(format!("{role} cell {pos} is outside the maze or a wall")));
            }
        }

        for (pos, cost) in &maze.costs {
            if !maze.contains(pos) {
                return Err(invalid(format!("cost set on {pos}, outside the maze")));
            }
            if *cost < DEFAULT_CELL_COST {
                return Err(invalid(format!("cell {pos} has cost {cost}, below the minimum of 1")));
            }
        }

        Ok(maze)
    }
}

fn invalid(message: String) -> SearchError {
    SearchError::InvalidProblem(message)
}
