//! A four-connected maze parsed from text.
//!
//! # Format
//!
//! One row per line, all rows the same width:
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` or space | open cell, cost 1 |
//! | `1`..`9` | open cell with that cost |
//! | `#` | wall |
//! | `S` | start (cost 1) |
//! | `G` | goal (cost 1) |
//!
//! Empty lines are ignored. Line numbers in [`MazeParseError`] count every
//! input line from 0, empty ones included.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::types::Grid;

/// A cell position, row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeState {
    pub row: usize,
    pub col: usize,
}

impl MazeState {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(&self, other: &MazeState) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for MazeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One of the four orthogonal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeAction {
    /// row - 1
    Up,
    /// row + 1
    Down,
    /// col - 1
    Left,
    /// col + 1
    Right,
}

impl MazeAction {
    /// Expansion order used by [`Maze::neighbours`](Grid::neighbours).
    pub const ALL: [MazeAction; 4] = [
        MazeAction::Up,
        MazeAction::Down,
        MazeAction::Left,
        MazeAction::Right,
    ];
}

impl fmt::Display for MazeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self {
            MazeAction::Up => '↑',
            MazeAction::Down => '↓',
            MazeAction::Left => '←',
            MazeAction::Right => '→',
        };
        write!(f, "{arrow}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Open(f64),
    Wall,
}

/// Errors produced while parsing a [`Maze`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeParseError {
    #[error("maze has no rows")]
    Empty,
    #[error("invalid character '{ch}' at line {line}, column {col}")]
    InvalidCharacter { ch: char, line: usize, col: usize },
    #[error("line {line} has width {width}, expected {expected}")]
    RaggedRow {
        line: usize,
        width: usize,
        expected: usize,
    },
    #[error("maze has no start cell 'S'")]
    MissingStart,
    #[error("maze has no goal cell 'G'")]
    MissingGoal,
    #[error("more than one '{0}' cell")]
    Duplicate(char),
}

/// A rectangular maze with per-cell entry costs.
///
/// # Examples
///
/// ```
/// use u_explore::ucs::{Grid, Maze, MazeState};
///
/// let maze: Maze = "S.#\n..G".parse().unwrap();
/// assert_eq!(maze.dimensions(), (2, 3));
/// assert_eq!(maze.start(), MazeState::new(0, 0));
/// assert_eq!(maze.end(), MazeState::new(1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Vec<Vec<Cell>>,
    start: MazeState,
    goal: MazeState,
}

impl Maze {
    /// Builds an open `rows x cols` maze with unit costs.
    ///
    /// Returns `None` if either `start` or `goal` lies outside the maze.
    pub fn open(rows: usize, cols: usize, start: MazeState, goal: MazeState) -> Option<Self> {
        let inside = |s: &MazeState| s.row < rows && s.col < cols;
        if !inside(&start) || !inside(&goal) {
            return None;
        }
        Some(Self {
            cells: vec![vec![Cell::Open(1.0); cols]; rows],
            start,
            goal,
        })
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        let cols = self.cells.first().map_or(0, Vec::len);
        (self.cells.len(), cols)
    }

    /// Returns `true` if the cell is a wall or out of bounds.
    pub fn is_blocked(&self, state: &MazeState) -> bool {
        !matches!(self.cell(state), Some(Cell::Open(_)))
    }

    /// Turns a cell into a wall. Start and goal cells are left untouched.
    pub fn block(&mut self, state: MazeState) {
        if state == self.start || state == self.goal {
            return;
        }
        if let Some(cell) = self
            .cells
            .get_mut(state.row)
            .and_then(|row| row.get_mut(state.col))
        {
            *cell = Cell::Wall;
        }
    }

    fn cell(&self, state: &MazeState) -> Option<Cell> {
        self.cells.get(state.row)?.get(state.col).copied()
    }

    fn step(&self, state: &MazeState, action: MazeAction) -> Option<MazeState> {
        let (rows, cols) = self.dimensions();
        let next = match action {
            MazeAction::Up => MazeState::new(state.row.checked_sub(1)?, state.col),
            MazeAction::Down => MazeState::new(state.row + 1, state.col),
            MazeAction::Left => MazeState::new(state.row, state.col.checked_sub(1)?),
            MazeAction::Right => MazeState::new(state.row, state.col + 1),
        };
        (next.row < rows && next.col < cols).then_some(next)
    }
}

impl Grid for Maze {
    type State = MazeState;
    type Action = MazeAction;

    fn start(&self) -> MazeState {
        self.start
    }

    fn end(&self) -> MazeState {
        self.goal
    }

    fn neighbours(&self, state: &MazeState) -> Vec<(MazeAction, MazeState)> {
        MazeAction::ALL
            .into_iter()
            .filter_map(|action| {
                let next = self.step(state, action)?;
                (!self.is_blocked(&next)).then_some((action, next))
            })
            .collect()
    }

    fn cost(&self, state: &MazeState) -> f64 {
        match self.cell(state) {
            Some(Cell::Open(cost)) => cost,
            _ => f64::INFINITY,
        }
    }
}

impl FromStr for Maze {
    type Err = MazeParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (line, content) in text.lines().enumerate().filter(|(_, l)| !l.is_empty()) {
            let row = cells.len();
            let mut parsed = Vec::with_capacity(content.len());
            for (col, ch) in content.chars().enumerate() {
                let cell = match ch {
                    '.' | ' ' => Cell::Open(1.0),
                    '#' => Cell::Wall,
                    '1'..='9' => Cell::Open(f64::from(ch as u8 - b'0')),
                    'S' | 'G' => {
                        let slot = if ch == 'S' { &mut start } else { &mut goal };
                        if slot.replace(MazeState::new(row, col)).is_some() {
                            return Err(MazeParseError::Duplicate(ch));
                        }
                        Cell::Open(1.0)
                    }
                    ch => return Err(MazeParseError::InvalidCharacter { ch, line, col }),
                };
                parsed.push(cell);
            }

            if let Some(expected) = cells.first().map(Vec::len) {
                if parsed.len() != expected {
                    return Err(MazeParseError::RaggedRow {
                        line,
                        width: parsed.len(),
                        expected,
                    });
                }
            }
            cells.push(parsed);
        }

        if cells.is_empty() {
            return Err(MazeParseError::Empty);
        }

        Ok(Self {
            cells,
            start: start.ok_or(MazeParseError::MissingStart)?,
            goal: goal.ok_or(MazeParseError::MissingGoal)?,
        })
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let here = MazeState::new(r, c);
                let ch = if here == self.start {
                    'S'
                } else if here == self.goal {
                    'G'
                } else {
                    match cell {
                        Cell::Wall => '#',
                        Cell::Open(cost) if *cost == 1.0 => '.',
                        Cell::Open(cost) => char::from_digit(*cost as u32, 10).unwrap_or('?'),
                    }
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
