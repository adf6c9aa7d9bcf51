//! Uniform-Cost Search (UCS).
//!
//! Best-first search over a weighted grid, expanding pending nodes in
//! order of accumulated cost. Finding no path is reported as
//! [`SearchOutcome::NoSolution`], not as an error.
//!
//! # References
//!
//! - Dijkstra, E. W. (1959). "A note on two problems in connexion with graphs",
//!   *Numerische Mathematik* 1, 269-271.
//! - Russell, S. & Norvig, P. (2020). *Artificial Intelligence: A Modern
//!   Approach*, 4th ed., §3.4.2.

mod frontier;
mod maze;
mod node;
mod runner;
mod types;

pub use frontier::{ExploredSet, Frontier};
pub use maze::{Maze, MazeAction, MazeParseError, MazeState};
pub use node::{Node, NodeId, SearchTree};
pub use runner::{NoSolution, SearchOutcome, Solution, UniformCostSearch};
pub use types::Grid;
