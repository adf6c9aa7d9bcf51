//! Domain-agnostic exploratory search.
//!
//! Provides generic implementations of two families of search:
//!
//! - **Uniform-Cost Search (UCS)**: best-first shortest-path search over a
//!   weighted grid, with an index-addressed search tree for path
//!   reconstruction.
//! - **Hill Climbing (HC)**: steepest ascent to a local optimum, plus a
//!   random-restart variant.
//! - **Tabu Search (TS)**: FIFO tabu list with aspiration and optional
//!   frequency-based diversification.
//!
//! The engines consume abstract capabilities, [`ucs::Grid`] and
//! [`local::OptProblem`], and nothing more. [`ucs::Maze`] and [`tsp::Tsp`]
//! are small reference implementations of each.
//!
//! # Architecture
//!
//! Every run is single-threaded and owns its frontier, tabu list and
//! counters. Iteration counts and elapsed time come back in the run's
//! result; no state is shared between runs.

pub mod error;
pub mod hill;
pub mod local;
pub mod tabu;
pub mod tsp;
pub mod ucs;

pub use error::SearchError;
