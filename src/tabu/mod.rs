//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that uses memory structures
//! (the tabu list) to forbid recently made moves, preventing cycling and
//! letting the search walk through non-improving regions. An optional
//! long-term frequency memory drives diversification.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search, Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;

pub use config::{DiversificationConfig, TabuConfig};
pub use memory::{FrequencyMemory, TabuList};
pub use runner::TabuSearch;
