//! Local search over combinatorial optimization problems.
//!
//! Users define their problem by implementing [`OptProblem`]. Every
//! strategy implements [`LocalSearch`] and returns a
//! [`LocalSearchResult`] carrying the best state, its value, the
//! iteration count and the elapsed time of that run.
//!
//! # Strategies
//!
//! - [`HillClimbing`](crate::hill::HillClimbing): steepest ascent to a local optimum
//! - [`HillClimbingReset`](crate::hill::HillClimbingReset): best of several climbs
//!   from random restarts
//! - [`TabuSearch`](crate::tabu::TabuSearch): memory-guided walk through
//!   non-improving moves
//!
//! [`Strategy`] wraps all three for runtime selection.

mod strategy;
mod types;

pub use strategy::Strategy;
pub use types::{LocalSearch, LocalSearchResult, OptProblem, StopReason};
