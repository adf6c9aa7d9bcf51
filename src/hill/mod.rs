//! Hill Climbing (HC).
//!
//! Steepest-ascent hill climbing moves to the best neighbour until no
//! neighbour improves. The random-restart variant repeats the climb from
//! random states and keeps the best local optimum found.
//!
//! # References
//!
//! - Russell, S. & Norvig, P. (2020). *Artificial Intelligence: A Modern
//!   Approach*, 4th ed., §4.1.1.

mod config;
mod runner;

pub use config::{HillClimbingConfig, RestartConfig};
pub use runner::{HillClimbing, HillClimbingReset};
