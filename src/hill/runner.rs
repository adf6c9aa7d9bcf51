//! Hill climbing execution loops.
//!
//! # Algorithm (steepest ascent)
//!
//! 1. Start from a state and its objective value
//! 2. Ask the problem for its best neighbouring move
//! 3. If that move does not strictly improve the value, stop: the state is
//!    a local optimum
//! 4. Otherwise apply the move and repeat from 2
//!
//! Random-restart hill climbing runs this climb `max_restarts` times, the
//! first from the problem's initial state and the rest from random states,
//! and keeps the best local optimum.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::{HillClimbingConfig, RestartConfig};
use crate::error::SearchError;
use crate::local::{LocalSearch, LocalSearchResult, OptProblem, StopReason};

/// Outcome of a single climb.
struct Climb<S> {
    state: S,
    value: f64,
    iterations: usize,
    stop_reason: StopReason,
}

/// Climbs from `state` until a local optimum or the iteration cap.
fn climb<P: OptProblem>(
    problem: &P,
    mut state: P::State,
    config: &HillClimbingConfig,
    history: &mut Vec<f64>,
) -> Climb<P::State> {
    let mut value = problem.obj_val(&state);
    let mut iterations = 0usize;

    let stop_reason = loop {
        if config.max_iterations > 0 && iterations >= config.max_iterations {
            log::warn!(
                "hill climbing: no local optimum within {} iterations",
                config.max_iterations
            );
            break StopReason::IterationLimit;
        }

        let Some((action, succ_value)) = problem.max_action(&state, None) else {
            break StopReason::LocalOptimum;
        };
        if succ_value <= value {
            break StopReason::LocalOptimum;
        }

        state = problem.result(&state, &action);
        value = succ_value;
        iterations += 1;
        history.push(value);
    };

    Climb {
        state,
        value,
        iterations,
        stop_reason,
    }
}

/// Steepest-ascent hill climbing.
///
/// # Examples
///
/// ```
/// use u_explore::hill::HillClimbing;
/// use u_explore::local::LocalSearch;
/// use u_explore::tsp::Tsp;
///
/// let tsp = Tsp::from_points(&[(0.0, 0.0), (2.0, 2.0), (0.0, 2.0), (2.0, 0.0)]).unwrap();
/// let result = HillClimbing::default().solve(&tsp);
/// assert!((result.best_value + 8.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HillClimbing {
    config: HillClimbingConfig,
}

impl HillClimbing {
    pub fn new(config: HillClimbingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HillClimbingConfig {
        &self.config
    }
}

impl LocalSearch for HillClimbing {
    fn name(&self) -> &'static str {
        "HillClimbing"
    }

    fn solve<P: OptProblem>(&self, problem: &P) -> LocalSearchResult<P::State> {
        let start = Instant::now();
        let mut value_history = Vec::new();

        let outcome = climb(problem, problem.init(), &self.config, &mut value_history);

        let elapsed = start.elapsed();
        log::debug!(
            "hill climbing: {} iterations, value {}, {:?} in {elapsed:?}",
            outcome.iterations,
            outcome.value,
            outcome.stop_reason
        );

        LocalSearchResult {
            best: outcome.state,
            best_value: outcome.value,
            iterations: outcome.iterations,
            elapsed,
            stop_reason: outcome.stop_reason,
            value_history,
        }
    }
}

/// Random-restart hill climbing.
#[derive(Debug, Clone)]
pub struct HillClimbingReset {
    config: RestartConfig,
}

impl HillClimbingReset {
    /// Creates a restart strategy with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] if `max_restarts` is 0.
    pub fn new(config: RestartConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RestartConfig {
        &self.config
    }
}

impl LocalSearch for HillClimbingReset {
    fn name(&self) -> &'static str {
        "HillClimbingReset"
    }

    fn solve<P: OptProblem>(&self, problem: &P) -> LocalSearchResult<P::State> {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(self.config.seed.unwrap_or_else(rand::random));

        let mut best = climb(problem, problem.init(), &self.config.climb, &mut Vec::new());
        log::trace!(
            "hill climbing reset: trial 0 reached {} after {} moves",
            best.value,
            best.iterations
        );
        let mut iterations = best.iterations;
        let mut stop_reason = best.stop_reason;
        let mut value_history = Vec::with_capacity(self.config.max_restarts);
        value_history.push(best.value);
        // Per-climb values are not kept; only the best after each trial.
        let mut scratch = Vec::new();

        // max_restarts >= 1 is checked in `new`; trial 0 ran above.
        for trial in 1..self.config.max_restarts {
            scratch.clear();
            let initial = problem.random_reset(&mut rng);
            let outcome = climb(problem, initial, &self.config.climb, &mut scratch);
            iterations += outcome.iterations;
            if outcome.stop_reason == StopReason::IterationLimit {
                stop_reason = StopReason::IterationLimit;
            }

            log::trace!(
                "hill climbing reset: trial {trial} reached {} after {} moves",
                outcome.value,
                outcome.iterations
            );

            if outcome.value > best.value {
                best = outcome;
            }
            value_history.push(best.value);
        }

        let best_value = best.value;

        let elapsed = start.elapsed();
        log::debug!(
            "hill climbing reset: {} trials, {iterations} iterations, best {best_value} in {elapsed:?}",
            self.config.max_restarts
        );

        LocalSearchResult {
            best: best.state,
            best_value,
            iterations,
            elapsed,
            stop_reason,
            value_history,
        }
    }
}
