//! Core traits and result type shared by the local-search strategies.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use rand::Rng;

use crate::tabu::TabuList;

/// Defines a combinatorial optimization problem for local search.
///
/// Users implement this trait to provide:
/// - The starting state and how to draw a random one
/// - How to evaluate a state's objective value
/// - How to pick the best move out of a state's neighbourhood
/// - How to apply a move
///
/// # Maximization
///
/// All strategies maximize `obj_val`. For minimization, negate the cost.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_explore::local::OptProblem;
/// use u_explore::tabu::TabuList;
///
/// /// Maximize -(x - 7)^2 over the integers with +1/-1 steps.
/// struct Parabola;
///
/// impl OptProblem for Parabola {
///     type State = i64;
///     type Action = i64;
///
///     fn init(&self) -> i64 { 0 }
///
///     fn obj_val(&self, &x: &i64) -> f64 {
///         -((x - 7) as f64).powi(2)
///     }
///
///     fn max_action(&self, &x: &i64, tabu: Option<&TabuList<i64>>) -> Option<(i64, f64)> {
///         [-1, 1]
///             .into_iter()
///             .map(|step| (step, self.obj_val(&(x + step))))
///             .filter(|(step, value)| tabu.is_none_or(|t| t.admits(step, *value)))
///             .max_by(|a, b| a.1.total_cmp(&b.1))
///     }
///
///     fn result(&self, &x: &i64, &step: &i64) -> i64 { x + step }
///
///     fn random_reset<R: Rng>(&self, rng: &mut R) -> i64 {
///         rng.random_range(-100..100)
///     }
/// }
/// ```
pub trait OptProblem {
    /// A candidate solution. Compared by value and used as a map key.
    type State: Clone + Eq + Hash + Debug;

    /// A move turning one state into a neighbour.
    type Action: Clone + Eq + Debug;

    /// The state the first run starts from.
    fn init(&self) -> Self::State;

    /// Objective value of `state`. Higher is better.
    fn obj_val(&self, state: &Self::State) -> f64;

    /// Returns the best admissible move out of `state` and the objective
    /// value of the state it leads to.
    ///
    /// When `tabu` is given, moves it does not [admit](TabuList::admits)
    /// must be skipped. Returns `None` if the neighbourhood is empty or
    /// every move is forbidden.
    fn max_action(
        &self,
        state: &Self::State,
        tabu: Option<&TabuList<Self::Action>>,
    ) -> Option<(Self::Action, f64)>;

    /// Applies `action` to `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Draws a fresh starting state for a restart.
    fn random_reset<R: Rng>(&self, rng: &mut R) -> Self::State;
}

/// Why a local-search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// No neighbour improves on the final state.
    LocalOptimum,
    /// The stagnation limit was reached.
    Stagnation,
    /// The iteration cap was hit before the run converged.
    IterationLimit,
}

/// Result of a local-search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocalSearchResult<S: Clone> {
    /// Best state found.
    pub best: S,
    /// Objective value of the best state.
    pub best_value: f64,
    /// Total moves made (across all trials for restart strategies).
    pub iterations: usize,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
    /// Why the run stopped.
    pub stop_reason: StopReason,
    /// Best value after each iteration (per trial for restarts).
    pub value_history: Vec<f64>,
}

impl<S: Clone> LocalSearchResult<S> {
    /// Returns `false` if the run was cut short by its iteration cap.
    pub fn converged(&self) -> bool {
        self.stop_reason != StopReason::IterationLimit
    }
}

/// A local-search strategy.
///
/// Every call owns its counters and timer; nothing is carried over between
/// runs, so one strategy value can solve many problems.
pub trait LocalSearch {
    /// Short strategy name used in logs.
    fn name(&self) -> &'static str;

    /// Runs the strategy on `problem` until its stopping criterion fires.
    fn solve<P: OptProblem>(&self, problem: &P) -> LocalSearchResult<P::State>;
}
