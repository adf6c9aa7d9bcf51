//! Strategy selection as a tagged union.

use super::types::{LocalSearch, LocalSearchResult, OptProblem};
use crate::hill::{HillClimbing, HillClimbingReset};
use crate::tabu::TabuSearch;

/// One of the provided local-search strategies.
///
/// Lets a driver pick the strategy at runtime while keeping the single
/// [`LocalSearch::solve`] contract.
///
/// # Examples
///
/// ```
/// use u_explore::hill::{HillClimbingReset, RestartConfig};
/// use u_explore::local::{LocalSearch, Strategy};
/// use u_explore::tsp::Tsp;
///
/// let tsp = Tsp::from_points(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0), (0.0, 4.0)]).unwrap();
/// let strategy: Strategy = HillClimbingReset::new(RestartConfig::default().with_seed(3))
///     .unwrap()
///     .into();
/// let result = strategy.solve(&tsp);
/// assert!((result.best_value + 14.0).abs() < 1e-9);
/// assert_eq!(strategy.name(), "HillClimbingReset");
/// ```
#[derive(Debug, Clone)]
pub enum Strategy {
    HillClimbing(HillClimbing),
    HillClimbingReset(HillClimbingReset),
    TabuSearch(TabuSearch),
}

impl LocalSearch for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::HillClimbing(s) => s.name(),
            Strategy::HillClimbingReset(s) => s.name(),
            Strategy::TabuSearch(s) => s.name(),
        }
    }

    fn solve<P: OptProblem>(&self, problem: &P) -> LocalSearchResult<P::State> {
        match self {
            Strategy::HillClimbing(s) => s.solve(problem),
            Strategy::HillClimbingReset(s) => s.solve(problem),
            Strategy::TabuSearch(s) => s.solve(problem),
        }
    }
}

impl From<HillClimbing> for Strategy {
    fn from(s: HillClimbing) -> Self {
        Strategy::HillClimbing(s)
    }
}

impl From<HillClimbingReset> for Strategy {
    fn from(s: HillClimbingReset) -> Self {
        Strategy::HillClimbingReset(s)
    }
}

impl From<TabuSearch> for Strategy {
    fn from(s: TabuSearch) -> Self {
        Strategy::TabuSearch(s)
    }
}
