//! Core trait for grids searched by uniform-cost search.

use std::fmt::Debug;
use std::hash::Hash;

/// A weighted grid with a single start and a single goal.
///
/// The grid is the only thing [`UniformCostSearch`](super::UniformCostSearch)
/// knows about the world. Building it from input data is up to the caller.
///
/// # Costs
///
/// Costs are attached to *entering* a state, so moving from `a` to `b`
/// costs `cost(&b)`. Costs are expected to be non-negative.
pub trait Grid {
    /// A grid location. Compared by value and used as a set key.
    type State: Clone + Eq + Hash + Debug;

    /// Label of the move that leads to a neighbouring state.
    type Action: Clone + Debug;

    /// The state the search starts from.
    fn start(&self) -> Self::State;

    /// The goal state.
    fn end(&self) -> Self::State;

    /// Lists the states reachable in one move, labelled by their action.
    fn neighbours(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    /// Cost of entering `state`.
    fn cost(&self, state: &Self::State) -> f64;
}
