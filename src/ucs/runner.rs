//! Uniform-cost search execution engine.
//!
//! # Algorithm
//!
//! 1. Create the root node at the grid's start with cost 0
//! 2. If the start is the goal, return immediately
//! 3. Mark the start explored and push the root
//! 4. While the frontier is not empty:
//!    a. Pop the cheapest node
//!    b. For each unexplored neighbour, build the successor node and mark
//!    it explored
//!    c. If the successor is the goal, return it
//!    d. Otherwise push it with its accumulated cost as priority
//! 5. Frontier exhausted: no path exists
//!
//! # Goal test
//!
//! The goal test runs when a node is *generated*, not when it is popped.
//! Textbook UCS tests on extraction. Both return a cheapest path here
//! because a step costs whatever the entered state costs, so the first
//! predecessor to reach a state is a cheapest one. A grid whose step costs
//! depended on the move taken would break that and could get a more
//! expensive path back from this engine.

use rustc_hash::FxHashSet;

use super::frontier::{ExploredSet, Frontier};
use super::node::{Node, SearchTree};
use super::types::Grid;

/// A path from the start to the goal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution<S, A> {
    /// Nodes from the root to the goal, inclusive.
    pub path: Vec<Node<S, A>>,
    /// Every state generated during the run.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub explored: FxHashSet<S>,
    /// Number of search nodes created.
    pub generated: usize,
}

impl<S, A> Solution<S, A> {
    /// The goal node.
    pub fn terminal(&self) -> &Node<S, A> {
        // The path always holds at least the root.
        &self.path[self.path.len() - 1]
    }

    /// Total cost of the path.
    pub fn cost(&self) -> f64 {
        self.terminal().cost
    }

    /// States along the path, root first.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.path.iter().map(|n| &n.state)
    }

    /// Actions along the path. Empty when start == goal.
    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.path.iter().filter_map(|n| n.action.as_ref())
    }
}

/// The frontier drained before reaching the goal.
#[derive(Debug, Clone)]
pub struct NoSolution<S> {
    /// Every state generated during the run.
    pub explored: FxHashSet<S>,
    /// Number of search nodes created.
    pub generated: usize,
}

/// Result of a uniform-cost search run.
#[derive(Debug, Clone)]
pub enum SearchOutcome<S, A> {
    Solution(Solution<S, A>),
    NoSolution(NoSolution<S>),
}

impl<S, A> SearchOutcome<S, A> {
    /// Returns `true` if a path was found.
    pub fn is_solution(&self) -> bool {
        matches!(self, SearchOutcome::Solution(_))
    }

    /// Returns the solution, if any.
    pub fn solution(&self) -> Option<&Solution<S, A>> {
        match self {
            SearchOutcome::Solution(s) => Some(s),
            SearchOutcome::NoSolution(_) => None,
        }
    }

    /// Consumes the outcome, returning the solution if any.
    pub fn into_solution(self) -> Option<Solution<S, A>> {
        match self {
            SearchOutcome::Solution(s) => Some(s),
            SearchOutcome::NoSolution(_) => None,
        }
    }

    /// States generated during the run.
    pub fn explored(&self) -> &FxHashSet<S> {
        match self {
            SearchOutcome::Solution(s) => &s.explored,
            SearchOutcome::NoSolution(n) => &n.explored,
        }
    }

    /// Number of search nodes created during the run.
    pub fn generated(&self) -> usize {
        match self {
            SearchOutcome::Solution(s) => s.generated,
            SearchOutcome::NoSolution(n) => n.generated,
        }
    }
}

/// Uniform-cost search runner.
pub struct UniformCostSearch;

impl UniformCostSearch {
    /// Searches `grid` for a path from its start to its end.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_explore::ucs::{Maze, UniformCostSearch};
    ///
    /// let maze: Maze = "S..\n.#.\n..G".parse().unwrap();
    /// let outcome = UniformCostSearch::search(&maze);
    /// assert_eq!(outcome.solution().map(|s| s.cost()), Some(4.0));
    /// ```
    pub fn search<G: Grid>(grid: &G) -> SearchOutcome<G::State, G::Action> {
        let goal = grid.end();
        let mut tree = SearchTree::new();
        let mut explored = ExploredSet::new();

        let start = grid.start();
        let root = tree.push(Node::root(start.clone()));
        explored.insert(start.clone());

        if start == goal {
            log::debug!("ucs: start is the goal");
            return SearchOutcome::Solution(Solution {
                path: tree.path_to(root),
                explored: explored.into_inner(),
                generated: tree.len(),
            });
        }

        let mut frontier = Frontier::new();
        frontier.add(root, 0.0);

        while !frontier.is_empty() {
            let Ok(current) = frontier.pop() else {
                break;
            };
            let (state, cost) = {
                let node = tree.get(current);
                (node.state.clone(), node.cost)
            };

            for (action, next) in grid.neighbours(&state) {
                if explored.contains(&next) {
                    continue;
                }

                let successor = Node {
                    cost: cost + grid.cost(&next),
                    state: next.clone(),
                    action: Some(action),
                    parent: Some(current),
                };
                let successor_cost = successor.cost;
                let id = tree.push(successor);

                // Marked before the goal test so a later sibling cannot
                // enqueue the same state again.
                explored.insert(next.clone());

                if next == goal {
                    log::debug!(
                        "ucs: goal reached with cost {successor_cost} ({} explored, {} pending)",
                        explored.len(),
                        frontier.len()
                    );
                    return SearchOutcome::Solution(Solution {
                        path: tree.path_to(id),
                        explored: explored.into_inner(),
                        generated: tree.len(),
                    });
                }

                frontier.add(id, successor_cost);
            }
        }

        log::debug!("ucs: frontier exhausted after {} states", explored.len());
        SearchOutcome::NoSolution(NoSolution {
            generated: tree.len(),
            explored: explored.into_inner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ucs::{Maze, MazeAction, MazeState};

    fn maze(text: &str) -> Maze {
        text.parse().expect("valid maze")
    }

    #[test]
    fn test_ucs_open_3x3_manhattan_cost() {
        let grid = maze("S..\n...\n..G");
        let outcome = UniformCostSearch::search(&grid);
        let solution = outcome.solution().expect("path should exist");

        assert!((solution.cost() - 4.0).abs() < 1e-12);
        assert_eq!(solution.path.len(), 5);
        assert_eq!(solution.actions().count(), 4);
        assert_eq!(solution.path[0].state, MazeState::new(0, 0));
        assert_eq!(solution.terminal().state, MazeState::new(2, 2));
    }

    #[test]
    fn test_ucs_trivial_solution() {
        struct Single;
        impl Grid for Single {
            type State = u8;
            type Action = ();
            fn start(&self) -> u8 {
                3
            }
            fn end(&self) -> u8 {
                3
            }
            fn neighbours(&self, _state: &u8) -> Vec<((), u8)> {
                panic!("neighbours must not be queried when start == end");
            }
            fn cost(&self, _state: &u8) -> f64 {
                1.0
            }
        }

        let outcome = UniformCostSearch::search(&Single);
        let solution = outcome.solution().expect("trivial path");
        assert_eq!(solution.cost(), 0.0);
        assert_eq!(solution.path.len(), 1);
        assert_eq!(solution.explored.len(), 1);
        assert!(solution.explored.contains(&3));
    }

    #[test]
    fn test_ucs_disconnected_grid_has_no_solution() {
        let grid = maze("S.#..\n..#..\n..#.G");
        let outcome = UniformCostSearch::search(&grid);

        assert!(!outcome.is_solution());
        // Only the left side of the wall is reachable.
        assert_eq!(outcome.explored().len(), 6);
        assert!(!outcome.explored().contains(&MazeState::new(2, 4)));
    }

    #[test]
    fn test_ucs_explored_equals_generated() {
        let grid = maze("S....\n.###.\n.....\n.#.#.\n....G");
        let outcome = UniformCostSearch::search(&grid);

        assert!(outcome.is_solution());
        assert_eq!(outcome.explored().len(), outcome.generated());
    }

    #[test]
    fn test_ucs_avoids_expensive_cells_when_detour_is_cheaper() {
        // Straight line through the 9s costs 18 before the goal; the
        // detour along the bottom row costs 1 per step.
        let grid = maze("S99G\n....");
        let solution = UniformCostSearch::search(&grid)
            .into_solution()
            .expect("path should exist");

        assert!((solution.cost() - 5.0).abs() < 1e-12);
        let actions: Vec<MazeAction> = solution.actions().copied().collect();
        assert_eq!(actions.first(), Some(&MazeAction::Down));
        assert_eq!(actions.last(), Some(&MazeAction::Up));
    }

    #[test]
    fn test_ucs_goal_test_runs_at_generation() {
        // Expanding the start generates (1,0) then the goal at (0,1).
        // (1,1) is never generated.
        let grid = maze("SG\n..");
        let outcome = UniformCostSearch::search(&grid);

        assert!(outcome.is_solution());
        assert_eq!(outcome.explored().len(), 3);
        assert!(!outcome.explored().contains(&MazeState::new(1, 1)));
    }
}
