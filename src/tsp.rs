//! Travelling salesman problem over a distance matrix.
//!
//! A tour visits every city once and returns to the start. City 0 stays at
//! the first position; a move swaps two of the other positions. The
//! objective is the negated tour length, so maximizing it finds short tours.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::local::OptProblem;
use crate::tabu::TabuList;

/// Errors produced while building a [`Tsp`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    #[error("a tour needs at least 2 cities, got {0}")]
    TooFewCities(usize),
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("distance from {from} to {to} is {value}, expected a finite non-negative number")]
    InvalidDistance { from: usize, to: usize, value: f64 },
}

/// Swap the cities at two tour positions. `i < j`, both non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swap {
    pub i: usize,
    pub j: usize,
}

/// A symmetric or asymmetric TSP instance.
///
/// # Examples
///
/// ```
/// use u_explore::local::OptProblem;
/// use u_explore::tsp::Tsp;
///
/// let tsp = Tsp::new(vec![
///     vec![0.0, 1.0, 4.0],
///     vec![1.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(tsp.init(), vec![0, 1, 2]);
/// assert_eq!(tsp.tour_length(&tsp.init()), 7.0);
/// ```
#[derive(Debug, Clone)]
pub struct Tsp {
    distances: Vec<Vec<f64>>,
}

impl Tsp {
    /// Builds an instance from a square distance matrix.
    pub fn new(distances: Vec<Vec<f64>>) -> Result<Self, TspError> {
        let n = distances.len();
        if n < 2 {
            return Err(TspError::TooFewCities(n));
        }
        for (from, row) in distances.iter().enumerate() {
            if row.len() != n {
                return Err(TspError::NotSquare {
                    row: from,
                    len: row.len(),
                    expected: n,
                });
            }
            if let Some((to, &value)) = row
                .iter()
                .enumerate()
                .find(|(_, d)| !d.is_finite() || **d < 0.0)
            {
                return Err(TspError::InvalidDistance { from, to, value });
            }
        }
        Ok(Self { distances })
    }

    /// Builds a Euclidean instance from planar points.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, TspError> {
        let distances = points
            .iter()
            .map(|&(ax, ay)| {
                points
                    .iter()
                    .map(|&(bx, by)| ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt())
                    .collect()
            })
            .collect();
        Self::new(distances)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances[from][to]
    }

    /// Length of the closed tour.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        let closing = match (tour.last(), tour.first()) {
            (Some(&last), Some(&first)) => self.distance(last, first),
            _ => 0.0,
        };
        tour.windows(2)
            .map(|w| self.distance(w[0], w[1]))
            .sum::<f64>()
            + closing
    }

    /// Every swap move, in lexicographic `(i, j)` order.
    pub fn moves(&self) -> impl Iterator<Item = Swap> + '_ {
        let n = self.len();
        (1..n).flat_map(move |i| (i + 1..n).map(move |j| Swap { i, j }))
    }
}

impl OptProblem for Tsp {
    type State = Vec<usize>;
    type Action = Swap;

    fn init(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }

    fn obj_val(&self, tour: &Vec<usize>) -> f64 {
        -self.tour_length(tour)
    }

    /// Best swap by resulting value. Ties keep the first in
    /// [`moves`](Tsp::moves) order.
    fn max_action(&self, tour: &Vec<usize>, tabu: Option<&TabuList<Swap>>) -> Option<(Swap, f64)> {
        let mut best: Option<(Swap, f64)> = None;
        let mut candidate = tour.clone();
        for mv in self.moves() {
            candidate.swap(mv.i, mv.j);
            let value = self.obj_val(&candidate);
            candidate.swap(mv.i, mv.j);

            if tabu.is_some_and(|t| !t.admits(&mv, value)) {
                continue;
            }
            if best.is_none_or(|(_, v)| value > v) {
                best = Some((mv, value));
            }
        }
        best
    }

    fn result(&self, tour: &Vec<usize>, mv: &Swap) -> Vec<usize> {
        let mut next = tour.clone();
        next.swap(mv.i, mv.j);
        next
    }

    fn random_reset<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut tour = self.init();
        tour[1..].shuffle(rng);
        tour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> Tsp {
        Tsp::from_points(&[(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)]).unwrap()
    }

    #[test]
    fn test_tour_length_closes_the_loop() {
        let tsp = square();
        assert!((tsp.tour_length(&[0, 2, 1, 3]) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_max_action_finds_uncrossing_swap() {
        let tsp = square();
        let (mv, value) = tsp.max_action(&tsp.init(), None).unwrap();
        assert_eq!(mv, Swap { i: 1, j: 2 });
        assert!((value + 4.0).abs() < 1e-12);
        assert_eq!(tsp.result(&tsp.init(), &mv), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_max_action_skips_tabu_moves() {
        let tsp = square();
        let mut tabu = TabuList::new(3);
        tabu.push(Swap { i: 1, j: 2 });
        let (mv, _) = tsp.max_action(&tsp.init(), Some(&tabu)).unwrap();
        assert_ne!(mv, Swap { i: 1, j: 2 });

        // Beats the aspiration level, so it is admitted again.
        tabu.set_aspiration(Some(-5.0));
        let (mv, _) = tsp.max_action(&tsp.init(), Some(&tabu)).unwrap();
        assert_eq!(mv, Swap { i: 1, j: 2 });
    }

    #[test]
    fn test_moves_count() {
        let tsp = Tsp::from_points(&[(0.0, 0.0); 5]).unwrap();
        assert_eq!(tsp.moves().count(), 6);
    }

    #[test]
    fn test_random_reset_keeps_start_city() {
        let tsp = Tsp::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)])
            .unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let tour = tsp.random_reset(&mut rng);
            assert_eq!(tour[0], 0);
            let mut sorted = tour.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, tsp.init());
        }
    }

    #[test]
    fn test_new_rejects_bad_matrices() {
        assert_eq!(Tsp::new(vec![vec![0.0]]).unwrap_err(), TspError::TooFewCities(1));
        assert_eq!(
            Tsp::new(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err(),
            TspError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
        assert!(matches!(
            Tsp::new(vec![vec![0.0, -1.0], vec![1.0, 0.0]]),
            Err(TspError::InvalidDistance { from: 0, to: 1, .. })
        ));
    }
}
