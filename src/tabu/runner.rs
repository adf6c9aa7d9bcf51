//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the problem's initial state
//! 2. While the stagnation counter is below its limit:
//!    a. (Optional) diversify: teleport to the least-visited recent state
//!    b. Ask the problem for the best admissible move
//!    c. Aspiration: a tabu move that beats the global best is lifted
//!    from the tabu list
//!    d. Improving move: make it tabu, move, and reset the stagnation
//!    counter if it is a new global best
//!    e. Non-improving move: move anyway and count one stagnant iteration
//! 3. Return the best state seen during the whole run
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search, Part II", *ORSA Journal on Computing* 2(1), 4-32.

use std::time::Instant;

use super::config::TabuConfig;
use super::memory::{FrequencyMemory, TabuList};
use crate::error::SearchError;
use crate::local::{LocalSearch, LocalSearchResult, OptProblem, StopReason};

/// Tabu Search with a FIFO tabu list, aspiration, and optional
/// frequency-based diversification.
#[derive(Debug, Clone)]
pub struct TabuSearch {
    config: TabuConfig,
}

impl TabuSearch {
    /// Creates a tabu search with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn new(config: TabuConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TabuConfig {
        &self.config
    }
}

impl LocalSearch for TabuSearch {
    fn name(&self) -> &'static str {
        "TabuSearch"
    }

    /// Runs Tabu Search on `problem`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use u_explore::local::LocalSearch;
    /// use u_explore::tabu::{TabuConfig, TabuSearch};
    /// use u_explore::tsp::Tsp;
    ///
    /// let tsp = Tsp::from_points(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
    /// let search = TabuSearch::new(TabuConfig::default().with_tabu_limit(3)).unwrap();
    /// let result = search.solve(&tsp);
    /// println!("{:?} -> {}", result.best, -result.best_value);
    /// ```
    fn solve<P: OptProblem>(&self, problem: &P) -> LocalSearchResult<P::State> {
        let start = Instant::now();
        let config = &self.config;

        let mut current = problem.init();
        let mut value = problem.obj_val(&current);
        let mut best = current.clone();
        let mut best_value = value;

        let mut tabu: TabuList<P::Action> = TabuList::new(config.tabu_limit);
        let mut frequency = config
            .diversification
            .as_ref()
            .map(|d| FrequencyMemory::new(d.recent_window));
        if let Some(memory) = frequency.as_mut() {
            memory.record(&current);
        }

        let mut iterations = 0usize;
        let mut no_improve_count = 0usize;
        let mut value_history = Vec::new();
        let mut stop_reason = StopReason::Stagnation;

        while no_improve_count < config.no_improve_limit {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                log::warn!(
                    "tabu: stopped at the iteration cap ({}) before stagnating",
                    config.max_iterations
                );
                stop_reason = StopReason::IterationLimit;
                break;
            }

            if let (Some(d), Some(memory)) = (config.diversification.as_ref(), frequency.as_mut())
            {
                if iterations < d.warmup_iterations || no_improve_count >= d.stagnation_trigger {
                    let target = memory
                        .least_visited_recent()
                        .filter(|s| **s != current)
                        .cloned();
                    if let Some(target) = target {
                        log::trace!(
                            "tabu: iteration {iterations} diversifies to a state visited {} time(s)",
                            memory.count(&target)
                        );
                        value = problem.obj_val(&target);
                        memory.record(&target);
                        current = target;
                    }
                }
            }

            tabu.set_aspiration(config.aspiration.then_some(best_value));

            let Some((action, candidate)) = problem.max_action(&current, Some(&tabu)) else {
                // Nowhere to go: the iteration counts as stagnant.
                iterations += 1;
                no_improve_count += 1;
                value_history.push(best_value);
                continue;
            };

            // The lifted move is re-added below as the newest entry.
            if config.aspiration && candidate > best_value && tabu.remove(&action) {
                log::trace!("tabu: aspiration admits {action:?} ({candidate} > {best_value})");
            }

            let next = problem.result(&current, &action);
            if candidate > value {
                tabu.push(action);
                current = next;
                value = candidate;
                if value > best_value {
                    best = current.clone();
                    best_value = value;
                    no_improve_count = 0;
                }
            } else {
                current = next;
                value = candidate;
                no_improve_count += 1;
            }
            iterations += 1;
            debug_assert!(tabu.len() <= tabu.limit());

            if let Some(memory) = frequency.as_mut() {
                memory.record(&current);
            }
            value_history.push(best_value);

            log::trace!(
                "tabu: iteration {iterations} value {value} best {best_value} stagnant {no_improve_count}"
            );
        }

        let elapsed = start.elapsed();
        log::debug!(
            "tabu: {iterations} iterations, best {best_value}, {stop_reason:?} in {elapsed:?}"
        );

        LocalSearchResult {
            best,
            best_value,
            iterations,
            elapsed,
            stop_reason,
            value_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabu::{DiversificationConfig, TabuConfig};
    use rand::Rng;
    use std::cell::RefCell;

    // ---- Line walk: actions '+' and '-' move one step along the integers ----

    /// Records the state and tabu list handed to every `max_action` call.
    struct LineWalk<F: Fn(i64) -> f64> {
        f: F,
        calls: RefCell<Vec<(i64, Vec<char>, Option<f64>)>>,
    }

    impl<F: Fn(i64) -> f64> LineWalk<F> {
        fn new(f: F) -> Self {
            Self {
                f,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn queried_states(&self) -> Vec<i64> {
            self.calls.borrow().iter().map(|c| c.0).collect()
        }
    }

    impl<F: Fn(i64) -> f64> OptProblem for LineWalk<F> {
        type State = i64;
        type Action = char;

        fn init(&self) -> i64 {
            0
        }

        fn obj_val(&self, &x: &i64) -> f64 {
            (self.f)(x)
        }

        fn max_action(&self, &x: &i64, tabu: Option<&TabuList<char>>) -> Option<(char, f64)> {
            if let Some(t) = tabu {
                self.calls
                    .borrow_mut()
                    .push((x, t.iter().copied().collect(), t.aspiration()));
            }
            [('+', x + 1), ('-', x - 1)]
                .into_iter()
                .map(|(a, y)| (a, self.obj_val(&y)))
                .filter(|(a, v)| tabu.is_none_or(|t| t.admits(a, *v)))
                .max_by(|a, b| a.1.total_cmp(&b.1))
        }

        fn result(&self, &x: &i64, &a: &char) -> i64 {
            if a == '+' {
                x + 1
            } else {
                x - 1
            }
        }

        fn random_reset<R: Rng>(&self, rng: &mut R) -> i64 {
            rng.random_range(-20..20)
        }
    }

    /// f(0)=0, f(1)=5, f(2)=8, everything else strongly negative.
    fn staircase(x: i64) -> f64 {
        match x {
            0 => 0.0,
            1 => 5.0,
            2 => 8.0,
            _ => -10.0 * x.abs() as f64,
        }
    }

    fn run(problem: &LineWalk<impl Fn(i64) -> f64>, config: TabuConfig) -> LocalSearchResult<i64> {
        TabuSearch::new(config).unwrap().solve(problem)
    }

    #[test]
    fn test_tabu_aspiration_takes_tabu_move_to_new_best() {
        // At x=1 the only non-tabu move ('-') is worse, while the tabu
        // '+' reaches 8 > best 5.
        let problem = LineWalk::new(staircase);
        let config = TabuConfig::default()
            .with_tabu_limit(2)
            .with_no_improve_limit(3);
        let result = run(&problem, config);

        assert_eq!(result.best, 2);
        assert_eq!(result.best_value, 8.0);

        let calls = problem.calls.borrow();
        assert_eq!(calls[1], (1, vec!['+'], Some(5.0)));
        // Lifted then re-added: a single entry, not a duplicate.
        assert_eq!(calls[2].0, 2);
        assert_eq!(calls[2].1, vec!['+']);
    }

    #[test]
    fn test_tabu_without_aspiration_misses_best() {
        let problem = LineWalk::new(staircase);
        let config = TabuConfig::default()
            .with_tabu_limit(2)
            .with_no_improve_limit(3)
            .with_aspiration(false);
        let result = run(&problem, config);

        assert_eq!(result.best, 1);
        assert_eq!(result.best_value, 5.0);
        assert!(problem.calls.borrow().iter().all(|c| c.2.is_none()));
    }

    #[test]
    fn test_tabu_stagnation_returns_best_not_final() {
        let problem = LineWalk::new(staircase);
        let config = TabuConfig::default()
            .with_tabu_limit(2)
            .with_no_improve_limit(3);
        let result = run(&problem, config);

        // Two improving moves, then exactly three stagnant ones.
        assert_eq!(result.iterations, 5);
        assert_eq!(result.stop_reason, StopReason::Stagnation);
        assert_eq!(problem.queried_states(), vec![0, 1, 2, 1, 0]);
        assert_eq!(result.best_value, 8.0);
        assert!(staircase(-1) < result.best_value);
    }

    #[test]
    fn test_tabu_quadratic_finds_optimum() {
        let problem = LineWalk::new(|x: i64| -((x - 5) as f64).powi(2));
        let config = TabuConfig::default()
            .with_tabu_limit(3)
            .with_no_improve_limit(20);
        let result = run(&problem, config);

        assert_eq!(result.best, 5);
        assert!(result.best_value.abs() < 1e-10);
    }

    #[test]
    fn test_tabu_list_never_exceeds_limit() {
        let problem = LineWalk::new(|x: i64| ((x as f64) * 0.7).sin() * 10.0 - (x as f64).abs());
        let config = TabuConfig::default()
            .with_tabu_limit(1)
            .with_no_improve_limit(40);
        let _ = run(&problem, config);

        assert!(problem.calls.borrow().iter().all(|c| c.1.len() <= 1));
    }

    #[test]
    fn test_tabu_value_history_non_decreasing() {
        let problem = LineWalk::new(|x: i64| ((x as f64) * 0.3).cos() * 10.0 - (x as f64).abs());
        let result = run(&problem, TabuConfig::default().with_no_improve_limit(30));

        assert_eq!(result.value_history.len(), result.iterations);
        for window in result.value_history.windows(2) {
            assert!(window[1] >= window[0]);
        }
    }

    #[test]
    fn test_tabu_iteration_cap() {
        // Strictly increasing forever: never stagnates.
        let problem = LineWalk::new(|x: i64| x as f64);
        let config = TabuConfig::default().with_max_iterations(25);
        let result = run(&problem, config);

        assert_eq!(result.iterations, 25);
        assert_eq!(result.stop_reason, StopReason::IterationLimit);
        assert!(!result.converged());
        assert_eq!(result.best, 25);
    }

    #[test]
    fn test_tabu_empty_neighborhood() {
        struct Stuck;
        impl OptProblem for Stuck {
            type State = u8;
            type Action = u8;
            fn init(&self) -> u8 {
                4
            }
            fn obj_val(&self, &x: &u8) -> f64 {
                f64::from(x)
            }
            fn max_action(&self, _: &u8, _: Option<&TabuList<u8>>) -> Option<(u8, f64)> {
                None
            }
            fn result(&self, &x: &u8, _: &u8) -> u8 {
                x
            }
            fn random_reset<R: Rng>(&self, _rng: &mut R) -> u8 {
                0
            }
        }

        let search = TabuSearch::new(TabuConfig::default().with_no_improve_limit(4)).unwrap();
        let result = search.solve(&Stuck);
        assert_eq!(result.best, 4);
        assert_eq!(result.iterations, 4);
        assert_eq!(result.stop_reason, StopReason::Stagnation);
    }

    #[test]
    fn test_tabu_warmup_diversification_teleports() {
        let quadratic = |x: i64| -((x - 5) as f64).powi(2);

        let plain = LineWalk::new(quadratic);
        let _ = run(&plain, TabuConfig::default().with_no_improve_limit(5));
        assert_eq!(&plain.queried_states()[..2], &[0, 1]);

        // After the first move the recent window is [0, 1], both visited
        // once; the tie goes to the older state.
        let diversified = LineWalk::new(quadratic);
        let config = TabuConfig::default()
            .with_no_improve_limit(5)
            .with_diversification(
                DiversificationConfig::default()
                    .with_warmup_iterations(3)
                    .with_stagnation_trigger(1000),
            );
        let result = run(&diversified, config);
        assert_eq!(&diversified.queried_states()[..2], &[0, 0]);
        assert_eq!(result.stop_reason, StopReason::Stagnation);
        assert!(result.best_value >= quadratic(0));
    }

    #[test]
    fn test_tabu_stagnation_diversification_keeps_counter() {
        let config = TabuConfig::default()
            .with_tabu_limit(2)
            .with_no_improve_limit(6);

        let plain = LineWalk::new(staircase);
        let _ = run(&plain, config.clone());
        assert_eq!(plain.queried_states(), vec![0, 1, 2, 1, 0, -1, -2, -3]);

        // Once two moves in a row fail to improve, each iteration starts
        // from the least-visited recent state: 2, then 0, then nothing (-1
        // is already current), then -1.
        let diversified = LineWalk::new(staircase);
        let result = run(
            &diversified,
            config.with_diversification(
                DiversificationConfig::default()
                    .with_warmup_iterations(0)
                    .with_stagnation_trigger(2),
            ),
        );
        assert_eq!(diversified.queried_states(), vec![0, 1, 2, 1, 2, 0, -1, -1]);

        // Two improving moves plus the full stagnation budget: teleporting
        // never resets the counter.
        assert_eq!(result.iterations, 2 + 6);
        assert_eq!(result.stop_reason, StopReason::Stagnation);
        assert_eq!(result.best, 2);
        assert_eq!(result.best_value, 8.0);
    }

    #[test]
    fn test_tabu_new_rejects_invalid_config() {
        let err = TabuSearch::new(TabuConfig::default().with_tabu_limit(0)).unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }
}
