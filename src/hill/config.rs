//! Hill climbing configuration.

use crate::error::SearchError;

/// Configuration for steepest-ascent hill climbing.
///
/// # Examples
///
/// ```
/// use u_explore::hill::HillClimbingConfig;
///
/// let config = HillClimbingConfig::default().with_max_iterations(10_000);
/// assert_eq!(config.max_iterations, 10_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingConfig {
    /// Hard cap on moves per climb. 0 = no limit.
    ///
    /// A climb that hits the cap reports
    /// [`StopReason::IterationLimit`](crate::local::StopReason) instead of
    /// running forever on a problem with equal-value cycles.
    pub max_iterations: usize,
}

impl HillClimbingConfig {
    /// Sets the per-climb iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }
}

/// Configuration for random-restart hill climbing.
///
/// # Examples
///
/// ```
/// use u_explore::hill::RestartConfig;
///
/// let config = RestartConfig::default()
///     .with_max_restarts(25)
///     .with_seed(7);
/// assert_eq!(config.max_restarts, 25);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartConfig {
    /// Number of independent climbs. The first starts from the problem's
    /// initial state.
    pub max_restarts: usize,
    /// Settings applied to every climb.
    pub climb: HillClimbingConfig,
    /// Random seed for restart states (None for random).
    pub seed: Option<u64>,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            max_restarts: 10,
            climb: HillClimbingConfig::default(),
            seed: None,
        }
    }
}

impl RestartConfig {
    /// Sets the number of climbs.
    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = n;
        self
    }

    /// Sets the settings used by each climb.
    pub fn with_climb(mut self, climb: HillClimbingConfig) -> Self {
        self.climb = climb;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_restarts == 0 {
            return Err(SearchError::InvalidConfig(
                "max_restarts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
