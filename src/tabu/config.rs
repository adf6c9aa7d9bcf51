//! Tabu Search configuration.

use crate::error::SearchError;

/// Frequency-based diversification settings.
///
/// When active, the search keeps a visit count per state and, at the start
/// of an iteration, teleports to the least-visited state among the
/// `recent_window` most recently visited ones. It triggers on every
/// iteration below `warmup_iterations` and whenever the stagnation counter
/// has reached `stagnation_trigger`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiversificationConfig {
    /// Stagnation count at which the search teleports.
    pub stagnation_trigger: usize,
    /// Iterations during which the search teleports unconditionally.
    pub warmup_iterations: usize,
    /// Number of recent states considered as teleport targets.
    pub recent_window: usize,
}

impl Default for DiversificationConfig {
    fn default() -> Self {
        Self {
            stagnation_trigger: 10,
            warmup_iterations: 10,
            recent_window: 20,
        }
    }
}

impl DiversificationConfig {
    /// Sets the stagnation count that triggers a teleport.
    pub fn with_stagnation_trigger(mut self, n: usize) -> Self {
        self.stagnation_trigger = n;
        self
    }

    /// Sets the number of leading iterations that always teleport.
    pub fn with_warmup_iterations(mut self, n: usize) -> Self {
        self.warmup_iterations = n;
        self
    }

    /// Sets the size of the recent-state window.
    pub fn with_recent_window(mut self, n: usize) -> Self {
        self.recent_window = n;
        self
    }
}

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_explore::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_tabu_limit(7)
///     .with_no_improve_limit(50)
///     .with_aspiration(true);
/// assert_eq!(config.tabu_limit, 7);
/// assert_eq!(config.no_improve_limit, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of actions kept in the tabu list.
    pub tabu_limit: usize,
    /// Non-improving iterations tolerated before stopping.
    pub no_improve_limit: usize,
    /// Whether a tabu move may be taken when it beats the best value so far.
    pub aspiration: bool,
    /// Hard cap on iterations. 0 = no limit.
    pub max_iterations: usize,
    /// Frequency-based diversification. `None` disables it.
    pub diversification: Option<DiversificationConfig>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tabu_limit: 7,
            no_improve_limit: 100,
            aspiration: true,
            max_iterations: 0,
            diversification: None,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu list length.
    pub fn with_tabu_limit(mut self, limit: usize) -> Self {
        self.tabu_limit = limit;
        self
    }

    /// Sets how many non-improving iterations end the run.
    pub fn with_no_improve_limit(mut self, n: usize) -> Self {
        self.no_improve_limit = n;
        self
    }

    /// Enables or disables the aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Sets the hard iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Enables frequency-based diversification.
    pub fn with_diversification(mut self, diversification: DiversificationConfig) -> Self {
        self.diversification = Some(diversification);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.tabu_limit == 0 {
            return Err(SearchError::InvalidConfig(
                "tabu_limit must be at least 1".into(),
            ));
        }
        if self.no_improve_limit == 0 {
            return Err(SearchError::InvalidConfig(
                "no_improve_limit must be at least 1".into(),
            ));
        }
        if let Some(d) = &self.diversification {
            if d.recent_window == 0 {
                return Err(SearchError::InvalidConfig(
                    "diversification recent_window must be at least 1".into(),
                ));
            }
        }
        Ok(())
    }
}
