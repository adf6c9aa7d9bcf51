//! Error type shared by the search engines.

use thiserror::Error;

/// Errors raised by the search engines and their configuration.
///
/// Note that failing to find a path is *not* an error: uniform-cost search
/// reports it as [`SearchOutcome::NoSolution`](crate::ucs::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `pop` was called on an empty frontier. Callers must check
    /// `is_empty()` first.
    #[error("pop called on an empty frontier")]
    EmptyFrontier,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
