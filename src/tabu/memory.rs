//! Short-term (tabu list) and long-term (visit frequency) memory.

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A bounded FIFO of forbidden actions.
///
/// Pushing onto a full list evicts the oldest entry, so `len() <= limit()`
/// holds after every mutation. The list also carries the aspiration level:
/// a tabu action is still [admitted](Self::admits) if it leads to a value
/// strictly above that level.
///
/// # Examples
///
/// ```
/// use u_explore::tabu::TabuList;
///
/// let mut tabu = TabuList::new(2);
/// tabu.push("a");
/// tabu.push("b");
/// tabu.push("c");
/// assert_eq!(tabu.len(), 2);
/// assert!(!tabu.contains(&"a"));
/// assert!(!tabu.admits(&"b", 1.0));
///
/// tabu.set_aspiration(Some(0.5));
/// assert!(tabu.admits(&"b", 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct TabuList<A> {
    entries: VecDeque<A>,
    limit: usize,
    aspiration: Option<f64>,
}

impl<A: PartialEq> TabuList<A> {
    /// Creates an empty list holding at most `limit` actions.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
            aspiration: None,
        }
    }

    /// Makes `action` tabu, evicting the oldest entries if the list is full.
    ///
    /// An action already in the list is moved to the most recent position.
    pub fn push(&mut self, action: A) {
        if self.limit == 0 {
            return;
        }
        self.remove(&action);
        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(action);
    }

    /// Lifts the restriction on `action`. Returns `true` if it was tabu.
    pub fn remove(&mut self, action: &A) -> bool {
        match self.entries.iter().position(|a| a == action) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `action` is currently tabu.
    pub fn contains(&self, action: &A) -> bool {
        self.entries.contains(action)
    }

    /// Returns `true` if a move by `action` reaching `value` may be taken.
    pub fn admits(&self, action: &A, value: f64) -> bool {
        !self.contains(action) || self.aspiration.is_some_and(|level| value > level)
    }

    /// Sets the value a tabu move has to beat to be admitted. `None`
    /// disables aspiration.
    pub fn set_aspiration(&mut self, level: Option<f64>) {
        self.aspiration = level;
    }

    /// Current aspiration level.
    pub fn aspiration(&self) -> Option<f64> {
        self.aspiration
    }

    /// Number of tabu actions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.entries.iter()
    }
}

/// Visit counts of every state seen during a run, plus a window of the
/// most recently visited ones.
#[derive(Debug, Clone)]
pub struct FrequencyMemory<S> {
    counts: FxHashMap<S, usize>,
    recent: VecDeque<S>,
    window: usize,
}

impl<S: Clone + Eq + Hash> FrequencyMemory<S> {
    /// Creates an empty memory whose recent window holds `window` states.
    pub fn new(window: usize) -> Self {
        Self {
            counts: FxHashMap::default(),
            recent: VecDeque::with_capacity(window),
            window,
        }
    }

    /// Counts a visit to `state`.
    pub fn record(&mut self, state: &S) {
        *self.counts.entry(state.clone()).or_insert(0) += 1;
        if self.window == 0 {
            return;
        }
        if self.recent.len() >= self.window {
            self.recent.pop_front();
        }
        self.recent.push_back(state.clone());
    }

    /// Number of recorded visits to `state`.
    pub fn count(&self, state: &S) -> usize {
        self.counts.get(state).copied().unwrap_or(0)
    }

    /// Number of distinct states seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// The least-visited state of the recent window. Ties go to the
    /// oldest one.
    pub fn least_visited_recent(&self) -> Option<&S> {
        self.recent
            .iter()
            .enumerate()
            .min_by_key(|(i, s)| (self.count(s), *i))
            .map(|(_, s)| s)
    }
}
