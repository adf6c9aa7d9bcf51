//! Frontier and explored-set containers for uniform-cost search.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

use ordered_float::OrderedFloat;
use rustc_hash::FxHashSet;

use crate::error::SearchError;

/// A heap entry. Ordered by `(priority, seq)`; the item is ignored.
#[derive(Debug)]
struct Entry<T> {
    priority: OrderedFloat<f64>,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.priority, self.seq).cmp(&(other.priority, other.seq))
    }
}

/// Min-priority queue of pending search nodes.
///
/// Items with equal priority come out in insertion order.
///
/// # Examples
///
/// ```
/// use u_explore::ucs::Frontier;
///
/// let mut frontier = Frontier::new();
/// frontier.add("far", 3.0);
/// frontier.add("near", 1.0);
/// assert_eq!(frontier.pop(), Ok("near"));
/// assert_eq!(frontier.pop(), Ok("far"));
/// assert!(frontier.is_empty());
/// ```
#[derive(Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> Frontier<T> {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item` with the given priority.
    pub fn add(&mut self, item: T, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            priority: OrderedFloat(priority),
            seq,
            item,
        }));
    }

    /// Removes and returns the item with the smallest priority.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] if the frontier is empty.
    pub fn pop(&mut self) -> Result<T, SearchError> {
        self.heap
            .pop()
            .map(|Reverse(entry)| entry.item)
            .ok_or(SearchError::EmptyFrontier)
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of pending items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Set of states generated so far.
#[derive(Debug, Clone)]
pub struct ExploredSet<S> {
    states: FxHashSet<S>,
}

impl<S> Default for ExploredSet<S> {
    fn default() -> Self {
        Self {
            states: FxHashSet::default(),
        }
    }
}

impl<S: Eq + Hash> ExploredSet<S> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `state` as explored. Returns `false` if it already was.
    pub fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    /// Returns `true` if `state` has been generated.
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Number of explored states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Explored states in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.states.iter()
    }

    /// Consumes the set, returning the underlying hash set.
    pub fn into_inner(self) -> FxHashSet<S> {
        self.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_returns_minimum_first() {
        let mut frontier = Frontier::new();
        for (item, priority) in [('c', 5.0), ('a', 0.5), ('d', 9.0), ('b', 2.0)] {
            frontier.add(item, priority);
        }
        let order: Vec<char> = std::iter::from_fn(|| frontier.pop().ok()).collect();
        assert_eq!(order, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_equal_priorities_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        frontier.add(1, 1.0);
        frontier.add(2, 1.0);
        frontier.add(0, 0.0);
        frontier.add(3, 1.0);
        assert_eq!(frontier.pop(), Ok(0));
        assert_eq!(frontier.pop(), Ok(1));
        assert_eq!(frontier.pop(), Ok(2));
        assert_eq!(frontier.pop(), Ok(3));
    }

    #[test]
    fn test_pop_empty_frontier_fails() {
        let mut frontier: Frontier<u8> = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), Err(SearchError::EmptyFrontier));
    }

    #[test]
    fn test_explored_set_rejects_duplicates() {
        let mut explored = ExploredSet::new();
        assert!(explored.insert((0, 0)));
        assert!(!explored.insert((0, 0)));
        assert!(explored.contains(&(0, 0)));
        assert_eq!(explored.len(), 1);
    }
}
