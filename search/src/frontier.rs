//! Frontier of discovered-but-not-yet-expanded search nodes.
//!
//! One type covers both traversal strategies: removal order is an explicit
//! [`RemovalOrder`] value rather than a trait object, since the two
//! variants share identical add/contains/empty semantics and differ only
//! in which end of the deque `remove` takes. Swapping `Fifo` for `Lifo`
//! turns the surrounding search from breadth-first into depth-first with
//! no other change.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::error::SearchError;
use crate::node::NodeId;

/// Which end of the frontier `remove` takes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOrder {
    /// First-in-first-out: earliest-added node first. Required for the
    /// shortest-path guarantee of [`crate::search::shortest_path`].
    Fifo,
    /// Last-in-first-out: most recently added node first (depth-first
    /// exploration order).
    Lifo,
}

#[derive(Debug)]
struct Entry<S> {
    node: NodeId,
    state: S,
}

/// Ordered collection of pending search nodes with a resident-state index.
///
/// `add` is unconditional: callers dedup against `contains_state` and
/// their explored set before inserting, so at most one node per distinct
/// state is resident at a time.
#[derive(Debug)]
pub struct Frontier<S> {
    order: RemovalOrder,
    entries: VecDeque<Entry<S>>,
    resident: HashSet<S>,
    high_water: usize,
}

impl<S: Clone + Eq + Hash> Frontier<S> {
    /// Create an empty frontier with the given removal order.
    #[must_use]
    pub fn new(order: RemovalOrder) -> Self {
        Self {
            order,
            entries: VecDeque::new(),
            resident: HashSet::new(),
            high_water: 0,
        }
    }

    /// Insert a node. No dedup happens here; see the type-level contract.
    pub fn add(&mut self, node: NodeId, state: S) {
        self.resident.insert(state.clone());
        self.entries.push_back(Entry { node, state });
        if self.entries.len() > self.high_water {
            self.high_water = self.entries.len();
        }
    }

    /// True iff some resident node has this state.
    #[must_use]
    pub fn contains_state(&self, state: &S) -> bool {
        self.resident.contains(state)
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current number of resident nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Remove and return the next node per the configured removal order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] if the frontier is empty. A
    /// correctly driven search checks `is_empty` first, so hitting this is
    /// an internal-invariant violation, not a recoverable condition.
    pub fn remove(&mut self) -> Result<NodeId, SearchError> {
        let entry = match self.order {
            RemovalOrder::Fifo => self.entries.pop_front(),
            RemovalOrder::Lifo => self.entries.pop_back(),
        }
        .ok_or(SearchError::EmptyFrontier)?;
        self.resident.remove(&entry.state);
        Ok(entry.node)
    }
}
