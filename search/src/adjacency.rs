//! Map-backed in-memory graph provider.
//!
//! The CSV-ingesting `degrees-data` crate provides the production
//! implementation of [`GraphProvider`]; this one backs tests and benches
//! with explicit fixture graphs.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::contract::GraphProvider;
use crate::error::SearchError;
use crate::node::Action;

/// Adjacency-list graph over opaque states and edge labels.
///
/// States must be registered (via [`AdjacencyGraph::add_state`] or as an
/// endpoint of an edge) before the provider will answer for them; asking
/// about an unregistered state is an `UnknownState` error, matching the
/// provider contract.
#[derive(Debug, Default)]
pub struct AdjacencyGraph<S, E> {
    edges: HashMap<S, Vec<Action<S, E>>>,
}

impl<S, E> AdjacencyGraph<S, E>
where
    S: Clone + Eq + Hash,
    E: Clone,
{
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Register a state with no edges (an isolated node until edges are
    /// added).
    pub fn add_state(&mut self, state: S) {
        self.edges.entry(state).or_default();
    }

    /// Add an undirected edge between `a` and `b` labeled `label`.
    ///
    /// Both endpoints become known states.
    pub fn add_edge(&mut self, a: S, b: S, label: E) {
        self.edges.entry(a.clone()).or_default().push(Action {
            edge: label.clone(),
            state: b.clone(),
        });
        self.edges.entry(b).or_default().push(Action {
            edge: label,
            state: a,
        });
    }

    /// Number of known states.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.edges.len()
    }
}

impl<S, E> GraphProvider<S, E> for AdjacencyGraph<S, E>
where
    S: Clone + Eq + Hash + fmt::Debug,
    E: Clone,
{
    fn neighbors(&self, state: &S) -> Result<Vec<Action<S, E>>, SearchError> {
        self.edges
            .get(state)
            .cloned()
            .ok_or_else(|| SearchError::UnknownState {
                detail: format!("{state:?} is not a registered graph state"),
            })
    }
}
