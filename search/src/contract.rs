//! Graph data provider contract trait.

use crate::error::SearchError;
use crate::node::Action;

/// The one capability the search engine consumes from its environment:
/// for any state, the set of edges reachable in one hop.
///
/// # Contract
///
/// - `neighbors` must be a pure query: no side effects observable to the
///   search engine, and the same state yields the same neighbor set for
///   the lifetime of one search call.
/// - An unresolvable state is an error, never an empty neighbor set. A
///   known state with no edges returns `Ok(vec![])`.
/// - The engine imposes no ordering; a provider that wants deterministic
///   tie-breaking among equal-length paths must sort its neighbor sets.
pub trait GraphProvider<S, E> {
    /// All edges leaving `state`, as (edge label, neighbor state) pairs.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownState`] if `state` is not a known
    /// graph state.
    fn neighbors(&self, state: &S) -> Result<Vec<Action<S, E>>, SearchError>;
}
