//! Search entry point and expansion loop.

use std::collections::HashSet;
use std::hash::Hash;

use crate::contract::GraphProvider;
use crate::error::SearchError;
use crate::frontier::{Frontier, RemovalOrder};
use crate::node::{Action, NodeArena, NodeId, SearchNode};

/// Optional caps on search effort.
///
/// The default imposes no cap: the search runs to an exact answer. Setting
/// `max_expansions` changes the contract from "exact shortest path or
/// no-path" to "shortest path or give-up" — exceeding the cap surfaces as
/// [`SearchOutcome::LimitReached`], a distinct outcome never conflated
/// with [`SearchOutcome::NotConnected`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Hard cap on node expansions (`None` = unlimited).
    pub max_expansions: Option<u64>,
}

/// Counters describing how much work one search performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the frontier and expanded.
    pub expansions: u64,
    /// Nodes created, root included.
    pub nodes_created: u64,
    /// Candidate neighbors skipped because their state was already
    /// frontier-resident or explored.
    pub duplicates_suppressed: u64,
    /// High-water mark of frontier size.
    pub frontier_high_water: usize,
}

/// Terminal outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<S, E> {
    /// A minimum-length path, earliest edge first. Empty exactly when
    /// source equals target. Its length is the degrees of separation.
    Path(Vec<Action<S, E>>),
    /// Source and target are not connected. A legitimate outcome, not an
    /// error, and distinct from a zero-length path.
    NotConnected,
    /// The expansion cap was hit before an exact answer was reached.
    LimitReached,
}

/// Outcome plus work counters for one `shortest_path` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<S, E> {
    pub outcome: SearchOutcome<S, E>,
    pub stats: SearchStats,
}

impl<S, E> SearchResult<S, E> {
    /// The found path, if the search succeeded.
    #[must_use]
    pub fn path(&self) -> Option<&[Action<S, E>]> {
        match &self.outcome {
            SearchOutcome::Path(path) => Some(path),
            _ => None,
        }
    }

    /// Degrees of separation (path edge count), if a path was found.
    #[must_use]
    pub fn degrees(&self) -> Option<usize> {
        self.path().map(<[Action<S, E>]>::len)
    }
}

/// Find a minimum-length path from `source` to `target`.
///
/// Breadth-first search over the implicit graph exposed by `provider`,
/// using a FIFO frontier: all nodes at depth k are expanded before any
/// node at depth k+1 is removed, so the first node found for the target
/// is reached via a shortest path. Duplicate states are suppressed before
/// enqueue (one membership test against the frontier, one against the
/// explored set), bounding work to O(V+E) and guaranteeing termination on
/// finite graphs regardless of cycles.
///
/// `source` and `target` must already be resolved to valid graph states;
/// name resolution is the caller's concern. `source == target` is legal
/// and yields an empty path.
///
/// Among equal-length paths the one whose final edge is enumerated first
/// by the provider wins; the returned length is deterministic, the
/// specific path is canonical only if the provider orders its neighbor
/// sets.
///
/// # Errors
///
/// - [`SearchError::UnknownState`] if the provider cannot resolve a state
///   it is asked to expand (propagated, never treated as "no neighbors").
/// - [`SearchError::EmptyFrontier`] only on an internal driver bug; the
///   loop checks emptiness before every remove.
pub fn shortest_path<S, E, G>(
    provider: &G,
    source: &S,
    target: &S,
    limits: SearchLimits,
) -> Result<SearchResult<S, E>, SearchError>
where
    S: Clone + Eq + Hash,
    E: Clone,
    G: GraphProvider<S, E> + ?Sized,
{
    let mut stats = SearchStats::default();

    // The per-neighbor target check below never tests the root itself, so
    // the zero-degree case is decided up front.
    if source == target {
        return Ok(SearchResult {
            outcome: SearchOutcome::Path(Vec::new()),
            stats,
        });
    }

    let mut arena: NodeArena<S, E> = NodeArena::new();
    let mut frontier = Frontier::new(RemovalOrder::Fifo);
    let mut explored: HashSet<S> = HashSet::new();

    let root = arena.push(SearchNode::root(source.clone()));
    frontier.add(root, source.clone());
    stats.nodes_created = 1;

    let outcome = loop {
        if frontier.is_empty() {
            break SearchOutcome::NotConnected;
        }
        if let Some(cap) = limits.max_expansions {
            if stats.expansions >= cap {
                break SearchOutcome::LimitReached;
            }
        }

        let current = frontier.remove()?;
        let current_state = arena.get(current).state().clone();
        stats.expansions += 1;

        for action in provider.neighbors(&current_state)? {
            if action.state == *target {
                let goal_state = action.state.clone();
                let goal = arena.push(SearchNode::child(goal_state, current, action));
                stats.nodes_created += 1;
                stats.frontier_high_water = frontier.high_water();
                return Ok(SearchResult {
                    outcome: SearchOutcome::Path(reconstruct_path(&arena, goal)),
                    stats,
                });
            }

            if frontier.contains_state(&action.state) || explored.contains(&action.state) {
                stats.duplicates_suppressed += 1;
                continue;
            }

            let state = action.state.clone();
            let child = arena.push(SearchNode::child(state.clone(), current, action));
            frontier.add(child, state);
            stats.nodes_created += 1;
        }

        explored.insert(current_state);
    };

    stats.frontier_high_water = frontier.high_water();
    Ok(SearchResult { outcome, stats })
}

/// Walk parent links from `goal` back to the root, collecting actions,
/// then reverse so the path runs source → target. The root carries no
/// action and is excluded.
fn reconstruct_path<S: Clone, E: Clone>(arena: &NodeArena<S, E>, goal: NodeId) -> Vec<Action<S, E>> {
    let mut path = Vec::new();
    let mut current = goal;
    // The root is the only node without a parent, and the only one without
    // an action; the walk stops there without emitting it.
    loop {
        let node = arena.get(current);
        let (Some(parent), Some(action)) = (node.parent(), node.action()) else {
            break;
        };
        path.push(action.clone());
        current = parent;
    }
    path.reverse();
    path
}
