//! Core search node types and the node arena.

use serde::{Deserialize, Serialize};

/// One traversed edge: the edge label and the state it leads to.
///
/// In the degrees-of-separation domain the label is a movie identity and
/// the state is the co-star reached through it, but the search core treats
/// both as opaque tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action<S, E> {
    /// Label of the traversed edge.
    pub edge: E,
    /// The state this edge leads to.
    pub state: S,
}

/// Index of a node in a [`NodeArena`].
///
/// Parent links are arena indices rather than owned references, so the
/// node tree is a flat, trivially serializable structure rooted at the
/// source (index 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

/// An immutable search node: a state plus the parent and action that
/// produced it.
///
/// Invariant: `parent` and `action` are both absent exactly for the root
/// node. The constructors make this structural — there is no way to build
/// a node that violates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchNode<S, E> {
    state: S,
    parent: Option<NodeId>,
    action: Option<Action<S, E>>,
}

impl<S, E> SearchNode<S, E> {
    /// Construct the root node for the source state.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            action: None,
        }
    }

    /// Construct a child node reached from `parent` via `action`.
    #[must_use]
    pub fn child(state: S, parent: NodeId, action: Action<S, E>) -> Self {
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
        }
    }

    /// The graph state this node represents.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Arena index of the parent node (`None` for the root).
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The edge traversed to reach this node (`None` for the root).
    #[must_use]
    pub fn action(&self) -> Option<&Action<S, E>> {
        self.action.as_ref()
    }
}

/// Arena owning every node created during one search invocation.
///
/// Nodes are pushed once and never mutated; children reference parents by
/// index. Scoped to a single `shortest_path` call.
#[derive(Debug, Default)]
pub struct NodeArena<S, E> {
    nodes: Vec<SearchNode<S, E>>,
}

impl<S, E> NodeArena<S, E> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a node, returning its index.
    pub fn push(&mut self, node: SearchNode<S, E>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Look up a node by index.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this arena's `push`.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S, E> {
        &self.nodes[id.0]
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
