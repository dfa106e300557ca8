//! Degrees Search: generic unweighted shortest-path search over an
//! implicit, lazily expanded graph.
//!
//! This crate is domain-agnostic: states and edge labels are opaque,
//! comparable, hashable tokens. The movie/person interpretation lives in
//! `degrees-data`, which implements [`GraphProvider`] on top of CSV data.
//!
//! # Key types
//!
//! - [`SearchNode`] — immutable state node with an arena parent pointer
//! - [`Action`] — one traversed edge: (edge label, resulting state)
//! - [`Frontier`] — ordered collection of pending nodes, FIFO or LIFO
//! - [`GraphProvider`] — the one capability consumed from the environment
//! - [`shortest_path`] — breadth-first search with duplicate suppression
//!
//! [`GraphProvider`]: contract::GraphProvider
//! [`SearchNode`]: node::SearchNode
//! [`Action`]: node::Action
//! [`Frontier`]: frontier::Frontier
//! [`shortest_path`]: search::shortest_path

#![forbid(unsafe_code)]

pub mod adjacency;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod search;
