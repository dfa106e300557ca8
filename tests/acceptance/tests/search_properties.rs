//! Engine-level acceptance: shortest-length agreement with a reference
//! BFS, termination on cycles and disconnection, deterministic lengths,
//! and frontier policy conformance.

use acceptance_tests::{assert_valid_walk, grid_graph, grid_states, reference_distance};
use degrees_search::adjacency::AdjacencyGraph;
use degrees_search::frontier::{Frontier, RemovalOrder};
use degrees_search::node::{Action, NodeArena, SearchNode};
use degrees_search::search::{shortest_path, SearchLimits, SearchOutcome};

#[test]
fn grid_lengths_match_reference_bfs_for_all_pairs() {
    let graph = grid_graph(4, 3);
    let states = grid_states(4, 3);

    for source in &states {
        for target in &states {
            let expected = reference_distance(&graph, source, target)
                .expect("a grid is fully connected");
            let result = shortest_path(&graph, source, target, SearchLimits::default()).unwrap();
            let path = result
                .path()
                .unwrap_or_else(|| panic!("{source:?} → {target:?} must be connected"));
            assert_eq!(
                path.len(),
                expected,
                "wrong degree count for {source:?} → {target:?}"
            );
            assert_valid_walk(&graph, source, target, path);
        }
    }
}

#[test]
fn repeated_searches_yield_identical_lengths() {
    let graph = grid_graph(5, 5);
    let source = (0, 0);
    let target = (4, 4);

    let first = shortest_path(&graph, &source, &target, SearchLimits::default())
        .unwrap()
        .degrees();
    for _ in 0..10 {
        let again = shortest_path(&graph, &source, &target, SearchLimits::default())
            .unwrap()
            .degrees();
        assert_eq!(first, again, "degree count must be deterministic");
    }
}

#[test]
fn disconnected_components_report_not_connected() {
    let mut graph: AdjacencyGraph<&str, &str> = AdjacencyGraph::new();
    graph.add_edge("a", "b", "m1");
    graph.add_edge("c", "d", "m2");

    let result = shortest_path(&graph, &"a", &"d", SearchLimits::default()).unwrap();
    assert_eq!(result.outcome, SearchOutcome::NotConnected);
}

#[test]
fn four_cycle_does_not_expand_forever() {
    let mut graph: AdjacencyGraph<&str, &str> = AdjacencyGraph::new();
    graph.add_edge("a", "b", "m1");
    graph.add_edge("b", "c", "m2");
    graph.add_edge("c", "d", "m3");
    graph.add_edge("d", "a", "m4");

    let result = shortest_path(&graph, &"a", &"c", SearchLimits::default()).unwrap();
    assert_eq!(result.degrees(), Some(2));
    // 4 states: bounded work, no re-expansion.
    assert!(result.stats.expansions <= 4);
}

#[test]
fn limit_reached_is_distinct_from_not_connected() {
    let graph = grid_graph(6, 6);
    let limits = SearchLimits {
        max_expansions: Some(3),
    };
    let result = shortest_path(&graph, &(0, 0), &(5, 5), limits).unwrap();
    assert_eq!(
        result.outcome,
        SearchOutcome::LimitReached,
        "a capped search must give up, never claim disconnection"
    );
}

#[test]
fn fifo_frontier_yields_insertion_order() {
    let mut arena: NodeArena<&str, &str> = NodeArena::new();
    let ids: Vec<_> = ["a", "b", "c"]
        .iter()
        .map(|s| arena.push(SearchNode::root(*s)))
        .collect();

    let mut frontier = Frontier::new(RemovalOrder::Fifo);
    for (&id, &state) in ids.iter().zip(["a", "b", "c"].iter()) {
        frontier.add(id, state);
    }
    let removed: Vec<_> = (0..3).map(|_| frontier.remove().unwrap()).collect();
    assert_eq!(removed, ids);
}

#[test]
fn lifo_frontier_yields_reverse_insertion_order() {
    let mut arena: NodeArena<&str, &str> = NodeArena::new();
    let ids: Vec<_> = ["a", "b", "c"]
        .iter()
        .map(|s| arena.push(SearchNode::root(*s)))
        .collect();

    let mut frontier = Frontier::new(RemovalOrder::Lifo);
    for (&id, &state) in ids.iter().zip(["a", "b", "c"].iter()) {
        frontier.add(id, state);
    }
    let removed: Vec<_> = (0..3).map(|_| frontier.remove().unwrap()).collect();
    let expected: Vec<_> = ids.iter().rev().copied().collect();
    assert_eq!(removed, expected);
}

#[test]
fn paths_serialize_for_fixture_snapshots() {
    let mut graph: AdjacencyGraph<String, String> = AdjacencyGraph::new();
    graph.add_edge("p1".into(), "p2".into(), "mx".into());

    let result = shortest_path(
        &graph,
        &"p1".to_string(),
        &"p2".to_string(),
        SearchLimits::default(),
    )
    .unwrap();
    let path = result.path().unwrap().to_vec();

    let json = serde_json::to_string(&path).unwrap();
    let back: Vec<Action<String, String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(path, back);
}
