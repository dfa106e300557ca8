//! Shared fixtures for the acceptance tests: generated graphs, an
//! independent reference BFS to check path lengths against, and a CSV
//! dataset writer.

#![forbid(unsafe_code)]

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::path::Path;

use degrees_search::adjacency::AdjacencyGraph;
use degrees_search::contract::GraphProvider;

/// A w×h grid of states `(x, y)` with 4-neighbor edges, each edge labeled
/// by a distinct number. True distance between corners is known in closed
/// form, and the graph is full of equal-length alternatives.
#[must_use]
pub fn grid_graph(width: u32, height: u32) -> AdjacencyGraph<(u32, u32), u32> {
    let mut graph = AdjacencyGraph::new();
    let mut label = 0u32;
    for x in 0..width {
        for y in 0..height {
            if x + 1 < width {
                graph.add_edge((x, y), (x + 1, y), label);
                label += 1;
            }
            if y + 1 < height {
                graph.add_edge((x, y), (x, y + 1), label);
                label += 1;
            }
        }
    }
    graph
}

/// Distance-only breadth-first search, written independently of the
/// engine under test: plain `VecDeque` plus a distance map, no frontier
/// type, no node arena. `None` when unreachable.
///
/// # Panics
///
/// Panics if the provider errors on a discovered state (fixture graphs
/// never do).
#[must_use]
pub fn reference_distance<S, E, G>(provider: &G, source: &S, target: &S) -> Option<usize>
where
    S: Clone + Eq + Hash,
    E: Clone,
    G: GraphProvider<S, E>,
{
    let mut distance: HashMap<S, usize> = HashMap::new();
    let mut queue: VecDeque<S> = VecDeque::new();
    distance.insert(source.clone(), 0);
    queue.push_back(source.clone());

    while let Some(state) = queue.pop_front() {
        let d = distance[&state];
        if state == *target {
            return Some(d);
        }
        for action in provider.neighbors(&state).expect("fixture state known") {
            if !distance.contains_key(&action.state) {
                distance.insert(action.state.clone(), d + 1);
                queue.push_back(action.state);
            }
        }
    }
    None
}

/// Every state of a grid graph, for exhaustive pair checks.
#[must_use]
pub fn grid_states(width: u32, height: u32) -> Vec<(u32, u32)> {
    let mut states = Vec::new();
    for x in 0..width {
        for y in 0..height {
            states.push((x, y));
        }
    }
    states
}

/// Verify a path is well-formed against the provider: every step is a
/// real edge from the previous state, and the walk ends at `target`.
///
/// # Panics
///
/// Panics (with a test-friendly message) if the path is not a valid walk.
pub fn assert_valid_walk<S, E, G>(
    provider: &G,
    source: &S,
    target: &S,
    path: &[degrees_search::node::Action<S, E>],
) where
    S: Clone + Eq + Hash + std::fmt::Debug,
    E: Clone + PartialEq + std::fmt::Debug,
    G: GraphProvider<S, E>,
{
    let mut at = source.clone();
    for step in path {
        let neighbors = provider.neighbors(&at).expect("walk state known");
        assert!(
            neighbors
                .iter()
                .any(|a| a.edge == step.edge && a.state == step.state),
            "step {step:?} is not an edge out of {at:?}"
        );
        at = step.state.clone();
    }
    assert_eq!(at, *target, "walk must end at the target");
}

/// Write the canonical two-movie scenario dataset into `dir`:
/// person1—(movieX)—person2, person2—(movieY)—person3, person4 isolated,
/// plus two people sharing the name "Pat Morita".
///
/// # Panics
///
/// Panics if the fixture files cannot be written.
pub fn write_scenario_dataset(dir: &Path) {
    std::fs::write(
        dir.join("people.csv"),
        "id,name,birth\n\
         1,Person One,1950\n\
         2,Person Two,1960\n\
         3,Person Three,1970\n\
         4,Person Four,1980\n\
         5,Pat Morita,1932\n\
         6,Pat Morita,1990\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("movies.csv"),
        "id,title,year\n\
         x,Movie X,2000\n\
         y,Movie Y,2010\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("stars.csv"),
        "person_id,movie_id\n\
         1,x\n\
         2,x\n\
         2,y\n\
         3,y\n",
    )
    .unwrap();
}
