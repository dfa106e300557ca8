//! Graph generators shared by the benches.

#![forbid(unsafe_code)]

use degrees_search::adjacency::AdjacencyGraph;

/// A w×h grid of `(x, y)` states with 4-neighbor edges. Corner-to-corner
/// distance is `w + h - 2`, with many equal-length alternatives — a
/// worst-ish case for duplicate suppression.
#[must_use]
pub fn grid(width: u32, height: u32) -> AdjacencyGraph<(u32, u32), u32> {
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

/// A single chain 0—1—…—n: deepest possible search per state count.
#[must_use]
pub fn chain(n: u32) -> AdjacencyGraph<u32, u32> {
    let mut graph = AdjacencyGraph::new();
    for i in 0..n {
        graph.add_edge(i, i + 1, i);
    }
    graph
}
