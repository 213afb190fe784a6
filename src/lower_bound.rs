//! Lower bound on the number of nodes still needed to cover the remaining graph.

use crate::graph::DyUGraph;

/// Returns `ceil(|E| / max_degree)`, or `0` if `graph` has no edges.
///
/// A single node covers at most `max_degree` edges, so at least this many further nodes are
/// needed. The bound is cheap but weak, dense graphs with uneven degrees are hardly pruned.
pub fn degree_bound(graph: &DyUGraph) -> usize {
    let num_edges = graph.num_edges();
    if num_edges == 0 {
        return 0
    }
    let max_degree = graph.max_degree();
    (num_edges + max_degree - 1) / max_degree
}
