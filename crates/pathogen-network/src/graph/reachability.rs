//! Forward reachability: "what does this atom eventually cause?"

use std::collections::BTreeSet;

use petgraph::visit::Bfs;

use pathogen_core::knowledge::Atom;

use super::AtomGraph;

/// Every vertex reachable from `start` by following edges, including `start`.
/// Empty when `start` is not in the graph.
pub fn closure(graph: &AtomGraph, start: Atom) -> BTreeSet<Atom> {
    let mut reached = BTreeSet::new();
    if !graph.contains_node(start) {
        return reached;
    }
    let mut bfs = Bfs::new(graph, start);
    while let Some(node) = bfs.next(graph) {
        reached.insert(node);
    }
    reached
}

/// Whether `start` reaches every vertex of the graph.
pub fn reaches_all(graph: &AtomGraph, start: Atom) -> bool {
    closure(graph, start).len() == graph.node_count()
}
