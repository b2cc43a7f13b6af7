//! petgraph view of a candidate network plus the screening primitives:
//! in-degree counting, forward closure, and cycle search.

pub mod cycle;
pub mod in_degree;
pub mod reachability;

use petgraph::graphmap::DiGraphMap;

use pathogen_core::knowledge::Atom;
use pathogen_core::models::CandidateNetwork;

/// Directed graph over atoms. Node and edge iteration follow insertion order,
/// which [`build`] makes ascending.
pub type AtomGraph = DiGraphMap<Atom, ()>;

/// Build the graph of a candidate: vertices ascending, edges in (source, target) order.
pub fn build(network: &CandidateNetwork) -> AtomGraph {
    let mut graph = AtomGraph::with_capacity(network.vertex_count(), network.edge_count());
    for &vertex in network.vertices() {
        graph.add_node(vertex);
    }
    for edge in network.edges() {
        graph.add_edge(edge.source, edge.target, ());
    }
    graph
}
