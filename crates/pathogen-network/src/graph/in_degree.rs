//! In-degree via an edge-target counter.

use std::collections::BTreeMap;

use pathogen_core::knowledge::Atom;
use pathogen_core::models::CandidateNetwork;

/// In-degree of every vertex, counting edges whose target is that vertex.
pub fn in_degrees(network: &CandidateNetwork) -> BTreeMap<Atom, usize> {
    let mut degrees: BTreeMap<Atom, usize> =
        network.vertices().iter().map(|&v| (v, 0)).collect();
    for edge in network.edges() {
        *degrees.entry(edge.target).or_insert(0) += 1;
    }
    degrees
}

/// Zero-in-degree vertices, ascending.
pub fn sources(degrees: &BTreeMap<Atom, usize>) -> Vec<Atom> {
    degrees
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(&vertex, _)| vertex)
        .collect()
}
