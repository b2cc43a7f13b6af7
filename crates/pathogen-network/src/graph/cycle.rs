//! Deterministic cycle search: depth-first, tracking the active path.
//!
//! Start vertices and successors are visited in graph insertion order. The
//! first back-edge found closes the reported cycle, which starts at the
//! back-edge target.
//!
//! [`find_source_cycle`] restricts the search to the strongly connected
//! component that no other component reaches, so the reported cycle lies
//! upstream of every vertex whenever any vertex reaches them all.

use std::collections::{BTreeSet, HashMap};

use pathogen_core::knowledge::Atom;
use petgraph::algo::tarjan_scc;
use petgraph::Direction;

use super::AtomGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    OnPath,
    Finished,
}

struct Frame {
    node: Atom,
    successors: Vec<Atom>,
    cursor: usize,
}

impl Frame {
    fn new(graph: &AtomGraph, node: Atom) -> Self {
        Self {
            node,
            successors: graph.neighbors(node).collect(),
            cursor: 0,
        }
    }

    fn next_successor(&mut self) -> Option<Atom> {
        let next = self.successors.get(self.cursor).copied();
        self.cursor += 1;
        next
    }
}

/// Find one cycle, returned as its vertices in edge order.
///
/// For a cycle `[v0, v1, .., vk]` the graph has edges `v0→v1`, .., `vk→v0`.
pub fn find_cycle(graph: &AtomGraph) -> Option<Vec<Atom>> {
    let mut marks: HashMap<Atom, Mark> = HashMap::with_capacity(graph.node_count());

    for start in graph.nodes() {
        if marks.contains_key(&start) {
            continue;
        }
        marks.insert(start, Mark::OnPath);
        let mut path = vec![Frame::new(graph, start)];

        while let Some(top) = path.last_mut() {
            let node = top.node;
            match top.next_successor() {
                Some(next) => match marks.get(&next) {
                    Some(Mark::OnPath) => {
                        let from = path.iter().position(|frame| frame.node == next)?;
                        return Some(path[from..].iter().map(|frame| frame.node).collect());
                    }
                    Some(Mark::Finished) => {}
                    None => {
                        marks.insert(next, Mark::OnPath);
                        path.push(Frame::new(graph, next));
                    }
                },
                None => {
                    marks.insert(node, Mark::Finished);
                    path.pop();
                }
            }
        }
    }

    None
}

/// Find a cycle inside a source component: a strongly connected component
/// with no edge entering it from outside.
///
/// Among several source components the one holding the smallest atom is
/// searched. Returns `None` when that component is a single vertex.
pub fn find_source_cycle(graph: &AtomGraph) -> Option<Vec<Atom>> {
    let components = tarjan_scc(graph);
    let mut component_of: HashMap<Atom, usize> = HashMap::with_capacity(graph.node_count());
    for (i, component) in components.iter().enumerate() {
        for &atom in component {
            component_of.insert(atom, i);
        }
    }

    let source = components
        .iter()
        .enumerate()
        .filter(|(i, component)| {
            component.iter().all(|&atom| {
                graph
                    .neighbors_directed(atom, Direction::Incoming)
                    .all(|pred| component_of.get(&pred) == Some(i))
            })
        })
        .filter_map(|(_, component)| component.iter().min().map(|&min| (min, component)))
        .min_by_key(|(min, _)| *min)
        .map(|(_, component)| component)?;

    let members: BTreeSet<Atom> = source.iter().copied().collect();
    let mut inner = AtomGraph::with_capacity(members.len(), members.len());
    for &atom in &members {
        inner.add_node(atom);
    }
    for &atom in &members {
        for next in graph.neighbors(atom).filter(|next| members.contains(next)) {
            inner.add_edge(atom, next, ());
        }
    }
    find_cycle(&inner)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pathogen_core::knowledge::KnowledgeBase;
    use pathogen_core::models::CandidateNetwork;

    use super::*;
    use crate::graph;

    fn ring() -> (KnowledgeBase, Vec<Atom>) {
        let kb = KnowledgeBase::builder()
            .atom("a")
            .atom("b")
            .atom("c")
            .atom("d")
            .link("a", "b")
            .link("b", "c")
            .link("c", "b")
            .link("c", "d")
            .build()
            .unwrap();
        let atoms = kb.atoms().collect();
        (kb, atoms)
    }

    #[test]
    fn reports_cycle_from_back_edge_target() {
        let (kb, atoms) = ring();
        let all: BTreeSet<Atom> = atoms.iter().copied().collect();
        let g = graph::build(&CandidateNetwork::induced(0, all, &kb));

        let cycle = find_cycle(&g).unwrap();
        assert_eq!(cycle, vec![atoms[1], atoms[2]]);
    }

    #[test]
    fn source_cycle_skips_downstream_component() {
        // a <-> b downstream of c <-> d.
        let kb = KnowledgeBase::builder()
            .atom("a")
            .atom("b")
            .atom("c")
            .atom("d")
            .link("a", "b")
            .link("b", "a")
            .link("c", "d")
            .link("d", "c")
            .link("c", "a")
            .build()
            .unwrap();
        let atoms: Vec<Atom> = kb.atoms().collect();
        let all: BTreeSet<Atom> = atoms.iter().copied().collect();
        let g = graph::build(&CandidateNetwork::induced(0, all, &kb));

        assert_eq!(find_cycle(&g), Some(vec![atoms[0], atoms[1]]));
        assert_eq!(find_source_cycle(&g), Some(vec![atoms[2], atoms[3]]));
    }

    #[test]
    fn acyclic_graph_has_no_cycle() {
        let (kb, atoms) = ring();
        let chain = BTreeSet::from([atoms[0], atoms[1], atoms[3]]);
        let g = graph::build(&CandidateNetwork::induced(0, chain, &kb));
        assert!(find_cycle(&g).is_none());
        assert!(find_source_cycle(&g).is_none());
    }
}
