//! Property-based tests for generation, screening, and selection over random
//! knowledge bases.

use std::collections::BTreeSet;

use pathogen_core::knowledge::KnowledgeBase;
use pathogen_core::models::{RootKind, SelectionPolicy};
use pathogen_network::generation::NetworkGenerator;
use pathogen_network::graph::{self, in_degree, reachability};
use pathogen_network::selection;
use pathogen_network::validation::{self, NetworkValidator, RejectReason, Verdict};
use petgraph::algo::tarjan_scc;
use proptest::prelude::*;

const ATOMS: usize = 6;

#[derive(Debug, Clone)]
struct RandomKb {
    links: Vec<(usize, usize)>,
    symptoms: Vec<BTreeSet<usize>>,
}

impl RandomKb {
    fn build(&self) -> KnowledgeBase {
        let mut builder = KnowledgeBase::builder();
        for i in 0..ATOMS {
            builder = builder.atom(format!("a{i}"));
        }
        for (i, atoms) in self.symptoms.iter().enumerate() {
            builder = builder.symptom(format!("s{i}"), atoms.iter().map(|a| format!("a{a}")));
        }
        let mut seen = BTreeSet::new();
        for &(s, t) in &self.links {
            if s != t && seen.insert((s, t)) {
                builder = builder.link(format!("a{s}"), format!("a{t}"));
            }
        }
        builder.build().unwrap()
    }

    fn symptom_ids(&self) -> Vec<String> {
        (0..self.symptoms.len()).map(|i| format!("s{i}")).collect()
    }
}

fn random_kb() -> impl Strategy<Value = RandomKb> {
    (
        prop::collection::vec((0..ATOMS, 0..ATOMS), 0..ATOMS * 2),
        prop::collection::vec(prop::collection::btree_set(0..ATOMS, 0..4), 0..5),
    )
        .prop_map(|(links, symptoms)| RandomKb { links, symptoms })
}

proptest! {
    #[test]
    fn prop_count_is_product_of_set_sizes(input in random_kb()) {
        let kb = input.build();
        let candidates = NetworkGenerator::new(&kb).generate(&input.symptom_ids()).unwrap();
        let expected = if input.symptoms.is_empty() {
            0
        } else {
            input.symptoms.iter().map(BTreeSet::len).product()
        };
        prop_assert_eq!(candidates.len(), expected);
    }

    #[test]
    fn prop_edges_are_induced_links(input in random_kb()) {
        let kb = input.build();
        for candidate in NetworkGenerator::new(&kb).generate(&input.symptom_ids()).unwrap() {
            for edge in candidate.edges() {
                prop_assert!(candidate.contains(edge.source));
                prop_assert!(candidate.contains(edge.target));
                prop_assert_ne!(edge.source, edge.target);
            }
            let induced = kb.restrict_links(candidate.vertices());
            prop_assert_eq!(candidate.edges(), induced.as_slice());
        }
    }

    #[test]
    fn prop_generation_is_deterministic(input in random_kb()) {
        let kb = input.build();
        let generator = NetworkGenerator::new(&kb);
        let first = generator.generate(&input.symptom_ids()).unwrap();
        let second = generator.generate(&input.symptom_ids()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_verdicts_follow_source_count(input in random_kb()) {
        let kb = input.build();
        for candidate in NetworkGenerator::new(&kb).generate(&input.symptom_ids()).unwrap() {
            let degrees = in_degree::in_degrees(&candidate);
            let sources = in_degree::sources(&degrees);
            let graph = graph::build(&candidate);
            let verdict = validation::validate(&candidate).unwrap();

            if sources.len() >= 2 {
                prop_assert_eq!(
                    verdict,
                    Verdict::Rejected(RejectReason::MultipleSources { count: sources.len() })
                );
                continue;
            }

            match verdict {
                Verdict::Accepted(network) => {
                    let reached = reachability::closure(&graph, network.root());
                    prop_assert_eq!(reached.len(), candidate.vertex_count());
                    match network.root_kind() {
                        RootKind::SoleSource => {
                            prop_assert_eq!(sources.as_slice(), &[network.root()]);
                        }
                        RootKind::CycleMember => {
                            prop_assert!(sources.is_empty());
                            let on_cycle = tarjan_scc(&graph)
                                .iter()
                                .any(|scc| scc.len() > 1 && scc.contains(&network.root()));
                            prop_assert!(on_cycle);
                        }
                    }
                    prop_assert_eq!(network.network(), &candidate);
                }
                Verdict::Rejected(RejectReason::Unreachable { root, unreached }) => {
                    let reached = reachability::closure(&graph, root);
                    prop_assert!(unreached > 0);
                    prop_assert_eq!(reached.len() + unreached, candidate.vertex_count());
                    // No vertex, on a cycle or not, reaches every vertex.
                    for &vertex in candidate.vertices() {
                        prop_assert!(!reachability::reaches_all(&graph, vertex));
                    }
                }
                Verdict::Rejected(other) => {
                    prop_assert!(false, "unexpected rejection {:?}", other);
                }
            }
        }
    }

    #[test]
    fn prop_parallel_screening_matches_sequential(input in random_kb()) {
        let kb = input.build();
        let candidates = NetworkGenerator::new(&kb).generate(&input.symptom_ids()).unwrap();
        let sequential = NetworkValidator::new().screen(&candidates).unwrap();
        let parallel = NetworkValidator::new().parallel(true).screen(&candidates).unwrap();
        prop_assert_eq!(sequential, parallel);
    }

    #[test]
    fn prop_selection_is_first_optimum(input in random_kb()) {
        let kb = input.build();
        let candidates = NetworkGenerator::new(&kb).generate(&input.symptom_ids()).unwrap();
        let valid = NetworkValidator::new().screen(&candidates).unwrap().valid;

        let fewest = selection::select_position(&valid, SelectionPolicy::FewestVertices);
        let most = selection::select_position(&valid, SelectionPolicy::MostEdges);
        if valid.is_empty() {
            prop_assert!(fewest.is_none() && most.is_none());
            return Ok(());
        }

        let min_vertices = valid.iter().map(|n| n.vertices().len()).min().unwrap();
        let first_min = valid.iter().position(|n| n.vertices().len() == min_vertices);
        prop_assert_eq!(fewest, first_min);

        let max_edges = valid.iter().map(|n| n.edges().len()).max().unwrap();
        let first_max = valid.iter().position(|n| n.edges().len() == max_edges);
        prop_assert_eq!(most, first_max);
    }
}
