//! Final-network selection by a named policy.
//!
//! Each policy is a strict "better than" comparison, so the earliest network
//! in enumeration order wins ties.

pub mod fewest_vertices;
pub mod most_edges;

use pathogen_core::models::{Selection, SelectionPolicy, ValidatedNetwork};
use pathogen_observability::selection_span;
use tracing::info;

/// A named comparison: does `challenger` strictly beat `incumbent`?
pub struct PolicyEntry {
    pub name: &'static str,
    pub better_fn: fn(&ValidatedNetwork, &ValidatedNetwork) -> bool,
}

/// The comparison registered for a policy.
pub fn entry(policy: SelectionPolicy) -> PolicyEntry {
    match policy {
        SelectionPolicy::FewestVertices => PolicyEntry {
            name: fewest_vertices::NAME,
            better_fn: fewest_vertices::better,
        },
        SelectionPolicy::MostEdges => PolicyEntry {
            name: most_edges::NAME,
            better_fn: most_edges::better,
        },
    }
}

/// Position of the selected network in `valid`, `None` when `valid` is empty.
pub fn select_position(valid: &[ValidatedNetwork], policy: SelectionPolicy) -> Option<usize> {
    let better = entry(policy).better_fn;
    let mut best: Option<usize> = None;
    for (position, network) in valid.iter().enumerate() {
        match best {
            Some(current) if !better(network, &valid[current]) => {}
            _ => best = Some(position),
        }
    }
    best
}

/// Selects one network from the valid set.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkSelector {
    policy: SelectionPolicy,
}

impl NetworkSelector {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn select(&self, valid: &[ValidatedNetwork]) -> Selection {
        let _span = selection_span!(self.policy, valid.len()).entered();
        let selected = select_position(valid, self.policy).map(|position| valid[position].clone());
        match &selected {
            Some(network) => info!(
                index = network.index(),
                vertices = network.vertices().len(),
                edges = network.edges().len(),
                "final network selected"
            ),
            None => info!("no valid network"),
        }
        Selection::from(selected)
    }
}
