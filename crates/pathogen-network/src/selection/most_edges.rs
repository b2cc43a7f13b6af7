//! Richest causal structure: the largest edge set.

use pathogen_core::models::ValidatedNetwork;

pub const NAME: &str = "most_edges";

pub fn better(challenger: &ValidatedNetwork, incumbent: &ValidatedNetwork) -> bool {
    challenger.edges().len() > incumbent.edges().len()
}
