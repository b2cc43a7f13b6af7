//! Most parsimonious explanation: the smallest vertex set.

use pathogen_core::models::ValidatedNetwork;

pub const NAME: &str = "fewest_vertices";

pub fn better(challenger: &ValidatedNetwork, incumbent: &ValidatedNetwork) -> bool {
    challenger.vertices().len() < incumbent.vertices().len()
}
