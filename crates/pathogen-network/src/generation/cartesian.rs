//! Odometer enumeration of the Cartesian product of atom choices.
//!
//! The last factor varies fastest; each factor is walked in ascending atom
//! order. An empty factor list or any empty factor yields nothing.

use std::collections::BTreeSet;

use pathogen_core::knowledge::{Atom, KnowledgeBase};
use pathogen_core::models::CandidateNetwork;

/// Iterator over candidate networks, one per product tuple.
pub struct CandidateIter<'a> {
    kb: &'a KnowledgeBase,
    factors: &'a [Vec<Atom>],
    odometer: Vec<usize>,
    index: usize,
    exhausted: bool,
}

impl<'a> CandidateIter<'a> {
    pub fn new(kb: &'a KnowledgeBase, factors: &'a [Vec<Atom>]) -> Self {
        let exhausted = factors.is_empty() || factors.iter().any(Vec::is_empty);
        Self {
            kb,
            factors,
            odometer: vec![0; factors.len()],
            index: 0,
            exhausted,
        }
    }

    /// The atom chosen for each symptom by the current tuple.
    fn current_tuple(&self) -> impl Iterator<Item = Atom> + '_ {
        self.odometer
            .iter()
            .zip(self.factors)
            .map(|(&position, factor)| factor[position])
    }

    /// Advance to the next tuple; marks the iterator exhausted after the last.
    fn advance(&mut self) {
        for slot in (0..self.odometer.len()).rev() {
            self.odometer[slot] += 1;
            if self.odometer[slot] < self.factors[slot].len() {
                return;
            }
            self.odometer[slot] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for CandidateIter<'_> {
    type Item = CandidateNetwork;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let vertices: BTreeSet<Atom> = self.current_tuple().collect();
        let candidate = CandidateNetwork::induced(self.index, vertices, self.kb);
        self.index += 1;
        self.advance();
        Some(candidate)
    }
}
