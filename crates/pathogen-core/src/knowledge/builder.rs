//! Incremental construction of a [`KnowledgeBase`] with reference checks.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::constants::MAX_ATOMS;
use crate::errors::KnowledgeError;

use super::{Atom, AtomInfo, KnowledgeBase};

/// Collects atoms, symptoms, and causal links by name, then resolves and
/// validates them in [`build`](Self::build).
#[derive(Debug, Default, Clone)]
pub struct KnowledgeBaseBuilder {
    atoms: Vec<AtomInfo>,
    symptoms: Vec<(String, Vec<String>)>,
    links: Vec<(String, String)>,
}

impl KnowledgeBaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an atom. Atoms are ordered by insertion.
    pub fn atom(mut self, name: impl Into<String>) -> Self {
        self.atoms.push(AtomInfo {
            name: name.into(),
            label: None,
        });
        self
    }

    /// Add an atom with a human-readable label.
    pub fn labeled_atom(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.atoms.push(AtomInfo {
            name: name.into(),
            label: Some(label.into()),
        });
        self
    }

    /// Map a symptom to the atoms it implicates. An empty list is allowed.
    pub fn symptom<I, S>(mut self, symptom: impl Into<String>, atoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms
            .push((symptom.into(), atoms.into_iter().map(Into::into).collect()));
        self
    }

    /// Declare that `source` causally produces `target`.
    pub fn link(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.links.push((source.into(), target.into()));
        self
    }

    /// Resolve names and validate the universe.
    pub fn build(self) -> Result<KnowledgeBase, KnowledgeError> {
        if self.atoms.len() > MAX_ATOMS {
            return Err(KnowledgeError::TooManyAtoms {
                count: self.atoms.len(),
                max: MAX_ATOMS,
            });
        }

        let mut by_name = HashMap::with_capacity(self.atoms.len());
        for (ordinal, info) in self.atoms.iter().enumerate() {
            let atom = Atom::new(ordinal as u16);
            if by_name.insert(info.name.clone(), atom).is_some() {
                return Err(KnowledgeError::DuplicateAtom {
                    name: info.name.clone(),
                });
            }
        }

        let resolve = |name: &str, context: &str| -> Result<Atom, KnowledgeError> {
            by_name
                .get(name)
                .copied()
                .ok_or_else(|| KnowledgeError::UnknownAtom {
                    name: name.to_string(),
                    context: context.to_string(),
                })
        };

        let mut symptoms = BTreeMap::new();
        for (symptom, names) in &self.symptoms {
            let context = format!("symptom {symptom}");
            let atoms = names
                .iter()
                .map(|name| resolve(name, &context))
                .collect::<Result<BTreeSet<_>, _>>()?;
            if symptoms.insert(symptom.clone(), atoms).is_some() {
                return Err(KnowledgeError::DuplicateSymptom {
                    symptom: symptom.clone(),
                });
            }
        }

        let mut adjacency: BTreeMap<Atom, BTreeSet<Atom>> = BTreeMap::new();
        for (source, target) in &self.links {
            let context = format!("link {source} -> {target}");
            let from = resolve(source, &context)?;
            let to = resolve(target, &context)?;
            if from == to {
                return Err(KnowledgeError::SelfLoop {
                    name: source.clone(),
                });
            }
            adjacency.entry(from).or_default().insert(to);
        }

        Ok(KnowledgeBase {
            atoms: self.atoms,
            by_name,
            symptoms,
            adjacency,
        })
    }
}
