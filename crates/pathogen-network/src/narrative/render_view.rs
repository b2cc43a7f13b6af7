//! Read-only projection of a selected network for diagram renderers.
//!
//! Symptom nodes link only to atoms inside the network; symptoms the
//! knowledge base does not know are left out. Node ids carry a `symptom:` or
//! `atom:` prefix so a symptom and an atom may share a name.

use serde::{Deserialize, Serialize};

use pathogen_core::knowledge::KnowledgeBase;
use pathogen_core::models::ValidatedNetwork;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Symptom,
    Atom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Symptom → atom it implicates.
    Manifests,
    /// Atom → atom it causes.
    Causes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub is_root: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderLink {
    pub from: String,
    pub to: String,
    pub kind: LinkKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderView {
    pub nodes: Vec<RenderNode>,
    pub links: Vec<RenderLink>,
    /// Node id of the root atom.
    pub root: String,
}

pub fn symptom_id(symptom: &str) -> String {
    format!("symptom:{symptom}")
}

pub fn atom_id(name: &str) -> String {
    format!("atom:{name}")
}

impl RenderView {
    pub fn build<S: AsRef<str>>(
        kb: &KnowledgeBase,
        network: &ValidatedNetwork,
        symptoms: &[S],
    ) -> Self {
        let mut nodes = Vec::new();
        let mut links = Vec::new();

        for symptom in symptoms {
            let symptom = symptom.as_ref();
            let Some(atoms) = kb.atoms_for(symptom) else {
                continue;
            };
            let id = symptom_id(symptom);
            if nodes.iter().any(|n: &RenderNode| n.id == id) {
                continue;
            }
            for &atom in atoms.iter().filter(|a| network.vertices().contains(*a)) {
                links.push(RenderLink {
                    from: id.clone(),
                    to: atom_id(kb.name(atom)),
                    kind: LinkKind::Manifests,
                });
            }
            nodes.push(RenderNode {
                id,
                label: symptom.to_string(),
                kind: NodeKind::Symptom,
                is_root: false,
            });
        }

        for &atom in network.vertices() {
            nodes.push(RenderNode {
                id: atom_id(kb.name(atom)),
                label: kb.display_name(atom).to_string(),
                kind: NodeKind::Atom,
                is_root: atom == network.root(),
            });
        }

        for edge in network.edges() {
            links.push(RenderLink {
                from: atom_id(kb.name(edge.source)),
                to: atom_id(kb.name(edge.target)),
                kind: LinkKind::Causes,
            });
        }

        Self {
            nodes,
            links,
            root: atom_id(kb.name(network.root())),
        }
    }

    /// Serialize for a renderer that consumes JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
