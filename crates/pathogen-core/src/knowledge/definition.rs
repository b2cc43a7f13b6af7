//! Serializable knowledge base documents (JSON or TOML).

use serde::{Deserialize, Serialize};

use crate::errors::KnowledgeError;

use super::{KnowledgeBase, KnowledgeBaseBuilder};

/// A knowledge base expressed by names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeBaseDefinition {
    pub atoms: Vec<AtomDefinition>,
    pub symptoms: Vec<SymptomDefinition>,
    pub links: Vec<LinkDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomDefinition {
    pub id: String,
    #[serde(default)]
    pub atoms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDefinition {
    pub source: String,
    pub target: String,
}

impl KnowledgeBaseDefinition {
    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self, KnowledgeError> {
        serde_json::from_str(json).map_err(|e| KnowledgeError::ParseError {
            message: e.to_string(),
        })
    }

    /// Parse a TOML document.
    pub fn from_toml(toml_str: &str) -> Result<Self, KnowledgeError> {
        toml::from_str(toml_str).map_err(|e| KnowledgeError::ParseError {
            message: e.to_string(),
        })
    }
}

impl KnowledgeBase {
    /// Build a knowledge base from a parsed definition.
    pub fn from_definition(definition: KnowledgeBaseDefinition) -> Result<Self, KnowledgeError> {
        let mut builder = KnowledgeBaseBuilder::new();
        for atom in definition.atoms {
            builder = match atom.label {
                Some(label) => builder.labeled_atom(atom.name, label),
                None => builder.atom(atom.name),
            };
        }
        for symptom in definition.symptoms {
            builder = builder.symptom(symptom.id, symptom.atoms);
        }
        for link in definition.links {
            builder = builder.link(link.source, link.target);
        }
        builder.build()
    }

    /// Export the knowledge base as a definition, atoms in universe order.
    pub fn to_definition(&self) -> KnowledgeBaseDefinition {
        let atoms = self
            .atoms
            .iter()
            .map(|info| AtomDefinition {
                name: info.name.clone(),
                label: info.label.clone(),
            })
            .collect();
        let symptoms = self
            .symptoms
            .iter()
            .map(|(id, atoms)| SymptomDefinition {
                id: id.clone(),
                atoms: atoms.iter().map(|&a| self.name(a).to_string()).collect(),
            })
            .collect();
        let links = self
            .links()
            .map(|edge| LinkDefinition {
                source: self.name(edge.source).to_string(),
                target: self.name(edge.target).to_string(),
            })
            .collect();
        KnowledgeBaseDefinition {
            atoms,
            symptoms,
            links,
        }
    }
}
