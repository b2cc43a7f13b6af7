//! Explicit policies chosen at the call boundary or in config.

use serde::{Deserialize, Serialize};

/// Which valid network becomes the final answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Smallest vertex set: the most parsimonious explanation.
    #[default]
    FewestVertices,
    /// Largest edge set: the richest causal structure.
    MostEdges,
}

impl SelectionPolicy {
    pub const ALL: [SelectionPolicy; 2] = [Self::FewestVertices, Self::MostEdges];

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "fewest_vertices" => Some(Self::FewestVertices),
            "most_edges" => Some(Self::MostEdges),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FewestVertices => "fewest_vertices",
            Self::MostEdges => "most_edges",
        }
    }
}

impl std::fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do with a symptom the knowledge base does not map.
///
/// `EmptyContribution` makes the whole request produce zero candidates, since
/// one empty factor empties the Cartesian product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSymptomPolicy {
    /// Fail the request with `PathogenError::UnknownSymptom`.
    #[default]
    RejectRequest,
    /// Treat the symptom as implicating no atoms.
    EmptyContribution,
    /// Drop the symptom from the request.
    SkipSymptom,
}

impl UnknownSymptomPolicy {
    pub const ALL: [UnknownSymptomPolicy; 3] = [
        Self::RejectRequest,
        Self::EmptyContribution,
        Self::SkipSymptom,
    ];

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "reject_request" => Some(Self::RejectRequest),
            "empty_contribution" => Some(Self::EmptyContribution),
            "skip_symptom" => Some(Self::SkipSymptom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RejectRequest => "reject_request",
            Self::EmptyContribution => "empty_contribution",
            Self::SkipSymptom => "skip_symptom",
        }
    }
}

impl std::fmt::Display for UnknownSymptomPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
