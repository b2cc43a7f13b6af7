//! Text narrative with Root, Causal chain, and Symptom links sections.

use pathogen_core::knowledge::KnowledgeBase;
use pathogen_core::models::Selection;

use crate::engine::InferenceOutcome;

/// A narrative describing an inference outcome.
#[derive(Debug, Clone)]
pub struct PathogenesisNarrative {
    /// One-line summary with candidate and valid counts.
    pub summary: String,
    /// Sections, empty when no network was selected.
    pub sections: Vec<NarrativeSection>,
}

#[derive(Debug, Clone)]
pub struct NarrativeSection {
    pub title: String,
    pub entries: Vec<String>,
}

impl std::fmt::Display for PathogenesisNarrative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.summary)?;
        for section in &self.sections {
            writeln!(f, "{}:", section.title)?;
            for entry in &section.entries {
                writeln!(f, "  - {entry}")?;
            }
        }
        Ok(())
    }
}

/// Build the narrative, labelling atoms by display name.
pub fn build_narrative(kb: &KnowledgeBase, outcome: &InferenceOutcome) -> PathogenesisNarrative {
    let network = match &outcome.selection {
        Selection::Selected { network } => network,
        Selection::NoValidNetwork => {
            return PathogenesisNarrative {
                summary: format!(
                    "No valid network among {} candidate networks.",
                    outcome.candidates.len()
                ),
                sections: Vec::new(),
            };
        }
    };

    let root = network.root();
    let mut sections = vec![NarrativeSection {
        title: "Root".to_string(),
        entries: vec![format!("{} ({})", kb.display_name(root), kb.name(root))],
    }];

    let chain: Vec<String> = network
        .edges()
        .iter()
        .map(|edge| {
            format!(
                "{} -> {}",
                kb.display_name(edge.source),
                kb.display_name(edge.target)
            )
        })
        .collect();
    if !chain.is_empty() {
        sections.push(NarrativeSection {
            title: "Causal chain".to_string(),
            entries: chain,
        });
    }

    let links: Vec<String> = outcome
        .symptoms
        .iter()
        .filter_map(|symptom| {
            let atoms: Vec<&str> = kb
                .atoms_for(symptom)?
                .iter()
                .filter(|&&atom| network.vertices().contains(&atom))
                .map(|&atom| kb.display_name(atom))
                .collect();
            (!atoms.is_empty()).then(|| format!("{symptom}: {}", atoms.join(", ")))
        })
        .collect();
    if !links.is_empty() {
        sections.push(NarrativeSection {
            title: "Symptom links".to_string(),
            entries: links,
        });
    }

    PathogenesisNarrative {
        summary: format!(
            "Selected network #{} by {} ({} candidates, {} valid, {} vertices, {} edges).",
            network.index(),
            outcome.policy,
            outcome.candidates.len(),
            outcome.valid.len(),
            network.vertices().len(),
            network.edges().len()
        ),
        sections,
    }
}
