//! Test fixture loader for pathogen knowledge bases and golden scenarios.
//!
//! Provides typed deserialization of fixture JSON files and helper functions
//! for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").is_dir() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by file name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension()
                .is_some_and(|ext| ext == "json")
                .then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Raw JSON of the reference knowledge base (six atoms, six symptoms).
pub const REFERENCE_KB: &str = "knowledge/reference_kb.json";

/// A golden end-to-end scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    /// Knowledge base fixture path, relative to the fixtures root.
    pub knowledge_base: String,
    pub symptoms: Vec<String>,
    /// `reject_request`, `empty_contribution`, or `skip_symptom`.
    #[serde(default = "default_unknown_policy")]
    pub unknown_symptom_policy: String,
    /// `fewest_vertices` or `most_edges`.
    pub selection_policy: String,
    pub expected: GoldenExpectation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    pub candidate_count: usize,
    pub valid_count: usize,
    /// Atom names of the selected network; absent when nothing is selected.
    #[serde(default)]
    pub selected_vertices: Option<Vec<String>>,
    #[serde(default)]
    pub selected_root: Option<String>,
    #[serde(default)]
    pub selected_edge_count: Option<usize>,
}

fn default_unknown_policy() -> String {
    "reject_request".to_string()
}

/// Load every golden scenario under `golden/`.
pub fn load_golden_scenarios() -> Vec<GoldenScenario> {
    list_fixtures("golden")
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn reference_kb_exists_and_parses() {
        assert!(fixture_exists(REFERENCE_KB));
        let kb = load_fixture_value(REFERENCE_KB);
        assert_eq!(kb["atoms"].as_array().unwrap().len(), 6);
        assert_eq!(kb["symptoms"].as_array().unwrap().len(), 6);
        assert_eq!(kb["links"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn golden_scenarios_reference_existing_knowledge_bases() {
        let scenarios = load_golden_scenarios();
        assert!(!scenarios.is_empty());
        for scenario in &scenarios {
            assert!(
                fixture_exists(&scenario.knowledge_base),
                "{}: missing {}",
                scenario.name,
                scenario.knowledge_base
            );
        }
    }
}
