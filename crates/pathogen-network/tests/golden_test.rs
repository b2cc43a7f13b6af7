//! Golden scenarios: every fixture under `test-fixtures/golden` runs through
//! the engine and must reproduce its recorded counts and selection.

use std::sync::Arc;

use pathogen_core::config::InferenceConfig;
use pathogen_core::knowledge::{KnowledgeBase, KnowledgeBaseDefinition};
use pathogen_core::models::{SelectionPolicy, UnknownSymptomPolicy};
use pathogen_network::PathogenesisEngine;
use test_fixtures::GoldenScenario;

fn run_scenario(scenario: &GoldenScenario) {
    let definition: KnowledgeBaseDefinition = test_fixtures::load_fixture(&scenario.knowledge_base);
    let kb = Arc::new(KnowledgeBase::from_definition(definition).unwrap());

    let selection_policy = SelectionPolicy::from_str_name(&scenario.selection_policy)
        .unwrap_or_else(|| panic!("{}: bad selection policy", scenario.name));
    let unknown_policy = UnknownSymptomPolicy::from_str_name(&scenario.unknown_symptom_policy)
        .unwrap_or_else(|| panic!("{}: bad unknown-symptom policy", scenario.name));
    let config = InferenceConfig::default()
        .with_selection_policy(selection_policy)
        .with_unknown_symptom_policy(unknown_policy);

    let engine = PathogenesisEngine::with_config(Arc::clone(&kb), config);
    let outcome = engine
        .infer(&scenario.symptoms)
        .unwrap_or_else(|e| panic!("{}: inference failed: {e}", scenario.name));

    let expected = &scenario.expected;
    assert_eq!(
        outcome.candidate_count(),
        expected.candidate_count,
        "{}: candidate count",
        scenario.name
    );
    assert_eq!(
        outcome.valid_count(),
        expected.valid_count,
        "{}: valid count",
        scenario.name
    );

    match (outcome.selected(), &expected.selected_vertices) {
        (None, None) => {}
        (Some(network), Some(vertices)) => {
            let names: Vec<&str> = network.vertices().iter().map(|&a| kb.name(a)).collect();
            assert_eq!(&names, vertices, "{}: selected vertices", scenario.name);
            if let Some(root) = &expected.selected_root {
                assert_eq!(kb.name(network.root()), root, "{}: root", scenario.name);
            }
            if let Some(edges) = expected.selected_edge_count {
                assert_eq!(network.edges().len(), edges, "{}: edge count", scenario.name);
            }
        }
        (actual, expected) => panic!(
            "{}: selection mismatch, got {:?}, expected {:?}",
            scenario.name,
            actual.map(|n| n.index()),
            expected
        ),
    }
}

#[test]
fn golden_scenarios_reproduce() {
    let scenarios = test_fixtures::load_golden_scenarios();
    assert!(scenarios.len() >= 6, "golden fixtures missing");
    for scenario in &scenarios {
        run_scenario(scenario);
    }
}

#[test]
fn golden_scenarios_hold_under_parallel_screening() {
    for scenario in test_fixtures::load_golden_scenarios() {
        let definition: KnowledgeBaseDefinition =
            test_fixtures::load_fixture(&scenario.knowledge_base);
        let kb = Arc::new(KnowledgeBase::from_definition(definition).unwrap());
        let config = InferenceConfig {
            selection_policy: SelectionPolicy::from_str_name(&scenario.selection_policy).unwrap(),
            unknown_symptom_policy: UnknownSymptomPolicy::from_str_name(
                &scenario.unknown_symptom_policy,
            )
            .unwrap(),
            parallel_validation: false,
            ..InferenceConfig::default()
        };

        let sequential = PathogenesisEngine::with_config(Arc::clone(&kb), config.clone())
            .infer(&scenario.symptoms)
            .unwrap();
        let parallel = PathogenesisEngine::with_config(
            kb,
            config.with_parallel_validation(true),
        )
        .infer(&scenario.symptoms)
        .unwrap();

        assert_eq!(sequential.valid, parallel.valid, "{}", scenario.name);
        assert_eq!(sequential.selection, parallel.selection, "{}", scenario.name);
    }
}
