//! Tracing setup and span macro tests.

use pathogen_core::config::ObservabilityConfig;
use pathogen_observability::tracing_setup::spans::names;
use pathogen_observability::{
    generation_span, init_tracing, init_tracing_with_config, init_tracing_with_filter,
    screening_span, selection_span,
};

fn init() {
    init_tracing_with_filter("trace");
}

#[test]
fn init_is_idempotent() {
    init();
    init_tracing();
    init_tracing_with_config(&ObservabilityConfig {
        log_level: "DEBUG".to_string(),
        json: true,
    });
    tracing::info!("still logging after repeated init");
}

#[test]
fn spans_carry_stage_names() {
    init();

    let generation = generation_span!(3);
    let screening = screening_span!(8, true);
    let selection = selection_span!("fewest_vertices", 7);

    assert_eq!(generation.metadata().map(|m| m.name()), Some(names::GENERATION));
    assert_eq!(screening.metadata().map(|m| m.name()), Some(names::SCREENING));
    assert_eq!(selection.metadata().map(|m| m.name()), Some(names::SELECTION));
}

#[test]
fn span_fields_are_declared() {
    init();

    let span = screening_span!(216, false);
    let fields = span.metadata().map(|m| m.fields());
    let fields = fields.expect("span enabled at trace level");
    assert!(fields.field("candidate_count").is_some());
    assert!(fields.field("parallel").is_some());
}
