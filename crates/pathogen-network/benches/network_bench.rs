use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use pathogen_core::knowledge::KnowledgeBase;
use pathogen_core::models::SelectionPolicy;
use pathogen_network::generation::NetworkGenerator;
use pathogen_network::validation::NetworkValidator;
use pathogen_network::PathogenesisEngine;

/// 12 atoms in a forward chain with a back-link, 8 symptoms of 3 atoms each:
/// 3^8 = 6561 candidates.
fn build_chain_kb() -> (KnowledgeBase, Vec<String>) {
    let n = 12;
    let mut builder = KnowledgeBase::builder();
    for i in 0..n {
        builder = builder.atom(format!("a{i}"));
    }
    for i in 0..n - 1 {
        builder = builder.link(format!("a{i}"), format!("a{}", i + 1));
    }
    builder = builder.link(format!("a{}", n - 1), "a0");

    let mut symptoms = Vec::new();
    for s in 0..8 {
        let atoms = (0..3).map(|k| format!("a{}", (s + k * 4) % n));
        builder = builder.symptom(format!("s{s}"), atoms);
        symptoms.push(format!("s{s}"));
    }
    (builder.build().unwrap(), symptoms)
}

fn bench_generation(c: &mut Criterion) {
    let (kb, symptoms) = build_chain_kb();
    let generator = NetworkGenerator::new(&kb);

    c.bench_function("generate_6561_candidates", |b| {
        b.iter(|| generator.generate(&symptoms).unwrap());
    });
}

fn bench_screening(c: &mut Criterion) {
    let (kb, symptoms) = build_chain_kb();
    let candidates = NetworkGenerator::new(&kb).generate(&symptoms).unwrap();

    c.bench_function("screen_6561_sequential", |b| {
        b.iter(|| NetworkValidator::new().screen(&candidates).unwrap());
    });
    c.bench_function("screen_6561_parallel", |b| {
        b.iter(|| NetworkValidator::new().parallel(true).screen(&candidates).unwrap());
    });
}

fn bench_full_inference(c: &mut Criterion) {
    let (kb, symptoms) = build_chain_kb();
    let engine = PathogenesisEngine::new(Arc::new(kb));

    c.bench_function("infer_most_edges_6561", |b| {
        b.iter(|| {
            engine
                .infer_with_policy(&symptoms, SelectionPolicy::MostEdges)
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_generation,
    bench_screening,
    bench_full_inference
);
criterion_main!(benches);
