//! Benchmarks for creature generation.
//!
//! Run with: `cargo bench --bench generation`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sporeform::creature::{generate_body, generate_body_buffers};
use sporeform::prelude::*;

fn bench_trait_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_traits");

    group.bench_function("vocabulary", |b| {
        let traits = ["helpful", "thorough", "curious", "patient", "precise"];
        b.iter(|| black_box(aggregate_traits(&traits, 42)))
    });

    group.bench_function("hashed_fallback", |b| {
        let traits = ["zxqv", "unheard-of", "made up", "qwerty"];
        b.iter(|| black_box(aggregate_traits(&traits, 42)))
    });

    group.finish();
}

fn bench_body(c: &mut Criterion) {
    let mut group = c.benchmark_group("body_buffers");
    let maturity = classify_maturity(1000);

    let archetypes = [
        ("cosmic", TraitVector::new(0.1, 0.5, 0.8, 0.5)),
        ("organic", TraitVector::new(0.9, 0.5, 0.8, 0.5)),
        ("lovecraftian", TraitVector::new(0.5, 0.9, 0.8, 0.5)),
        ("balanced", TraitVector::new(0.5, 0.3, 0.8, 0.5)),
    ];

    for (name, traits) in archetypes {
        group.bench_function(name, |b| {
            let body = generate_body(&traits, &maturity, 7, &Palette::default());
            b.iter(|| black_box(generate_body_buffers(&body, &traits, 7)))
        });
    }

    group.finish();
}

fn bench_full_creature(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_creature");
    let params = CreatureParams {
        seed: hash_string("claude-7f3a2b"),
        traits: TraitVector::new(0.7, 0.4, 0.6, 0.5),
        palette: Palette::default(),
    };

    for sessions in [0i64, 42, 250, 1000] {
        group.bench_with_input(
            BenchmarkId::new("sessions", sessions),
            &sessions,
            |b, &sessions| b.iter(|| black_box(generate_creature(&params, sessions))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_trait_aggregation,
    bench_body,
    bench_full_creature,
);
criterion_main!(benches);
