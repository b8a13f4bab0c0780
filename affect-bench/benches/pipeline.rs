//! Appraisal pipeline benchmark suite.
//!
//! Informal targets for interactive use:
//!   classify_short_input ......... < 5μs
//!   full_turn .................... < 20μs
//!   decide_with_history_1000 ..... < 50μs
//!
//! The last one tracks the cost of the unbounded history scan the learner
//! performs on fear-signaling turns; it grows linearly with session length.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use affect_core::catalog;
use affect_core::classifier;
use affect_core::config::{AffectConfig, LearningConfig};
use affect_core::learning::LearningStore;
use affect_core::session::Session;
use affect_core::types::{Outcome, ResponseOption, StimulusCategory};

/// Benchmark: classification of a short line of input.
fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_short_input", |b| {
        b.iter(|| {
            let category = classifier::classify(black_box("good job handling that question"));
            black_box(category);
        });
    });
}

/// Benchmark: one complete turn through a live session.
fn bench_full_turn(c: &mut Criterion) {
    let mut session = Session::new(&AffectConfig::default());
    c.bench_function("full_turn", |b| {
        b.iter(|| {
            let report = session.run_turn(black_box("danger up ahead"));
            black_box(report);
        });
    });
}

/// Benchmark: the learner's history scan against a 1000-entry history, all
/// matching the fear-penalty filter (the worst case). Uses `analyze` rather
/// than `decide` so the history does not grow between iterations.
fn bench_decide_with_history(c: &mut Criterion) {
    let fear_path = catalog::lookup(StimulusCategory::ThreatImminent);
    let mut learner = LearningStore::new(LearningConfig::default());
    for _ in 0..1000 {
        learner.record(fear_path, ResponseOption::C, Outcome::Negative);
    }

    c.bench_function("decide_with_history_1000", |b| {
        b.iter(|| {
            let (options, priorities) = learner.analyze(black_box(&fear_path));
            black_box((options, priorities));
        });
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_full_turn,
    bench_decide_with_history
);
criterion_main!(benches);
