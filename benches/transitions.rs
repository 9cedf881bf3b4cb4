//! Benchmarks for rule engine transitions
//!
//! Measures mark/unmark, legal action enumeration and score computation
//! on a mid-game card.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use qwixx_scorecard::core::{GameState, RowColor, Variant};
use qwixx_scorecard::rules::RuleEngine;
use qwixx_scorecard::scoring::compute_scores;
use qwixx_scorecard::session::SessionBuilder;

fn mid_game(variant: Variant) -> (RuleEngine, GameState) {
    let mut session = SessionBuilder::new().variant(variant).seed(42).build();
    for color in RowColor::all() {
        let values = *session.rows()[color].values();
        for value in values.iter().step_by(3) {
            let _ = session.mark_value(color, *value);
        }
    }
    let _ = session.adjust_penalty(1);
    (session.engine().clone(), session.state().clone())
}

fn bench_mark_unmark(c: &mut Criterion) {
    let (engine, state) = mid_game(Variant::Standard);
    let value = engine.rows()[RowColor::Red].values()[10];

    c.bench_function("mark_then_unmark", |b| {
        b.iter(|| {
            let marked = engine.mark_value(black_box(&state), RowColor::Red, value);
            let restored = marked.and_then(|s| engine.unmark_value(&s, RowColor::Red, value));
            black_box(restored)
        })
    });
}

fn bench_legal_actions(c: &mut Criterion) {
    let (engine, state) = mid_game(Variant::DynamicRandom);

    c.bench_function("legal_actions", |b| b.iter(|| black_box(engine.legal_actions(black_box(&state)))));
}

fn bench_compute_scores(c: &mut Criterion) {
    let (_, state) = mid_game(Variant::FixedRandom);

    c.bench_function("compute_scores", |b| b.iter(|| black_box(compute_scores(black_box(&state)))));
}

criterion_group!(benches, bench_mark_unmark, bench_legal_actions, bench_compute_scores);
criterion_main!(benches);
