// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use tidemark_state::{TimelineAction, TimelineConfig, TimelineState};

fn bench_playhead_transitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("state/playhead");
    let config = TimelineConfig::default();

    // A drag produces a long run of distinct in-band payloads; a held arrow
    // key produces a long run of identical ones (reducer no-ops).
    for (label, stride) in [("distinct", 7.0), ("no_op", 0.0)] {
        let payloads: Vec<f64> = (0..1_024).map(|i| 100.0 + f64::from(i) * stride).collect();
        group.throughput(Throughput::Elements(payloads.len() as u64));

        group.bench_with_input(BenchmarkId::new(label, payloads.len()), &payloads, |b, payloads| {
            b.iter_batched(
                || TimelineState::new().with_time_bounds(0.0, config.max_duration),
                |mut state| {
                    for &payload in payloads {
                        state.apply(&config, TimelineAction::SetPlayheadTime(payload));
                    }
                    black_box(state);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_duration_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("state/duration_cascade");
    let config = TimelineConfig::default();

    // Shrinking durations drag the playhead along on every transition.
    let payloads: Vec<f64> = (0..590).map(|i| 6000.0 - f64::from(i) * 10.0).collect();
    group.throughput(Throughput::Elements(payloads.len() as u64));

    group.bench_function("shrink", |b| {
        b.iter_batched(
            || {
                let mut state = TimelineState::new().with_time_bounds(0.0, config.max_duration);
                state.apply(&config, TimelineAction::SetDurationTime(6000.0));
                state.apply(&config, TimelineAction::SetPlayheadTime(6000.0));
                state
            },
            |mut state| {
                for &payload in &payloads {
                    state.apply(&config, TimelineAction::SetDurationTime(payload));
                }
                black_box(state);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_playhead_transitions, bench_duration_cascade);
criterion_main!(benches);
