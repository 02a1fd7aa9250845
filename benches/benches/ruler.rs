// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use tidemark_ruler::{RulerScale, playhead_placement};

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("ruler/conversions");
    let scale = RulerScale::new(1.0, 316.0, 600.0);
    let times: Vec<f64> = (0..4_096).map(|i| f64::from(i) * 1.5).collect();
    group.throughput(Throughput::Elements(times.len() as u64));

    group.bench_function("time_to_view_x", |b| {
        b.iter(|| {
            for &time in &times {
                black_box(scale.time_to_view_x(black_box(time)));
            }
        });
    });

    group.bench_function("roundtrip", |b| {
        b.iter(|| {
            for &time in &times {
                black_box(scale.view_x_to_time(scale.time_to_view_x(black_box(time))));
            }
        });
    });

    group.finish();
}

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("ruler/placement");
    let scale = RulerScale::new(1.0, 316.0, 600.0);
    let times: Vec<f64> = (0..4_096).map(|i| f64::from(i) * 1.5).collect();
    group.throughput(Throughput::Elements(times.len() as u64));

    group.bench_function("playhead_placement", |b| {
        b.iter(|| {
            for &time in &times {
                black_box(playhead_placement(black_box(time), scale, 0.0..1280.0));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_conversions, bench_placement);
criterion_main!(benches);
