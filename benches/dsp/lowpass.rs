//! Benchmarks for the one-pole low-pass filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pluvio::dsp::OnePole;

use crate::BLOCK_SIZES;

pub fn bench_lowpass(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/lowpass");

    for &size in BLOCK_SIZES {
        // Ramp input so the filter always has work to do.
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        let mut filter = OnePole::new(8000.0, 48_000.0);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("onepole", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
