//! Benchmarks for the pink noise generator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pluvio::dsp::PinkNoise;

use crate::BLOCK_SIZES;

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");

    for &size in BLOCK_SIZES {
        let mut noise = PinkNoise::with_seed(0xACE);
        let mut buffer = vec![0.0f32; size];
        group.bench_with_input(BenchmarkId::new("pink", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = noise.next_sample();
                }
                black_box(&mut buffer);
            })
        });
    }

    group.finish();
}
