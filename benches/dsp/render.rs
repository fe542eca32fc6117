//! Benchmarks for the full stereo block renderer — the whole per-callback
//! cost of the audio path.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pluvio::{BlockRenderer, RainConfig};

use crate::BLOCK_SIZES;

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let config = RainConfig::default();

    for &size in BLOCK_SIZES {
        let mut renderer = BlockRenderer::with_seeds(&config, 1, 2).unwrap();
        let mut left = vec![0.0f32; size];
        let mut right = vec![0.0f32; size];
        group.bench_with_input(BenchmarkId::new("stereo", size), &size, |b, _| {
            b.iter(|| {
                renderer.render_at(0, black_box(&mut left), black_box(&mut right));
            })
        });

        let mut renderer = BlockRenderer::with_seeds(&config, 1, 2).unwrap();
        let mut data = vec![0.0f32; size * 2];
        group.bench_with_input(BenchmarkId::new("interleaved", size), &size, |b, _| {
            b.iter(|| {
                renderer.render_interleaved(black_box(&mut data));
            })
        });
    }

    group.finish();
}
