//! Performance benchmarks for timeline segmentation

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use flashcut_engine::{segment_track, FlashWindow, SegmenterConfig};

/// Deterministic broadband bursts every half second
fn generate_burst_track(duration_seconds: f64, sample_rate: u32) -> Vec<f32> {
    let num_samples = (duration_seconds * f64::from(sample_rate)) as usize;
    let mut samples = vec![0.0f32; num_samples];

    let period = sample_rate as usize / 2;
    let mut start = 0;
    while start < num_samples {
        let mut state = 0x2545_f491_4f6c_dd1d_u64 ^ start as u64;
        for slot in samples.iter_mut().skip(start).take(2048) {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let unit = (state >> 40) as f32 / (1u64 << 24) as f32;
            *slot = (unit * 2.0 - 1.0) * 0.8;
        }
        start += period;
    }

    samples
}

fn bench_segment_track(c: &mut Criterion) {
    let samples = generate_burst_track(30.0, 44_100);
    let config = SegmenterConfig::default();

    c.bench_function("segment_track_30s", |b| {
        b.iter(|| {
            let _ = segment_track(black_box(&samples), black_box(44_100), black_box(&config));
        });
    });

    let flash_config = SegmenterConfig {
        flash: Some(FlashWindow {
            start: 10.0,
            end: 25.0,
            min_gap: 0.12,
        }),
        ..SegmenterConfig::default()
    };

    c.bench_function("segment_track_30s_with_flash", |b| {
        b.iter(|| {
            let _ = segment_track(
                black_box(&samples),
                black_box(44_100),
                black_box(&flash_config),
            );
        });
    });
}

criterion_group!(benches, bench_segment_track);
criterion_main!(benches);
