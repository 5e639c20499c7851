//! Integration tests for the timeline segmentation engine

use flashcut_engine::{
    build_intervals, detect_flash_window, detect_onsets, inject_flash_splits, quantize_to_frame,
    round_millis, segment_track, FlashWindow, SegmenterConfig,
};

const SAMPLE_RATE: u32 = 44_100;

/// Generate a track of deterministic broadband noise bursts at the given
/// times. Bursts are what a percussive attack looks like to the spectral
/// flux envelope; pure tones deliberately are not (median aggregation).
fn generate_burst_track(duration_seconds: f64, burst_times: &[f64], amplitude: f32) -> Vec<f32> {
    let num_samples = (duration_seconds * f64::from(SAMPLE_RATE)) as usize;
    let mut samples = vec![0.0f32; num_samples];

    for &t in burst_times {
        let start = (t * f64::from(SAMPLE_RATE)) as usize;
        let mut state = 0x9e37_79b9_7f4a_7c15_u64 ^ start as u64;
        for slot in samples.iter_mut().skip(start).take(2048) {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let unit = (state >> 40) as f32 / (1u64 << 24) as f32;
            *slot = (unit * 2.0 - 1.0) * amplitude;
        }
    }

    samples
}

fn assert_covering_timeline(timeline: &flashcut_engine::Timeline, duration: f64, fps: f64) {
    assert!(!timeline.is_empty());
    assert_eq!(timeline.intervals[0].start, 0.0, "timeline must start at 0");
    assert_eq!(
        timeline.intervals.last().unwrap().end,
        round_millis(quantize_to_frame(duration, fps)),
        "timeline must end at the quantized duration"
    );
    for pair in timeline.intervals.windows(2) {
        assert_eq!(
            pair[0].end, pair[1].start,
            "intervals must be contiguous: {:?} -> {:?}",
            pair[0], pair[1]
        );
    }
}

#[test]
fn test_segment_silent_track_uniform_chunking() {
    let samples = vec![0.0f32; SAMPLE_RATE as usize * 12];
    let config = SegmenterConfig::default();

    let result = segment_track(&samples, SAMPLE_RATE, &config).expect("segmentation should succeed");

    assert!(result.onsets.is_empty(), "silence should yield no onsets");
    assert!(result.flash_cuts.is_empty());

    // duration 12.0, max_gap 5.0 -> [0,5), [5,10), [10,12)
    assert_eq!(result.timeline.starts(), vec![0.0, 5.0, 10.0]);
    assert_eq!(result.timeline.ends(), vec![5.0, 10.0, 12.0]);

    assert!((result.metadata.duration_seconds - 12.0).abs() < 1e-9);
    assert_eq!(result.metadata.sample_rate, SAMPLE_RATE);
}

#[test]
fn test_segment_burst_track_covers_and_bounds_gaps() {
    let burst_times = [0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 9.5];
    let samples = generate_burst_track(16.0, &burst_times, 0.8);
    let config = SegmenterConfig::default();

    let result = segment_track(&samples, SAMPLE_RATE, &config).expect("segmentation should succeed");

    assert!(
        result.onsets.len() >= 4,
        "expected several detected onsets, got {}",
        result.onsets.len()
    );
    for event in &result.onsets {
        assert!((0.0..=1.0).contains(&event.confidence));
    }

    assert_covering_timeline(&result.timeline, 16.0, config.fps);

    // No interval longer than max_gap plus one frame of quantization slack
    let bound = config.max_gap + 1.0 / config.fps + 0.001;
    for interval in &result.timeline.intervals {
        assert!(
            interval.duration() <= bound,
            "interval {:?} exceeds the max-gap bound",
            interval
        );
    }
}

#[test]
fn test_flash_window_densifies_its_region() {
    // Sparse bursts outside the window, dense bursts every 100 ms inside
    let mut burst_times = vec![0.5, 6.5];
    let mut t = 2.0;
    while t < 4.0 {
        burst_times.push(t);
        t += 0.1;
    }
    let samples = generate_burst_track(8.0, &burst_times, 0.8);

    let window = FlashWindow {
        start: 2.0,
        end: 4.0,
        min_gap: 0.25,
    };
    let cuts = detect_flash_window(&samples, SAMPLE_RATE, &window, 30.0, 512, 0.3)
        .expect("flash detection should succeed");

    assert!(
        cuts.len() >= 3,
        "expected several flash cuts in a dense 2 s window, got {}",
        cuts.len()
    );

    // Cuts lie inside the window (one frame of quantization slack) and are
    // strictly increasing with the pruned spacing, minus the same slack
    let frame = 1.0 / 30.0;
    for &cut in &cuts {
        assert!(
            cut >= window.start - frame && cut <= window.end + frame,
            "cut {:.3} outside flash window",
            cut
        );
    }
    for pair in cuts.windows(2) {
        assert!(
            pair[1] - pair[0] >= window.min_gap - frame - 1e-9,
            "cuts {:.3} and {:.3} closer than the minimum gap",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_full_pipeline_with_flash_window() {
    let mut burst_times = vec![0.5, 6.5, 11.0];
    let mut t = 2.0;
    while t < 4.0 {
        burst_times.push(t);
        t += 0.1;
    }
    let samples = generate_burst_track(12.0, &burst_times, 0.8);

    let config = SegmenterConfig {
        flash: Some(FlashWindow {
            start: 2.0,
            end: 4.0,
            min_gap: 0.25,
        }),
        ..SegmenterConfig::default()
    };

    let plain_config = SegmenterConfig::default();
    let plain = segment_track(&samples, SAMPLE_RATE, &plain_config).unwrap();
    let flashed = segment_track(&samples, SAMPLE_RATE, &config).unwrap();

    assert!(!flashed.flash_cuts.is_empty(), "flash window should yield cuts");
    assert!(
        flashed.timeline.len() >= plain.timeline.len(),
        "splicing flash cuts must not shrink the timeline"
    );

    // Coverage endpoints survive the splice
    assert_eq!(flashed.timeline.intervals[0].start, 0.0);
    assert!(flashed.timeline.intervals.last().unwrap().end >= plain.timeline.intervals.last().unwrap().end);
}

#[test]
fn test_component_functions_compose_like_the_driver() {
    let samples = generate_burst_track(10.0, &[1.0, 4.0, 8.0], 0.8);
    let config = SegmenterConfig::default();

    let events = detect_onsets(&samples, SAMPLE_RATE, config.hop_size, config.threshold).unwrap();
    let times: Vec<f64> = events.iter().map(|e| e.time).collect();
    let timeline = build_intervals(&times, 10.0, config.fps, config.max_gap).unwrap();
    let spliced = inject_flash_splits(&timeline, &[], config.fps).unwrap();

    assert_eq!(spliced, timeline, "empty splice must be the identity");

    let driven = segment_track(&samples, SAMPLE_RATE, &config).unwrap();
    assert_eq!(driven.timeline, timeline, "driver must match manual composition");
}

#[test]
fn test_degenerate_inputs_are_errors_only_at_the_driver() {
    // The driver rejects an empty buffer...
    assert!(segment_track(&[], SAMPLE_RATE, &SegmenterConfig::default()).is_err());

    // ...but the pure components fall back instead of failing
    assert!(detect_onsets(&[], SAMPLE_RATE, 512, 0.3).unwrap().is_empty());
    let timeline = build_intervals(&[], 0.0, 30.0, 5.0).unwrap();
    assert_eq!(timeline.len(), 1);

    let window = FlashWindow {
        start: 100.0,
        end: 200.0,
        min_gap: 0.12,
    };
    let samples = vec![0.0f32; 1024];
    assert!(detect_flash_window(&samples, SAMPLE_RATE, &window, 30.0, 512, 0.3)
        .unwrap()
        .is_empty());
}

#[test]
fn test_invalid_configuration_fails_fast() {
    let samples = vec![0.0f32; SAMPLE_RATE as usize];

    let mut config = SegmenterConfig::default();
    config.fps = -1.0;
    assert!(segment_track(&samples, SAMPLE_RATE, &config).is_err());

    let mut config = SegmenterConfig::default();
    config.max_gap = 0.0;
    assert!(segment_track(&samples, SAMPLE_RATE, &config).is_err());

    let mut config = SegmenterConfig::default();
    config.threshold = 2.0;
    assert!(segment_track(&samples, SAMPLE_RATE, &config).is_err());
}
