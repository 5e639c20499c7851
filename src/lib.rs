//! # Flashcut Engine
//!
//! A deterministic timeline segmentation engine for beat-synced video
//! editing. Given mono audio samples, it detects onset events, builds a
//! gap-bounded, frame-aligned sequence of cut intervals covering the full
//! track, and optionally densifies a "flash" sub-region with
//! minimum-gap-constrained extra cuts.
//!
//! ## Features
//!
//! - **Onset detection**: spectral-flux strength envelope with
//!   median aggregation, local-maximum candidate picking, and
//!   percentile-normalized confidence scoring
//! - **Interval building**: full-coverage timelines with a configurable
//!   maximum gap between cuts
//! - **Flash windows**: denser cuts inside a sub-region, spliced into the
//!   timeline without breaking coverage
//!
//! ## Quick Start
//!
//! ```no_run
//! use flashcut_engine::{segment_track, SegmenterConfig};
//!
//! // Load audio samples (mono, f32, normalized)
//! let samples: Vec<f32> = vec![]; // Your audio data
//! let sample_rate = 44_100;
//!
//! let result = segment_track(&samples, sample_rate, &SegmenterConfig::default())?;
//!
//! println!("{} onsets, {} intervals", result.onsets.len(), result.timeline.len());
//! # Ok::<(), flashcut_engine::SegmentError>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline follows this flow:
//!
//! ```text
//! Samples -> Onset Detection -> Interval Builder -> Flash Detection -> Flash Splice
//! ```
//!
//! Every stage is a pure, synchronous function of numeric inputs; the engine
//! performs no I/O, spawns no processes, and holds no shared mutable state.
//! Hosts decode audio and persist results themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod features;
pub mod flash;
pub mod result;
pub mod timeline;

// Re-export main types
pub use config::SegmenterConfig;
pub use error::SegmentError;
pub use features::{detect_onsets, OnsetEvent};
pub use flash::{detect_flash_window, FlashWindow};
pub use result::{SegmentationMetadata, SegmentationResult};
pub use timeline::intervals::build_intervals;
pub use timeline::quantize::{quantize_times, quantize_to_frame, round_millis};
pub use timeline::splice::inject_flash_splits;
pub use timeline::{Interval, Timeline};

/// Run the full segmentation pipeline
///
/// Detects onsets, builds the gap-bounded timeline for the whole track, and,
/// when the configuration carries a flash window with `end > start`, detects
/// flash cuts and splices them into the timeline.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz (typically 44100 or 48000)
/// * `config` - Segmentation parameters
///
/// # Returns
///
/// A [`SegmentationResult`] with the onsets, the timeline, any flash cuts,
/// and run metadata.
///
/// # Errors
///
/// Returns [`SegmentError`] on invalid configuration, an empty sample
/// buffer, or a zero sample rate. Degenerate-but-legal inputs (silence, no
/// onsets above threshold, a flash window outside the track) are not
/// errors; each stage has a documented fallback.
///
/// # Example
///
/// ```no_run
/// use flashcut_engine::{segment_track, FlashWindow, SegmenterConfig};
///
/// let samples = vec![0.0f32; 44_100 * 30]; // 30 seconds of silence
/// let config = SegmenterConfig {
///     flash: Some(FlashWindow { start: 10.0, end: 25.0, min_gap: 0.12 }),
///     ..SegmenterConfig::default()
/// };
/// let result = segment_track(&samples, 44_100, &config)?;
/// # Ok::<(), flashcut_engine::SegmentError>(())
/// ```
pub fn segment_track(
    samples: &[f32],
    sample_rate: u32,
    config: &SegmenterConfig,
) -> Result<SegmentationResult, SegmentError> {
    use std::time::Instant;
    let start_time = Instant::now();

    config.validate()?;

    if samples.is_empty() {
        return Err(SegmentError::InvalidInput("Empty audio samples".to_string()));
    }

    if sample_rate == 0 {
        return Err(SegmentError::InvalidInput("Invalid sample rate".to_string()));
    }

    log::debug!(
        "Starting segmentation: {} samples at {} Hz",
        samples.len(),
        sample_rate
    );

    let duration = samples.len() as f64 / f64::from(sample_rate);

    let onsets = features::detect_onsets(samples, sample_rate, config.hop_size, config.threshold)?;
    let onset_times: Vec<f64> = onsets.iter().map(|event| event.time).collect();

    let mut timeline =
        timeline::intervals::build_intervals(&onset_times, duration, config.fps, config.max_gap)?;

    let flash_cuts = match &config.flash {
        Some(window) if window.end > window.start => flash::detect_flash_window(
            samples,
            sample_rate,
            window,
            config.fps,
            config.hop_size,
            config.threshold,
        )?,
        _ => Vec::new(),
    };

    if !flash_cuts.is_empty() {
        timeline = timeline::splice::inject_flash_splits(&timeline, &flash_cuts, config.fps)?;
    }

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Segmentation finished: {} onsets, {} intervals, {} flash cuts in {:.2} ms",
        onsets.len(),
        timeline.len(),
        flash_cuts.len(),
        processing_time_ms
    );

    Ok(SegmentationResult {
        onsets,
        timeline,
        flash_cuts,
        metadata: SegmentationMetadata {
            duration_seconds: duration,
            sample_rate,
            processing_time_ms,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}
