//! Onset feature extraction
//!
//! Turns raw samples into scored onset events:
//! - Strength envelope (STFT spectral flux, median-aggregated)
//! - Candidate picking (local maxima over the envelope)
//! - Confidence scoring and threshold filtering

pub mod confidence;
pub mod envelope;
pub mod peaks;

use serde::{Deserialize, Serialize};

use crate::error::SegmentError;

/// A detected onset with its normalized confidence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OnsetEvent {
    /// Onset time in seconds, >= 0
    pub time: f64,

    /// Confidence score in [0.0, 1.0]
    pub confidence: f32,
}

/// Detect onset events in a sample buffer
///
/// Runs the full detection pipeline: strength envelope, candidate picking,
/// confidence normalization against the 98th-percentile envelope scale, and
/// threshold filtering. The analysis window spans four hops (a 512-sample
/// hop gives the conventional 2048-sample window).
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz
/// * `hop` - Hop size in samples between envelope frames
/// * `threshold` - Confidence threshold in [0, 1]
///
/// # Returns
///
/// Onset events in detection order. Ordering by time is not part of the
/// contract; consumers that need sorted times sort for themselves. Empty or
/// too-short input yields an empty result, never an error.
///
/// # Errors
///
/// Returns `SegmentError::InvalidConfig` for a zero `hop` or an
/// out-of-range `threshold`, and `SegmentError::InvalidInput` for a zero
/// sample rate.
///
/// # Example
///
/// ```no_run
/// use flashcut_engine::detect_onsets;
///
/// let samples = vec![0.0f32; 44_100 * 30]; // 30 seconds of audio
/// let events = detect_onsets(&samples, 44_100, 512, 0.3)?;
/// println!("Found {} onsets", events.len());
/// # Ok::<(), flashcut_engine::SegmentError>(())
/// ```
pub fn detect_onsets(
    samples: &[f32],
    sample_rate: u32,
    hop: usize,
    threshold: f32,
) -> Result<Vec<OnsetEvent>, SegmentError> {
    if sample_rate == 0 {
        return Err(SegmentError::InvalidInput("Invalid sample rate".to_string()));
    }

    if hop == 0 {
        return Err(SegmentError::InvalidConfig("hop must be > 0".to_string()));
    }

    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(SegmentError::InvalidConfig(format!(
            "threshold must be in [0.0, 1.0], got {}",
            threshold
        )));
    }

    if samples.is_empty() {
        return Ok(Vec::new());
    }

    let frame_size = hop * 4;
    let env = envelope::strength_envelope(samples, frame_size, hop)?;
    if env.is_empty() {
        return Ok(Vec::new());
    }

    let picks = peaks::pick_candidates(&env, &peaks::PeakConfig::default());
    let times: Vec<f64> = picks
        .iter()
        .map(|&i| i as f64 * hop as f64 / f64::from(sample_rate))
        .collect();

    let confidences = confidence::envelope_confidence(&times, &env, sample_rate, hop);
    let events = confidence::filter_onsets(&times, &confidences, threshold);

    log::debug!(
        "Detected {} onsets from {} candidates (threshold {:.2})",
        events.len(),
        times.len(),
        threshold
    );

    Ok(events)
}
