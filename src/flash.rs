//! Flash window detection
//!
//! Runs onset detection restricted to a sub-range of the track, then prunes
//! the results to enforce a minimum spacing so a downstream splice can pack
//! dense cuts into the window without producing unusably short segments.

use serde::{Deserialize, Serialize};

use crate::error::SegmentError;
use crate::features::detect_onsets;
use crate::timeline::quantize::quantize_times;

/// A sub-region of the track requiring denser, minimum-gap-constrained cuts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlashWindow {
    /// Window start in seconds; order relative to `end` does not matter
    pub start: f64,
    /// Window end in seconds
    pub end: f64,
    /// Minimum spacing between flash cuts in seconds; the effective spacing
    /// is never less than one frame
    pub min_gap: f64,
}

/// Detect minimum-gap-constrained cut points inside a flash window
///
/// The window boundaries are order-independent and clamped to >= 0. The
/// sample buffer is sliced at `round(boundary * sample_rate)`, the full onset
/// detection pipeline runs on the slice, detected times are shifted back by
/// the window start, and the sorted times are greedily pruned so consecutive
/// survivors are at least `max(1/fps, min_gap)` apart. Survivors are
/// quantized to the frame grid before returning, which can shave up to one
/// frame off the guaranteed spacing at a boundary.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz
/// * `window` - Flash window boundaries and minimum gap
/// * `fps` - Frame rate for quantization and the spacing floor, > 0
/// * `hop` - Hop size in samples for the strength envelope, > 0
/// * `threshold` - Onset confidence threshold in [0, 1]
///
/// # Returns
///
/// Strictly increasing, frame-aligned cut times inside the window. An empty
/// slice (window outside the track, or zero-width) yields an empty result,
/// never an error.
///
/// # Errors
///
/// Returns `SegmentError::InvalidConfig` for invalid `fps`, `hop`,
/// `threshold`, or non-finite window bounds, and
/// `SegmentError::InvalidInput` for a zero sample rate.
pub fn detect_flash_window(
    samples: &[f32],
    sample_rate: u32,
    window: &FlashWindow,
    fps: f64,
    hop: usize,
    threshold: f32,
) -> Result<Vec<f64>, SegmentError> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(SegmentError::InvalidConfig(format!(
            "fps must be finite and > 0, got {}",
            fps
        )));
    }

    if !window.start.is_finite() || !window.end.is_finite() || !window.min_gap.is_finite() {
        return Err(SegmentError::InvalidConfig(format!(
            "flash window bounds must be finite, got [{}, {}] min_gap {}",
            window.start, window.end, window.min_gap
        )));
    }

    if sample_rate == 0 {
        return Err(SegmentError::InvalidInput("Invalid sample rate".to_string()));
    }

    let start_s = window.start.min(window.end).max(0.0);
    let end_s = window.start.max(window.end).max(0.0);

    let rate = f64::from(sample_rate);
    let i0 = ((start_s * rate).round() as usize).min(samples.len());
    let i1 = ((end_s * rate).round() as usize).min(samples.len());

    if i0 >= i1 {
        log::debug!(
            "Flash window [{:.3}, {:.3}] selects no samples, skipping",
            start_s,
            end_s
        );
        return Ok(Vec::new());
    }

    let events = detect_onsets(&samples[i0..i1], sample_rate, hop, threshold)?;

    // Detection ran on a local slice; shift times back onto the track
    let mut times: Vec<f64> = events.iter().map(|event| event.time + start_s).collect();
    times.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let gap = (1.0 / fps).max(window.min_gap);
    let pruned = prune_min_spacing(&times, gap);

    log::debug!(
        "Flash window [{:.3}, {:.3}]: {} onsets -> {} cuts after min-gap {:.3} pruning",
        start_s,
        end_s,
        times.len(),
        pruned.len(),
        gap
    );

    Ok(quantize_times(&pruned, fps))
}

/// Greedily keep candidates at least `gap` after the last kept candidate
///
/// The seed is negative infinity, so the first candidate is always kept.
fn prune_min_spacing(times: &[f64], gap: f64) -> Vec<f64> {
    let mut kept = Vec::with_capacity(times.len());
    let mut last = f64::NEG_INFINITY;

    for &t in times {
        if t - last >= gap {
            kept.push(t);
            last = t;
        }
    }

    kept
}
