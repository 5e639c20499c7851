//! Gap-bounded interval construction
//!
//! Builds a covering sequence of intervals from an unordered set of onset
//! times plus the track duration. Wherever a gap between consecutive onsets
//! (or before the first, or after the last) exceeds the configured maximum,
//! extra splits spaced exactly `max_gap` apart are inserted.

use crate::error::SegmentError;
use crate::timeline::quantize::{quantize_times, quantize_to_frame, round_millis};
use crate::timeline::{Interval, Timeline};

/// Build a gap-bounded timeline covering `[0, quantize(duration, fps)]`
///
/// # Arguments
///
/// * `onset_times` - Onset times in seconds; unsorted, possibly empty,
///   possibly containing duplicates
/// * `duration` - Track duration in seconds, >= 0
/// * `fps` - Frame rate the timeline is quantized to, > 0
/// * `max_gap` - Maximum allowed split spacing in seconds, > 0
///
/// # Returns
///
/// A `Timeline` whose intervals exactly cover `[0, quantize(duration, fps)]`
/// with no gap or overlap. Interval boundaries are rounded to millisecond
/// precision for output stability; both sides of a shared boundary receive
/// the same rounding, so contiguity is exact. No interval is longer than
/// `max_gap`, except that two adjacent onsets closer together than one frame
/// may produce a zero-length interval where they quantize onto the same
/// frame. That duplicate-onset case is a documented edge, not eliminated.
///
/// # Errors
///
/// Returns `SegmentError::InvalidConfig` for non-positive or non-finite
/// `fps`/`max_gap` or a negative/non-finite `duration`, and
/// `SegmentError::InvalidInput` for negative or non-finite onset times (a
/// non-finite onset would never terminate the gap padding loop).
pub fn build_intervals(
    onset_times: &[f64],
    duration: f64,
    fps: f64,
    max_gap: f64,
) -> Result<Timeline, SegmentError> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(SegmentError::InvalidConfig(format!(
            "fps must be finite and > 0, got {}",
            fps
        )));
    }

    if !max_gap.is_finite() || max_gap <= 0.0 {
        return Err(SegmentError::InvalidConfig(format!(
            "max_gap must be finite and > 0, got {}",
            max_gap
        )));
    }

    if !duration.is_finite() || duration < 0.0 {
        return Err(SegmentError::InvalidConfig(format!(
            "duration must be finite and >= 0, got {}",
            duration
        )));
    }

    if let Some(&bad) = onset_times
        .iter()
        .find(|&&t| !t.is_finite() || t < 0.0)
    {
        return Err(SegmentError::InvalidInput(format!(
            "onset times must be finite and >= 0, got {}",
            bad
        )));
    }

    log::debug!(
        "Building intervals: {} onsets, duration={:.3}s, fps={}, max_gap={}",
        onset_times.len(),
        duration,
        fps,
        max_gap
    );

    let end = quantize_to_frame(duration, fps);
    let mut splits = vec![0.0];

    if onset_times.is_empty() {
        // No onsets: chunk the whole track into <= max_gap spans
        push_gap_splits(&mut splits, 0.0, end, max_gap);
    } else {
        let mut beats = onset_times.to_vec();
        beats.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let beats = quantize_times(&beats, fps);

        push_gap_splits(&mut splits, 0.0, beats[0], max_gap);
        for pair in beats.windows(2) {
            push_gap_splits(&mut splits, pair[0], pair[1], max_gap);
        }

        // Pad the trailing gap out to the full quantized end. When the last
        // onset already sits at or past the end, the onset stays the final
        // split.
        let last = *splits.last().unwrap_or(&0.0);
        if end > last {
            push_gap_splits(&mut splits, last, end, max_gap);
        }
    }

    let intervals: Vec<Interval> = splits
        .windows(2)
        .map(|pair| Interval::new(round_millis(pair[0]), round_millis(pair[1])))
        .collect();

    log::debug!("Built {} intervals", intervals.len());

    Ok(Timeline { intervals })
}

/// Append split points for the gap from `left` (already in `splits`) to
/// `right`: intermediate points spaced exactly `max_gap` apart while the
/// remaining distance exceeds `max_gap`, then `right` itself.
///
/// One subroutine serves the leading gap, every inter-onset gap, and the
/// trailing gap, so all three share a single edge-case policy.
fn push_gap_splits(splits: &mut Vec<f64>, left: f64, right: f64, max_gap: f64) {
    let mut prev = left;
    while right - prev > max_gap {
        prev += max_gap;
        splits.push(prev);
    }
    splits.push(right);
}
