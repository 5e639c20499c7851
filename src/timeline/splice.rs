//! Flash cut splicing
//!
//! Merges flash timestamps into an existing timeline by splitting any
//! interval that contains one or more flash cut points.

use crate::error::SegmentError;
use crate::timeline::quantize::{quantize_times, round_millis};
use crate::timeline::{Interval, Timeline};

/// Splice flash cut times into a timeline
///
/// Each flash time strictly inside an interval's open `(start, end)` splits
/// that interval at the (frame-quantized) cut point. Intervals without
/// interior cuts are passed through untouched. An emitted piece shorter than
/// one frame has its right edge extended to `left + 1/fps`; within the same
/// parent interval this can overlap the next emitted piece by at most one
/// frame duration. That sub-frame overlap is the one accepted imprecision of
/// the splice and is deliberately not corrected; coverage is never reduced.
///
/// # Arguments
///
/// * `timeline` - Existing timeline; never mutated, a new one is returned
/// * `flash_times` - Flash cut times in seconds, any order
/// * `fps` - Frame rate, > 0
///
/// # Errors
///
/// Returns `SegmentError::InvalidConfig` for a non-positive or non-finite
/// `fps`, and `SegmentError::InvalidInput` for non-finite flash times.
pub fn inject_flash_splits(
    timeline: &Timeline,
    flash_times: &[f64],
    fps: f64,
) -> Result<Timeline, SegmentError> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(SegmentError::InvalidConfig(format!(
            "fps must be finite and > 0, got {}",
            fps
        )));
    }

    if let Some(&bad) = flash_times.iter().find(|&&t| !t.is_finite()) {
        return Err(SegmentError::InvalidInput(format!(
            "flash times must be finite, got {}",
            bad
        )));
    }

    if flash_times.is_empty() {
        return Ok(timeline.clone());
    }

    let mut flash = quantize_times(flash_times, fps);
    flash.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let frame = 1.0 / fps;
    let mut intervals = Vec::with_capacity(timeline.len() + flash.len());

    for interval in &timeline.intervals {
        let cuts: Vec<f64> = flash
            .iter()
            .copied()
            .filter(|&t| interval.start < t && t < interval.end)
            .collect();

        if cuts.is_empty() {
            intervals.push(*interval);
            continue;
        }

        let mut points = Vec::with_capacity(cuts.len() + 2);
        points.push(interval.start);
        points.extend_from_slice(&cuts);
        points.push(interval.end);

        for pair in points.windows(2) {
            let left = pair[0];
            // Extend sub-frame pieces to one full frame; the extension is
            // local to this pair, so the following piece still starts at the
            // original cut point (the accepted overlap).
            let right = if pair[1] - left < frame {
                left + frame
            } else {
                pair[1]
            };
            intervals.push(Interval::new(round_millis(left), round_millis(right)));
        }
    }

    log::debug!(
        "Spliced {} flash cuts: {} -> {} intervals",
        flash.len(),
        timeline.len(),
        intervals.len()
    );

    Ok(Timeline { intervals })
}
