//! Onset confidence scoring
//!
//! Maps candidate times onto the strength envelope and normalizes the
//! looked-up strength to a [0, 1] confidence score, then filters candidates
//! against a confidence threshold.

use crate::features::OnsetEvent;

/// Normalization scale for envelope confidences
///
/// The scale is the 98th percentile of the entire envelope (nearest-rank);
/// if that percentile is zero the envelope maximum is used instead, and if
/// the maximum is also zero the scale is 1.0 so silent or flat input never
/// divides by zero.
pub fn normalization_scale(envelope: &[f32]) -> f32 {
    if envelope.is_empty() {
        return 1.0;
    }

    let mut sorted = envelope.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let idx = ((sorted.len() as f32) * 0.98) as usize;
    let idx = idx.min(sorted.len() - 1);

    let mut scale = sorted[idx];
    if scale <= 0.0 {
        scale = *sorted.last().unwrap();
    }
    if scale <= 0.0 {
        scale = 1.0;
    }

    scale
}

/// Score candidate times against a strength envelope
///
/// Each time is converted to an envelope index via
/// `round(t * sample_rate / hop)`, clamped into the envelope, and the value
/// at that index is divided by [`normalization_scale`] and clamped to
/// [0, 1].
///
/// # Arguments
///
/// * `times` - Candidate onset times in seconds
/// * `envelope` - Strength envelope, one value per hop
/// * `sample_rate` - Sample rate in Hz
/// * `hop` - Hop size in samples, must be > 0
///
/// # Returns
///
/// One confidence per candidate, same order as the input. Empty candidates
/// yield an empty result; an empty envelope yields all-zero confidences.
pub fn envelope_confidence(
    times: &[f64],
    envelope: &[f32],
    sample_rate: u32,
    hop: usize,
) -> Vec<f32> {
    if times.is_empty() {
        return Vec::new();
    }

    if envelope.is_empty() {
        return vec![0.0; times.len()];
    }

    let scale = normalization_scale(envelope);
    let frames_per_second = f64::from(sample_rate) / hop as f64;

    log::debug!(
        "Scoring {} candidates against {} envelope frames, scale={:.6}",
        times.len(),
        envelope.len(),
        scale
    );

    times
        .iter()
        .map(|&t| {
            let idx = (t * frames_per_second).round().max(0.0) as usize;
            let idx = idx.min(envelope.len() - 1);
            (envelope[idx] / scale).clamp(0.0, 1.0)
        })
        .collect()
}

/// Keep candidates whose confidence meets the threshold
///
/// Survivors preserve their relative order. A threshold of 0.0 keeps every
/// candidate; a threshold of 1.0 keeps only candidates at or above the
/// normalization scale (float ties near 1.0 may resolve either way).
pub fn filter_onsets(times: &[f64], confidences: &[f32], threshold: f32) -> Vec<OnsetEvent> {
    times
        .iter()
        .zip(confidences.iter())
        .filter(|(_, &confidence)| confidence >= threshold)
        .map(|(&time, &confidence)| OnsetEvent { time, confidence })
        .collect()
}
