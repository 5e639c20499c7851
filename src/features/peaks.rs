//! Onset candidate picking
//!
//! Finds local maxima in the strength envelope that stand above their local
//! average. Candidates are envelope frame indices; conversion to seconds is
//! the caller's job.

/// Peak picking parameters, in envelope frames
///
/// The defaults are the conventional onset-picking neighborhood: a frame is
/// a candidate when it is the maximum of the surrounding seven frames and at
/// least `delta` above the mean of its neighbors.
#[derive(Debug, Clone)]
pub struct PeakConfig {
    /// Frames before the candidate included in the max window (default: 3)
    pub pre_max: usize,
    /// Frames after the candidate included in the max window (default: 3)
    pub post_max: usize,
    /// Frames before the candidate included in the mean window (default: 3)
    pub pre_avg: usize,
    /// Frames after the candidate included in the mean window (default: 3)
    pub post_avg: usize,
    /// Required margin above the local mean (default: 0.0)
    pub delta: f32,
}

impl Default for PeakConfig {
    fn default() -> Self {
        Self {
            pre_max: 3,
            post_max: 3,
            pre_avg: 3,
            post_avg: 3,
            delta: 0.0,
        }
    }
}

/// Pick candidate frames from a strength envelope
///
/// A frame `i` is a candidate when:
/// - no frame in `[i - pre_max, i + post_max]` is strictly greater,
/// - `envelope[i] >= local_mean + delta`, where the mean is taken over the
///   neighbors in `[i - pre_avg, i + post_avg]` excluding `i` itself,
/// - `envelope[i] > 0` (silent frames are never candidates).
///
/// # Returns
///
/// Candidate frame indices in increasing order. Empty envelope yields an
/// empty result.
pub fn pick_candidates(envelope: &[f32], config: &PeakConfig) -> Vec<usize> {
    if envelope.is_empty() {
        return Vec::new();
    }

    let len = envelope.len();
    let mut candidates = Vec::new();

    for i in 0..len {
        let value = envelope[i];
        if value <= 0.0 {
            continue;
        }

        let max_lo = i.saturating_sub(config.pre_max);
        let max_hi = (i + config.post_max).min(len - 1);
        if envelope[max_lo..=max_hi].iter().any(|&v| v > value) {
            continue;
        }

        let avg_lo = i.saturating_sub(config.pre_avg);
        let avg_hi = (i + config.post_avg).min(len - 1);
        let mut sum = 0.0f32;
        let mut count = 0usize;
        for (j, &v) in envelope[avg_lo..=avg_hi].iter().enumerate() {
            if avg_lo + j != i {
                sum += v;
                count += 1;
            }
        }
        let mean = if count > 0 { sum / count as f32 } else { 0.0 };

        if value >= mean + config.delta {
            candidates.push(i);
        }
    }

    log::debug!(
        "Picked {} onset candidates from {} envelope frames",
        candidates.len(),
        len
    );

    candidates
}
