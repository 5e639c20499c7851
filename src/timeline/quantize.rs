//! Frame-grid quantization
//!
//! Snaps arbitrary timestamps onto the nearest frame boundary for a given
//! frame rate. The rounding mode is round-half-away-from-zero (`f64::round`)
//! and is used consistently across the whole engine; mixing rounding modes
//! would break the contiguity invariants of the interval builder.

/// Snap a timestamp to the nearest multiple of `1/fps`
///
/// Idempotent: `quantize_to_frame(quantize_to_frame(t, fps), fps)` equals
/// `quantize_to_frame(t, fps)`.
///
/// # Arguments
///
/// * `t` - Time in seconds
/// * `fps` - Frame rate, must be > 0 (validated by callers)
pub fn quantize_to_frame(t: f64, fps: f64) -> f64 {
    (t * fps).round() / fps
}

/// Snap a sequence of timestamps to the frame grid
pub fn quantize_times(times: &[f64], fps: f64) -> Vec<f64> {
    times.iter().map(|&t| quantize_to_frame(t, fps)).collect()
}

/// Round a time to millisecond precision (3 decimal digits)
///
/// Applied to interval boundaries on output for stability; both sides of a
/// shared boundary receive the same rounding, so contiguity is preserved.
pub fn round_millis(t: f64) -> f64 {
    (t * 1000.0).round() / 1000.0
}
