//! Onset strength envelope
//!
//! Computes a per-hop onset strength curve from raw samples:
//! 1. Divide audio into overlapping Hann-windowed frames (frame_size, hop)
//! 2. Compute the STFT magnitude spectrum per frame
//! 3. Per bin, take the rectified first difference between frames
//! 4. Aggregate per frame with the median across bins
//!
//! Median aggregation keeps the envelope flat through sustained tones and
//! lets broadband (percussive) attacks dominate, which is what a cut
//! timeline wants to react to. The envelope has one value per hop with
//! `envelope[0] == 0.0` (no flux before the first frame), so envelope index
//! `i` maps to time `i * hop / sample_rate`.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::error::SegmentError;

/// Compute the onset strength envelope of a sample buffer
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `frame_size` - Analysis window size in samples (typically 2048)
/// * `hop` - Hop size between frames (typically 512)
///
/// # Returns
///
/// One non-negative strength value per frame. Input shorter than one frame
/// (or yielding fewer than two frames) produces an empty envelope, which is
/// a documented degenerate case rather than an error.
///
/// # Errors
///
/// Returns `SegmentError::InvalidConfig` if `frame_size` or `hop` is zero.
pub fn strength_envelope(
    samples: &[f32],
    frame_size: usize,
    hop: usize,
) -> Result<Vec<f32>, SegmentError> {
    if frame_size == 0 {
        return Err(SegmentError::InvalidConfig(
            "frame_size must be > 0".to_string(),
        ));
    }

    if hop == 0 {
        return Err(SegmentError::InvalidConfig("hop must be > 0".to_string()));
    }

    if samples.is_empty() {
        return Ok(Vec::new());
    }

    if samples.len() < frame_size {
        log::warn!(
            "Input ({} samples) shorter than one analysis window ({}), returning empty envelope",
            samples.len(),
            frame_size
        );
        return Ok(Vec::new());
    }

    let num_frames = (samples.len() - frame_size) / hop + 1;
    if num_frames < 2 {
        // Flux needs at least two frames
        return Ok(Vec::new());
    }

    log::debug!(
        "Computing strength envelope: {} samples, frame={}, hop={}, {} frames",
        samples.len(),
        frame_size,
        hop,
        num_frames
    );

    // Hann window: sin^2(pi * i / N)
    let window: Vec<f32> = (0..frame_size)
        .map(|i| {
            let x = std::f32::consts::PI * i as f32 / frame_size as f32;
            x.sin() * x.sin()
        })
        .collect();

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(frame_size);

    let n_bins = frame_size / 2 + 1;
    let mut buffer = vec![Complex::new(0.0f32, 0.0); frame_size];
    let mut prev_mags = vec![0.0f32; n_bins];
    let mut mags = vec![0.0f32; n_bins];
    let mut diffs = vec![0.0f32; n_bins];

    let mut envelope = Vec::with_capacity(num_frames);
    envelope.push(0.0);

    for frame_idx in 0..num_frames {
        let start = frame_idx * hop;
        for (slot, (&sample, &w)) in buffer
            .iter_mut()
            .zip(samples[start..start + frame_size].iter().zip(window.iter()))
        {
            *slot = Complex::new(sample * w, 0.0);
        }

        fft.process(&mut buffer);

        for (mag, bin) in mags.iter_mut().zip(buffer.iter().take(n_bins)) {
            *mag = bin.norm();
        }

        if frame_idx > 0 {
            for ((diff, &mag), &prev) in diffs.iter_mut().zip(mags.iter()).zip(prev_mags.iter()) {
                *diff = (mag - prev).max(0.0);
            }
            envelope.push(median(&mut diffs));
        }

        std::mem::swap(&mut prev_mags, &mut mags);
    }

    Ok(envelope)
}

/// Median of a scratch slice; the slice is sorted in place
fn median(values: &mut [f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = values.len() / 2;
    if values.len().is_multiple_of(2) {
        (values[mid - 1] + values[mid]) * 0.5
    } else {
        values[mid]
    }
}
