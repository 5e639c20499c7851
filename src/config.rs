//! Configuration parameters for timeline segmentation

use crate::error::SegmentError;
use crate::flash::FlashWindow;

/// Segmentation configuration parameters
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    // Timeline
    /// Video frame rate the timeline is quantized to (default: 30.0)
    pub fps: f64,

    /// Maximum allowed gap between consecutive cut points in seconds (default: 5.0)
    /// Gaps longer than this are padded with evenly spaced extra splits
    pub max_gap: f64,

    // Onset detection
    /// Confidence threshold in [0, 1] for keeping onset candidates (default: 0.30)
    pub threshold: f32,

    /// Hop size in samples between strength envelope frames (default: 512)
    pub hop_size: usize,

    // Flash window
    /// Optional sub-region requiring denser, minimum-gap-constrained cuts
    ///
    /// Flash detection only runs when `flash.end > flash.start`; a degenerate
    /// or reversed window configured here is skipped, not an error.
    pub flash: Option<FlashWindow>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            fps: 30.0,
            max_gap: 5.0,
            threshold: 0.30,
            hop_size: 512,
            flash: None,
        }
    }
}

impl SegmenterConfig {
    /// Validate configuration, failing fast on out-of-range parameters
    ///
    /// # Errors
    ///
    /// Returns `SegmentError::InvalidConfig` if fps or max_gap is non-positive
    /// or non-finite, the threshold is outside [0, 1], the hop size is zero,
    /// or a configured flash window carries non-finite bounds.
    pub fn validate(&self) -> Result<(), SegmentError> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(SegmentError::InvalidConfig(format!(
                "fps must be finite and > 0, got {}",
                self.fps
            )));
        }

        if !self.max_gap.is_finite() || self.max_gap <= 0.0 {
            return Err(SegmentError::InvalidConfig(format!(
                "max_gap must be finite and > 0, got {}",
                self.max_gap
            )));
        }

        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(SegmentError::InvalidConfig(format!(
                "threshold must be in [0.0, 1.0], got {}",
                self.threshold
            )));
        }

        if self.hop_size == 0 {
            return Err(SegmentError::InvalidConfig(
                "hop_size must be > 0".to_string(),
            ));
        }

        if let Some(window) = &self.flash {
            if !window.start.is_finite() || !window.end.is_finite() || !window.min_gap.is_finite() {
                return Err(SegmentError::InvalidConfig(format!(
                    "flash window bounds must be finite, got [{}, {}] min_gap {}",
                    window.start, window.end, window.min_gap
                )));
            }
        }

        Ok(())
    }
}
