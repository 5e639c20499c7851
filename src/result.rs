//! Segmentation result types

use serde::{Deserialize, Serialize};

use crate::features::OnsetEvent;
use crate::timeline::Timeline;

/// Complete output of one segmentation run
///
/// Serializable so a host can persist it directly (e.g. as the `cuts.json`
/// document a web wizard hands to its renderer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationResult {
    /// Detected onset events that passed the confidence threshold
    pub onsets: Vec<OnsetEvent>,

    /// The frame-aligned cut timeline covering the full track
    pub timeline: Timeline,

    /// Flash cut times spliced into the timeline; empty when no flash
    /// window was configured or the window produced no cuts
    pub flash_cuts: Vec<f64>,

    /// Run metadata
    pub metadata: SegmentationMetadata,
}

/// Metadata about a segmentation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationMetadata {
    /// Track duration in seconds, derived from the sample count
    pub duration_seconds: f64,

    /// Sample rate of the analyzed audio in Hz
    pub sample_rate: u32,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f32,

    /// Engine version that produced this result
    pub engine_version: String,
}
