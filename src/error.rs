//! Error types for the timeline segmentation engine

use std::fmt;

/// Errors that can occur during timeline segmentation
#[derive(Debug, Clone)]
pub enum SegmentError {
    /// Invalid configuration (non-positive fps, non-positive max gap, ...)
    ///
    /// Configuration errors fail fast and are never silently clamped.
    InvalidConfig(String),

    /// Invalid input data (empty sample buffer, non-finite timestamps, ...)
    InvalidInput(String),

    /// Processing error during segmentation
    ProcessingError(String),
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            SegmentError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SegmentError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for SegmentError {}
