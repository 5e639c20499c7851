//! Timeline construction modules
//!
//! This module contains the interval machinery that turns onset times into a
//! frame-aligned cut timeline:
//! - Frame-grid quantization
//! - Gap-bounded interval construction
//! - Flash cut splicing

pub mod intervals;
pub mod quantize;
pub mod splice;

use serde::{Deserialize, Serialize};

use crate::error::SegmentError;

/// A single cut interval in seconds
///
/// Within a produced [`Timeline`] intervals are contiguous and ordered:
/// each interval's `end` equals the next interval's `start`. Zero-length
/// intervals can occur where two onsets quantize onto the same frame; callers
/// must tolerate them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl Interval {
    /// Create a new interval
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Interval length in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// An ordered sequence of intervals covering `[0, quantized duration]`
///
/// Created fresh per analysis run and never mutated in place; splicing
/// produces a new `Timeline` from an existing one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Ordered, contiguous intervals
    pub intervals: Vec<Interval>,
}

impl Timeline {
    /// Number of intervals
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// True if the timeline holds no intervals
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Interval start times as a parallel array
    pub fn starts(&self) -> Vec<f64> {
        self.intervals.iter().map(|iv| iv.start).collect()
    }

    /// Interval end times as a parallel array
    pub fn ends(&self) -> Vec<f64> {
        self.intervals.iter().map(|iv| iv.end).collect()
    }

    /// Build a timeline from parallel start/end arrays
    ///
    /// # Errors
    ///
    /// Returns `SegmentError::InvalidInput` if the arrays differ in length.
    pub fn from_bounds(starts: &[f64], ends: &[f64]) -> Result<Self, SegmentError> {
        if starts.len() != ends.len() {
            return Err(SegmentError::InvalidInput(format!(
                "starts/ends length mismatch: {} vs {}",
                starts.len(),
                ends.len()
            )));
        }

        Ok(Self {
            intervals: starts
                .iter()
                .zip(ends.iter())
                .map(|(&start, &end)| Interval::new(start, end))
                .collect(),
        })
    }
}
