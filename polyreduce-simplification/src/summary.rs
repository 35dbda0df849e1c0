//! Before/after statistics for a reduction

use polyreduce_core::{path_length, Point2d};
use std::fmt;

/// Point counts and path lengths of an input and its reduced output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReductionSummary {
    pub input_points: usize,
    pub output_points: usize,
    pub input_length: f64,
    pub output_length: f64,
}

impl ReductionSummary {
    pub fn new(input: &[Point2d], output: &[Point2d]) -> Self {
        Self {
            input_points: input.len(),
            output_points: output.len(),
            input_length: path_length(input),
            output_length: path_length(output),
        }
    }

    /// Number of points dropped by the reduction
    pub fn removed_points(&self) -> usize {
        self.input_points.saturating_sub(self.output_points)
    }

    /// Fraction of input points kept, in `[0, 1]`. An empty input counts as fully kept.
    pub fn retention_ratio(&self) -> f64 {
        if self.input_points == 0 {
            return 1.0;
        }
        self.output_points as f64 / self.input_points as f64
    }

    /// Output path length relative to the input path length
    pub fn length_ratio(&self) -> f64 {
        if self.input_length == 0.0 {
            return 1.0;
        }
        self.output_length / self.input_length
    }
}

impl fmt::Display for ReductionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} points ({:.1}% kept), length {:.3} -> {:.3}",
            self.input_points,
            self.output_points,
            self.retention_ratio() * 100.0,
            self.input_length,
            self.output_length,
        )
    }
}
