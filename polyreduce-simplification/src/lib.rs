//! Polyline simplification algorithms
//!
//! This crate reduces the number of points in a 2D path while keeping its
//! shape within a deviation tolerance:
//! - Ramer-Douglas-Peucker reduction
//! - Batch reduction of many independent polylines
//! - Before/after reduction summaries

pub mod douglas_peucker;
pub mod batch;
pub mod summary;

pub use douglas_peucker::*;
pub use batch::*;
pub use summary::*;

use polyreduce_core::{Point2d, Polyline};

/// Simplify a polyline by discarding points that do not contribute to its shape
pub trait PolylineSimplifier {
    /// Sorted indices of the points to keep
    fn simplify_indices(&self, points: &[Point2d]) -> Vec<usize>;

    /// Simplified copy of `polyline`; the input is never modified
    fn simplify(&self, polyline: &Polyline) -> Polyline {
        self.simplify_indices(polyline.as_slice())
            .into_iter()
            .map(|index| polyline[index])
            .collect()
    }
}
