//! Baseline geometry for perpendicular distance tests

use crate::point::Point2d;

/// The infinite line through two points, prepared for repeated
/// squared-distance queries.
///
/// The coefficients are computed once per baseline so that each candidate
/// point costs three multiplies and one division, with no square root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    /// `x1 * y2 - x2 * y1`
    dist_xy: f64,
    /// `x2 - x1`
    dist_x: f64,
    /// `y1 - y2`
    dist_y: f64,
    /// Squared length of the segment between the two points
    bottom: f64,
}

impl Baseline {
    /// Create the baseline through `start` and `end`
    pub fn through(start: &Point2d, end: &Point2d) -> Self {
        let dist_x = end.x - start.x;
        let dist_y = start.y - end.y;
        Self {
            dist_xy: start.x * end.y - end.x * start.y,
            dist_x,
            dist_y,
            bottom: dist_x * dist_x + dist_y * dist_y,
        }
    }

    /// Twice the signed area of the triangle formed by the baseline and `point`
    #[inline]
    fn signed_area(&self, point: &Point2d) -> f64 {
        self.dist_xy + self.dist_x * point.y + self.dist_y * point.x
    }

    /// Squared perpendicular distance from `point` to the line.
    ///
    /// No special case for a degenerate baseline: all coefficients are zero,
    /// so for any finite point the division is `0 / 0` and the result is NaN.
    #[inline]
    pub fn squared_distance(&self, point: &Point2d) -> f64 {
        let area = self.signed_area(point);
        (area / self.bottom) * area
    }
}
