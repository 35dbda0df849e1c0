//! Point types and related functionality

use nalgebra::Point2;

/// A 2D point with double precision coordinates
///
/// Equality is value equality on both coordinates, so `-0.0 == 0.0` and a
/// point holding a NaN coordinate is never equal to anything.
pub type Point2d = Point2<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        assert_eq!(Point2d::new(1.0, 2.0), Point2d::new(1.0, 2.0));
        assert_eq!(Point2d::new(0.0, -0.0), Point2d::new(-0.0, 0.0));
        assert_ne!(Point2d::new(1.0, 2.0), Point2d::new(2.0, 1.0));
        assert_ne!(Point2d::new(f64::NAN, 0.0), Point2d::new(f64::NAN, 0.0));
    }
}
