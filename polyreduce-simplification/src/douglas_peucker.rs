//! Ramer-Douglas-Peucker reduction
//!
//! The baseline through the first and last point of a range is tested
//! against every interior point. If the farthest point deviates by more than
//! the tolerance it is kept and both halves are reduced against their own
//! baselines; otherwise all interior points of the range are dropped.
//!
//! Ranges are processed from an explicit work stack rather than by native
//! recursion, so adversarial inputs that force one split per point cannot
//! exhaust the thread stack. Each range is reduced independently and the
//! retained indices are sorted at the end, so the visiting order does not
//! affect the result.

use crate::PolylineSimplifier;
use polyreduce_core::{Baseline, Point2d};
use tracing::{debug, trace};

/// Smallest positive `f32` (`2^-149`). A squared tolerance at or below this is a no-op,
/// which also catches tolerances whose square underflows to zero.
pub const MIN_TOLERANCE_SQUARED: f64 = 1.401_298_464_324_817e-45;

/// Tolerance used by [`DouglasPeuckerSimplifier::default`]
pub const DEFAULT_TOLERANCE: f64 = 1.0;

/// Reduce `points` to the subsequence that stays within `tolerance` of the
/// simplified path.
///
/// The input is returned unchanged when it has fewer than three points, or
/// when `tolerance` is NaN, infinite, not positive, or so small that its
/// square is not above [`MIN_TOLERANCE_SQUARED`].
/// Otherwise the output always starts with the first input point and ends
/// with the last.
pub fn reduce(points: &[Point2d], tolerance: f64) -> Vec<Point2d> {
    let Some(tolerance_squared) = reducible_tolerance(points, tolerance) else {
        return points.to_vec();
    };

    let retained = retained_indices(points, tolerance_squared);
    let mut reduced = Vec::with_capacity(retained.len());
    reduced.extend(retained.iter().map(|&index| points[index]));
    reduced
}

/// Sorted indices of the points [`reduce`] would keep.
///
/// On passthrough this is every index of `points`.
pub fn reduce_indices(points: &[Point2d], tolerance: f64) -> Vec<usize> {
    match reducible_tolerance(points, tolerance) {
        Some(tolerance_squared) => retained_indices(points, tolerance_squared),
        None => (0..points.len()).collect(),
    }
}

/// Squared tolerance, or `None` when the input must pass through unchanged
fn reducible_tolerance(points: &[Point2d], tolerance: f64) -> Option<f64> {
    if points.len() < 3 {
        trace!(len = points.len(), "too few points to simplify");
        return None;
    }
    if !tolerance.is_finite() {
        debug!(tolerance, "non-finite tolerance, returning input unchanged");
        return None;
    }
    if tolerance <= 0.0 {
        debug!(tolerance, "tolerance not positive, returning input unchanged");
        return None;
    }
    let tolerance_squared = tolerance * tolerance;
    if tolerance_squared <= MIN_TOLERANCE_SQUARED {
        debug!(tolerance, "tolerance too small to reduce, returning input unchanged");
        return None;
    }
    Some(tolerance_squared)
}

/// Requires `points.len() >= 3`
fn retained_indices(points: &[Point2d], tolerance_squared: f64) -> Vec<usize> {
    let first = 0;
    let original_last = points.len() - 1;

    // The original bounds are always kept, even when the working range shrinks below.
    let mut retained = vec![first, original_last];

    // A closing run equal to the first point would collapse the baseline.
    let mut last = original_last;
    while last > first && points[first] == points[last] {
        last -= 1;
    }
    if last < original_last {
        trace!(original_last, last, "trimmed points equal to the start from the working range");
    }

    reduce_range(points, first, last, tolerance_squared, &mut retained);

    retained.sort_unstable();
    debug_assert!(retained.windows(2).all(|pair| pair[0] < pair[1]));

    debug!(
        input = points.len(),
        retained = retained.len(),
        "douglas-peucker reduction complete"
    );
    retained
}

/// Push the index of every point in `(first, last)` that must be kept.
fn reduce_range(
    points: &[Point2d],
    first: usize,
    last: usize,
    tolerance_squared: f64,
    retained: &mut Vec<usize>,
) {
    let mut pending = vec![(first, last)];

    while let Some((first, last)) = pending.pop() {
        let Some((index_farthest, max_distance)) = farthest_point(points, first, last) else {
            continue;
        };

        if max_distance > tolerance_squared {
            retained.push(index_farthest);
            pending.push((index_farthest, last));
            pending.push((first, index_farthest));
        }
    }
}

/// Interior point of `(first, last)` with the greatest squared distance from
/// the baseline, together with that distance.
///
/// The range's start index is never a candidate, so every split lands
/// strictly inside `(first, last)`. Only strictly greater distances replace
/// the current maximum, so the earliest index wins ties and a NaN distance is
/// never selected. Returns `None` when no interior point is farther than zero.
fn farthest_point(points: &[Point2d], first: usize, last: usize) -> Option<(usize, f64)> {
    if last <= first + 1 {
        return None;
    }

    let baseline = Baseline::through(&points[first], &points[last]);
    let mut max_distance = 0.0;
    let mut index_farthest = None;

    for (index, point) in points.iter().enumerate().take(last).skip(first + 1) {
        let distance = baseline.squared_distance(point);
        if distance > max_distance {
            max_distance = distance;
            index_farthest = Some(index);
        }
    }

    index_farthest.map(|index| (index, max_distance))
}

/// Ramer-Douglas-Peucker simplifier with a fixed tolerance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DouglasPeuckerSimplifier {
    /// Maximum perpendicular deviation, in coordinate units, for a point to be dropped
    pub tolerance: f64,
}

impl Default for DouglasPeuckerSimplifier {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl DouglasPeuckerSimplifier {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Reduce a slice of points with this simplifier's tolerance
    pub fn reduce(&self, points: &[Point2d]) -> Vec<Point2d> {
        reduce(points, self.tolerance)
    }
}

impl PolylineSimplifier for DouglasPeuckerSimplifier {
    fn simplify_indices(&self, points: &[Point2d]) -> Vec<usize> {
        reduce_indices(points, self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyreduce_core::Polyline;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2d> {
        coords.iter().map(|&(x, y)| Point2d::new(x, y)).collect()
    }

    // ---- Passthrough tests ----

    #[test]
    fn test_empty_input() {
        assert!(reduce(&[], 1.0).is_empty());
        assert!(reduce_indices(&[], 1.0).is_empty());
    }

    #[test]
    fn test_fewer_than_three_points() {
        let one = pts(&[(4.0, 2.0)]);
        assert_eq!(reduce(&one, 1.0), one);

        let two = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(reduce(&two, 1.0), two);
        assert_eq!(reduce_indices(&two, 1.0), vec![0, 1]);
    }

    #[test]
    fn test_non_finite_tolerance() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(reduce(&points, f64::NAN), points);
        assert_eq!(reduce(&points, f64::INFINITY), points);
        assert_eq!(reduce(&points, f64::NEG_INFINITY), points);
        assert_eq!(reduce_indices(&points, f64::NAN), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_negligible_tolerance() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(reduce(&points, 0.0), points);
        assert_eq!(reduce(&points, -1.0), points);
        assert_eq!(reduce(&points, f64::MIN_POSITIVE), points);
    }

    #[test]
    fn test_underflowing_tolerance_passes_through() {
        // These square to zero or to less than the smallest positive f32
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        for tolerance in [1e-300, 1e-200, 1e-100, 1e-30, 3e-23] {
            assert_eq!(reduce(&points, tolerance), points, "tolerance {}", tolerance);
            assert_eq!(reduce_indices(&points, tolerance), vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_smallest_reducing_tolerance() {
        assert_eq!(MIN_TOLERANCE_SQUARED, f32::from_bits(1) as f64);

        // 1e-22 squares to 1e-44, just above the cutoff
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(reduce(&points, 1e-22), pts(&[(0.0, 0.0), (3.0, 0.0)]));
    }

    // ---- Scenario tests ----

    #[test]
    fn test_collinear_points() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(reduce(&points, 0.5), pts(&[(0.0, 0.0), (3.0, 0.0)]));
        assert_eq!(reduce_indices(&points, 0.5), vec![0, 3]);
    }

    #[test]
    fn test_single_spike() {
        let points = pts(&[(0.0, 0.0), (1.0, 5.0), (2.0, 0.0)]);
        assert_eq!(reduce(&points, 1.0), points);
    }

    #[test]
    fn test_small_deviation_dropped() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.1), (2.0, 0.0)]);
        assert_eq!(reduce(&points, 0.2), pts(&[(0.0, 0.0), (2.0, 0.0)]));
    }

    #[test]
    fn test_multiple_splits() {
        let points = pts(&[(0.0, 0.0), (0.5, 0.6), (1.0, 1.0), (1.6, 0.5), (2.0, 0.0)]);
        assert_eq!(
            reduce(&points, 0.2),
            pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)])
        );
    }

    #[test]
    fn test_deviation_equal_to_tolerance_is_dropped() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        assert_eq!(reduce(&points, 1.0), pts(&[(0.0, 0.0), (2.0, 0.0)]));
    }

    #[test]
    fn test_tie_keeps_first_index() {
        // (1, 2) and (3, 2) sit at the same distance from the outer baseline
        let points = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0), (3.0, 2.0), (4.0, 0.0)]);
        assert_eq!(farthest_point(&points, 0, 4), Some((1, 4.0)));
        assert_eq!(
            reduce(&points, 1.5),
            pts(&[(0.0, 0.0), (1.0, 2.0), (4.0, 0.0)])
        );
    }

    #[test]
    fn test_farthest_point_stays_inside_range() {
        // Index 0 is far from the (1, 3) baseline but outside the open range
        let points = pts(&[(0.0, 50.0), (1.0, 0.0), (2.0, 1.0), (3.0, 0.0), (4.0, 0.0)]);
        assert_eq!(farthest_point(&points, 1, 3), Some((2, 1.0)));
        assert_eq!(farthest_point(&points, 1, 2), None);
        assert_eq!(farthest_point(&points, 3, 4), None);
    }

    #[test]
    fn test_interior_duplicate_run() {
        let points = pts(&[(0.0, 0.0), (1.0, 3.0), (1.0, 3.0), (1.0, 3.0), (2.0, 0.0)]);
        assert_eq!(
            reduce(&points, 1.0),
            pts(&[(0.0, 0.0), (1.0, 3.0), (2.0, 0.0)])
        );
    }

    // ---- Duplicate endpoint tests ----

    #[test]
    fn test_duplicate_endpoint() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 0.0)]);
        // The working range shrinks to [0, 2], where (1, 1) lies on the baseline.
        // Index 2 only bounded the working range, so it is not kept.
        assert_eq!(reduce_indices(&points, 1.0), vec![0, 3]);
        assert_eq!(reduce(&points, 1.0), pts(&[(0.0, 0.0), (0.0, 0.0)]));
    }

    #[test]
    fn test_closed_loop_keeps_original_endpoints() {
        let points = pts(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0), (0.0, 0.0)]);
        assert_eq!(
            reduce(&points, 1.0),
            pts(&[(0.0, 0.0), (5.0, 5.0), (0.0, 0.0)])
        );
    }

    #[test]
    fn test_all_points_identical() {
        let points = pts(&[(1.0, 1.0); 5]);
        assert_eq!(reduce_indices(&points, 1.0), vec![0, 4]);
        assert_eq!(reduce(&points, 1.0), pts(&[(1.0, 1.0), (1.0, 1.0)]));
    }

    // ---- Degenerate geometry ----

    #[test]
    fn test_degenerate_baseline_range_keeps_nothing() {
        // A range whose bounds coincide: every distance is NaN, so nothing is selected
        let points = pts(&[(1.0, 1.0), (5.0, 5.0), (9.0, -3.0), (1.0, 1.0)]);
        assert_eq!(farthest_point(&points, 0, 3), None);

        let mut retained = Vec::new();
        reduce_range(&points, 0, 3, 1.0, &mut retained);
        assert!(retained.is_empty());
    }

    #[test]
    fn test_nan_coordinates_terminate() {
        let points = pts(&[(0.0, 0.0), (f64::NAN, 1.0), (2.0, 7.0), (3.0, 0.0)]);
        let reduced = reduce(&points, 1.0);
        assert_eq!(reduced.first(), Some(&Point2d::new(0.0, 0.0)));
        assert_eq!(reduced.last(), Some(&Point2d::new(3.0, 0.0)));
        assert!(reduced.contains(&Point2d::new(2.0, 7.0)));
    }

    #[test]
    fn test_deep_zigzag_does_not_overflow() {
        // Every split lands next to the range start, one level per point if recursed natively
        let points: Vec<Point2d> = (0..4001)
            .map(|i| Point2d::new(i as f64, (i % 2) as f64))
            .collect();
        let reduced = reduce(&points, 0.25);
        assert_eq!(reduced, points);
    }

    #[test]
    fn test_input_not_modified() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let copy = points.clone();
        let _ = reduce(&points, 0.5);
        assert_eq!(points, copy);
    }

    // ---- Simplifier tests ----

    #[test]
    fn test_simplifier_defaults() {
        let s = DouglasPeuckerSimplifier::default();
        assert_eq!(s.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(DouglasPeuckerSimplifier::new(2.0).with_tolerance(0.5).tolerance, 0.5);
    }

    #[test]
    fn test_simplifier_on_polyline() {
        let s = DouglasPeuckerSimplifier::new(0.5);
        let line = Polyline::from_points(pts(&[(0.0, 0.0), (1.0, 1.4), (2.0, 3.0), (3.0, 0.0)]));
        let simplified = s.simplify(&line);
        assert_eq!(simplified.as_slice(), pts(&[(0.0, 0.0), (2.0, 3.0), (3.0, 0.0)]).as_slice());
        assert_eq!(s.reduce(line.as_slice()), simplified.into_points());
    }
}
