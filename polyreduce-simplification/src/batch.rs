//! Batch reduction of independent polylines
//!
//! Each polyline is reduced by a single call on one rayon task. A call owns
//! all of its working state, so no synchronization is needed between tasks.
//! One polyline is never split across tasks.

use crate::{DouglasPeuckerSimplifier, PolylineSimplifier};
use polyreduce_core::Polyline;
use rayon::prelude::*;
use tracing::debug;

/// Reduce every polyline with the same tolerance, in parallel.
///
/// The output has one entry per input, in input order.
pub fn reduce_all(polylines: &[Polyline], tolerance: f64) -> Vec<Polyline> {
    simplify_all(&DouglasPeuckerSimplifier::new(tolerance), polylines)
}

/// Run any simplifier over many polylines in parallel
pub fn simplify_all<S>(simplifier: &S, polylines: &[Polyline]) -> Vec<Polyline>
where
    S: PolylineSimplifier + Sync,
{
    debug!(count = polylines.len(), "simplifying polylines in parallel");
    polylines
        .par_iter()
        .map(|polyline| simplifier.simplify(polyline))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce;
    use polyreduce_core::Point2d;

    fn make_wave(len: usize, amplitude: f64) -> Polyline {
        (0..len)
            .map(|i| {
                let x = i as f64 * 0.1;
                Point2d::new(x, amplitude * x.sin())
            })
            .collect()
    }

    #[test]
    fn test_empty_batch() {
        assert!(reduce_all(&[], 1.0).is_empty());
    }

    #[test]
    fn test_batch_matches_sequential() {
        let polylines: Vec<Polyline> = (1..=8).map(|k| make_wave(50 * k, k as f64)).collect();

        let batch = reduce_all(&polylines, 0.05);
        assert_eq!(batch.len(), polylines.len());

        for (input, output) in polylines.iter().zip(&batch) {
            assert_eq!(output.as_slice(), reduce(input.as_slice(), 0.05).as_slice());
        }
    }

    #[test]
    fn test_batch_mixed_sizes() {
        let polylines = vec![
            Polyline::new(),
            Polyline::from_points(vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)]),
            make_wave(200, 3.0),
        ];

        let batch = reduce_all(&polylines, 0.1);
        assert!(batch[0].is_empty());
        assert_eq!(batch[1], polylines[1]);
        assert!(batch[2].len() < polylines[2].len());
    }
}
