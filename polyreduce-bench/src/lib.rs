//! Benchmark support shared by the polyreduce crates

use criterion::measurement::Measurement;

pub mod mem;

/// A criterion measurement with a label for benchmark group names
pub trait PolyreduceMeasurement: Measurement {
    const NAME: &'static str;
}
