use criterion::measurement::{Measurement, ValueFormatter};
use criterion::Throughput;
use stats_alloc::INSTRUMENTED_SYSTEM;

use crate::PolyreduceMeasurement;

/// Number of heap allocations made during a benchmark iteration
pub struct Allocations;

impl PolyreduceMeasurement for Allocations {
    const NAME: &'static str = "allocations";
}

impl Measurement for Allocations {
    type Intermediate = usize;
    type Value = usize;

    fn start(&self) -> Self::Intermediate {
        INSTRUMENTED_SYSTEM.stats().allocations
    }

    fn end(&self, start: Self::Intermediate) -> Self::Value {
        INSTRUMENTED_SYSTEM.stats().allocations - start
    }

    fn add(&self, &v1: &Self::Value, &v2: &Self::Value) -> Self::Value {
        v1 + v2
    }

    fn zero(&self) -> Self::Value {
        0
    }

    fn to_f64(&self, &value: &Self::Value) -> f64 {
        value as f64
    }

    fn formatter(&self) -> &dyn ValueFormatter {
        &AllocationsFormatter
    }
}

struct AllocationsFormatter;

impl ValueFormatter for AllocationsFormatter {
    fn scale_values(&self, _: f64, _: &mut [f64]) -> &'static str {
        "allocations"
    }

    fn scale_throughputs(&self, _: f64, _: &Throughput, _: &mut [f64]) -> &'static str {
        "allocations"
    }

    fn scale_for_machines(&self, _: &mut [f64]) -> &'static str {
        "allocations"
    }
}
