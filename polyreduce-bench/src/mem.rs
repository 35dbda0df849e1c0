//! Heap measurements backed by an instrumented global allocator.
//!
//! A benchmark binary must install [`INSTRUMENTED_SYSTEM`] as its
//! `#[global_allocator]`, otherwise every measurement reads zero.

use stats_alloc::StatsAlloc;

pub type InstrumentedSystem = StatsAlloc<std::alloc::System>;
pub use stats_alloc::INSTRUMENTED_SYSTEM;

mod allocations;
pub use allocations::Allocations;

mod allocation_size;
pub use allocation_size::AllocationSize;
