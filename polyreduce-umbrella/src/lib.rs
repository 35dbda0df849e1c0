//! # polyreduce
//!
//! Ramer-Douglas-Peucker polyline simplification for Rust.
//!
//! This is the umbrella crate that provides convenient access to all polyreduce functionality.
//! You can use this crate to get everything in one place, or use individual crates for
//! more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Basic 2D data structures (Point2d, Polyline, Baseline, etc.)
//! - **Simplification**: Douglas-Peucker reduction, single and batched
//! - **I/O**: Delimited text polylines (CSV, XY)
//!
//! ## Quick Start
//!
//! ```rust
//! use polyreduce::prelude::*;
//!
//! let points = vec![
//!     Point2d::new(0.0, 0.0),
//!     Point2d::new(1.0, 0.1),
//!     Point2d::new(2.0, -0.1),
//!     Point2d::new(3.0, 5.0),
//!     Point2d::new(4.0, 6.0),
//!     Point2d::new(5.0, 7.0),
//! ];
//!
//! let reduced = reduce(&points, 1.0);
//! assert_eq!(reduced.first(), points.first());
//! assert_eq!(reduced.last(), points.last());
//! assert!(reduced.len() < points.len());
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables io and simplification
//! - `simplification`: Polyline reduction
//! - `io`: File format support
//! - `all`: Enables all features

// Re-export core functionality
pub use polyreduce_core::*;

// Re-export sub-crates
#[cfg(feature = "io")]
pub use polyreduce_io as io;

#[cfg(feature = "simplification")]
pub use polyreduce_simplification as simplification;

/// Convenient imports for common use cases
pub mod prelude {
    pub use polyreduce_core::*;

    #[cfg(feature = "io")]
    pub use polyreduce_io::*;

    #[cfg(feature = "simplification")]
    pub use polyreduce_simplification::*;
}
