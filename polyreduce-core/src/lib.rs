//! Core data structures for polyreduce
//!
//! This crate provides the fundamental types for 2D polyline processing,
//! including points, baseline lines, polylines, and errors.

pub mod point;
pub mod line;
pub mod polyline;
pub mod error;

pub use point::*;
pub use line::*;
pub use polyline::*;
pub use error::*;
