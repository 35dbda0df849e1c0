//! I/O operations for polylines
//!
//! This crate reads and writes polylines stored as delimited text, one
//! point per line.

pub mod xy_csv;

pub use xy_csv::{
    ColumnType, Delimiter, XyCsvReader, XyCsvSchema, XyCsvStreamingReader, XyCsvWriteOptions, XyCsvWriter,
};

use polyreduce_core::{Error, Polyline, Result};
use std::path::Path;

/// Trait for reading polylines from files
pub trait PolylineReader {
    fn read_polyline<P: AsRef<Path>>(path: P) -> Result<Polyline>;
}

/// Trait for writing polylines to files
pub trait PolylineWriter {
    fn write_polyline<P: AsRef<Path>>(polyline: &Polyline, path: P) -> Result<()>;
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
}

/// Auto-detect format and read a polyline
pub fn read_polyline<P: AsRef<Path>>(path: P) -> Result<Polyline> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("csv") | Some("txt") | Some("xy") => <XyCsvReader as PolylineReader>::read_polyline(path),
        _ => Err(Error::UnsupportedFormat(format!(
            "Unsupported polyline format: {:?}",
            path.extension()
        ))),
    }
}

/// Auto-detect format and write a polyline
pub fn write_polyline<P: AsRef<Path>>(polyline: &Polyline, path: P) -> Result<()> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("csv") | Some("txt") | Some("xy") => <XyCsvWriter as PolylineWriter>::write_polyline(polyline, path),
        _ => Err(Error::UnsupportedFormat(format!(
            "Unsupported polyline format: {:?}",
            path.extension()
        ))),
    }
}
