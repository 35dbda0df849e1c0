//! Shared pieces of the polyreduce command-line tools

use clap::ValueEnum;
use polyreduce_core::{Point2d, Polyline};
use polyreduce_io::{Delimiter, XyCsvWriteOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the fmt subscriber, filtered by `RUST_LOG` and defaulting to `info`
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Output field separator accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DelimiterArg {
    Comma,
    Space,
    Tab,
    Semicolon,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Comma => Delimiter::Comma,
            DelimiterArg::Space => Delimiter::Space,
            DelimiterArg::Tab => Delimiter::Tab,
            DelimiterArg::Semicolon => Delimiter::Semicolon,
        }
    }
}

/// Write options for `output`: `.xy` files are space separated unless a delimiter is given
pub fn write_options(output: &Path, header: bool, delimiter: Option<DelimiterArg>) -> XyCsvWriteOptions {
    let is_xy = output
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xy"));

    let options = if header {
        XyCsvWriteOptions::csv_with_header()
    } else {
        XyCsvWriteOptions::csv()
    };
    let default_delimiter = if is_xy { Delimiter::Space } else { Delimiter::Comma };
    options.with_delimiter(delimiter.map_or(default_delimiter, Delimiter::from))
}

/// `dir/name.ext` becomes `dir/name_reduced.ext`
pub fn reduced_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "polyline".to_string());

    let file_name = match input.extension() {
        Some(ext) => format!("{}_reduced.{}", stem, ext.to_string_lossy()),
        None => format!("{}_reduced", stem),
    };
    input.with_file_name(file_name)
}

/// Seeded random walk that always advances along x
pub fn random_walk(len: usize, seed: u64) -> Polyline {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut current = Point2d::new(0.0, 0.0);
    let mut polyline = Polyline::with_capacity(len);

    for _ in 0..len {
        polyline.push(current);
        current.x += rng.gen_range(0.1..1.0);
        current.y += rng.gen_range(-1.0..1.0);
    }

    polyline
}

/// Min, mean and max of a set of timings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingStats {
    pub min: Duration,
    pub mean: Duration,
    pub max: Duration,
}

impl TimingStats {
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        let min = samples.iter().min().copied()?;
        let max = samples.iter().max().copied()?;
        let total: Duration = samples.iter().sum();
        let count = u32::try_from(samples.len()).ok()?;

        Some(Self {
            min,
            mean: total / count,
            max,
        })
    }
}
