//! Reduce several polyline files in parallel
//!
//! Each input is written next to itself as `<name>_reduced.<ext>`.

use anyhow::Context;
use clap::Parser;
use polyreduce_core::Polyline;
use polyreduce_demos::{init_tracing, reduced_path, write_options};
use polyreduce_io::{XyCsvReader, XyCsvWriter};
use polyreduce_simplification::{reduce_all, ReductionSummary, DEFAULT_TOLERANCE};
use rayon::ThreadPoolBuilder;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "reduce_many", about = "Simplify many polyline files at once")]
struct Opts {
    /// Input files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Maximum perpendicular deviation of a dropped point
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Number of worker threads, all cores when omitted
    #[arg(short, long)]
    ncpu: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let opts = Opts::parse();

    if let Some(ncpu) = opts.ncpu {
        ThreadPoolBuilder::new()
            .num_threads(ncpu)
            .build_global()
            .context("failed to configure the thread pool")?;
    }

    let polylines = opts
        .inputs
        .iter()
        .map(|path| {
            XyCsvReader::read_polyline(path).with_context(|| format!("failed to read {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<Polyline>>>()?;

    let start = Instant::now();
    let reduced = reduce_all(&polylines, opts.tolerance);
    info!(files = polylines.len(), elapsed = ?start.elapsed(), "reduced all inputs");

    for ((input, polyline), result) in opts.inputs.iter().zip(&polylines).zip(&reduced) {
        let output = reduced_path(input);
        XyCsvWriter::write_polyline(result, &output, &write_options(&output, false, None))
            .with_context(|| format!("failed to write {}", output.display()))?;

        let summary = ReductionSummary::new(polyline.as_slice(), result.as_slice());
        info!(output = %output.display(), "{}", summary);
    }

    Ok(())
}
