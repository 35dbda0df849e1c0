//! Reduce a polyline file with Ramer-Douglas-Peucker
//!
//! Reads one point per line, reduces with the given tolerance and writes the
//! retained points. Without an output path the result lands next to the input
//! as `<name>_reduced.<ext>`.

use anyhow::Context;
use clap::Parser;
use polyreduce_demos::{init_tracing, reduced_path, write_options, DelimiterArg};
use polyreduce_io::{XyCsvReader, XyCsvWriter};
use polyreduce_simplification::{DouglasPeuckerSimplifier, PolylineSimplifier, ReductionSummary, DEFAULT_TOLERANCE};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "polyreduce", version, about = "Simplify a polyline with Ramer-Douglas-Peucker")]
struct Opts {
    /// Input file, one x,y point per line
    input: PathBuf,

    /// Output file
    output: Option<PathBuf>,

    /// Maximum perpendicular deviation of a dropped point
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Write an x,y header line
    #[arg(long)]
    header: bool,

    /// Output field separator
    #[arg(short, long, value_enum)]
    delimiter: Option<DelimiterArg>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let opts = Opts::parse();

    let polyline = XyCsvReader::read_polyline(&opts.input)
        .with_context(|| format!("failed to read {}", opts.input.display()))?;
    info!(
        points = polyline.len(),
        closed = polyline.is_closed(),
        length = polyline.length(),
        "read polyline"
    );

    let simplifier = DouglasPeuckerSimplifier::new(opts.tolerance);
    let start = Instant::now();
    let reduced = simplifier.simplify(&polyline);
    let elapsed = start.elapsed();

    let output = opts.output.unwrap_or_else(|| reduced_path(&opts.input));
    let options = write_options(&output, opts.header, opts.delimiter);
    XyCsvWriter::write_polyline(&reduced, &output, &options)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let summary = ReductionSummary::new(polyline.as_slice(), reduced.as_slice());
    info!(tolerance = opts.tolerance, ?elapsed, "{}", summary);
    info!(output = %output.display(), "wrote reduced polyline");

    Ok(())
}
