//! Time `reduce` on a generated random walk

use clap::Parser;
use polyreduce_demos::{init_tracing, random_walk, TimingStats};
use polyreduce_simplification::{reduce, ReductionSummary};
use std::hint::black_box;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "polyreduce-bench-run", about = "Time polyline reduction on a random walk")]
struct Opts {
    /// Number of points in the generated walk
    #[arg(short, long, default_value_t = 100_000)]
    points: usize,

    /// Reduction tolerance
    #[arg(short, long, default_value_t = 1.0)]
    tolerance: f64,

    /// Number of timed runs
    #[arg(short, long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,

    /// Seed for the walk generator
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let opts = Opts::parse();

    let polyline = random_walk(opts.points, opts.seed);
    info!(points = polyline.len(), seed = opts.seed, "generated random walk");

    let mut samples = Vec::with_capacity(opts.iterations as usize);
    let mut reduced = Vec::new();
    for iteration in 0..opts.iterations {
        let start = Instant::now();
        reduced = reduce(black_box(polyline.as_slice()), black_box(opts.tolerance));
        let elapsed = start.elapsed();
        debug!(iteration, ?elapsed, "timed run");
        samples.push(elapsed);
    }

    let stats = TimingStats::from_samples(&samples).ok_or_else(|| anyhow::anyhow!("no timed runs"))?;
    let summary = ReductionSummary::new(polyline.as_slice(), &reduced);

    info!(tolerance = opts.tolerance, "{}", summary);
    info!(
        iterations = opts.iterations,
        min = ?stats.min,
        mean = ?stats.mean,
        max = ?stats.max,
        "reduce timings"
    );

    Ok(())
}
