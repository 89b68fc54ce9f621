//! Nearest-neighbor path through a file of points.
//!
//! # Usage
//!
//! ```bash
//! # Four coordinates per line, random start, path written to path.txt
//! sensor-tour sensors.txt
//!
//! # Three coordinates per line, fixed start, custom output
//! sensor-tour points.csv --dimensions 3 --start 0 --output tour.csv
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use rand::{Rng, SeedableRng};

use sensor_tour::algorithms::TourBuilder;
use sensor_tour::data::Point;
use sensor_tour::io::{read_points, write_tour};

#[derive(Parser, Debug)]
#[command(name = "sensor-tour")]
#[command(about = "Approximate a shortest path through a set of points with the nearest-neighbor heuristic")]
struct Args {
  /// Input file, one point per line with comma separated coordinates
  input: PathBuf,

  /// Where to write the path, one point per line in visiting order
  #[arg(short, long, default_value = "path.txt")]
  output: PathBuf,

  /// Number of coordinates per point
  #[arg(short, long, default_value = "4")]
  dimensions: usize,

  /// Line number (0-based, blank lines excluded) of the start point
  #[arg(short, long)]
  start: Option<usize>,

  /// Seed for picking the start point when --start is not given
  #[arg(long)]
  seed: Option<u64>,

  /// Verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let args = Args::parse();
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
  )
  .init();

  macro_rules! dispatch {
    ( $( $n:literal ),* ) => {
      match args.dimensions {
        $( $n => run::<$n>(&args), )*
        other => bail!("unsupported number of dimensions: {}", other),
      }
    };
  }
  dispatch!(1, 2, 3, 4, 5, 6, 7, 8)
}

fn run<const N: usize>(args: &Args) -> Result<()> {
  let t = Instant::now();
  let file = File::open(&args.input)
    .with_context(|| format!("Invalid input file: {}", args.input.display()))?;
  let points: Vec<Point<f64, N>> = read_points(BufReader::new(file))
    .with_context(|| format!("Invalid data in input file: {}", args.input.display()))?;
  duration(t, "reading input");
  info!("Read {} points with {} coordinates each", points.len(), N);

  if points.is_empty() {
    bail!("No points in {}", args.input.display());
  }
  let start = match (args.start, args.seed) {
    (Some(start), _) => start,
    (None, Some(seed)) => rand::rngs::SmallRng::seed_from_u64(seed).gen_range(0..points.len()),
    (None, None) => rand::thread_rng().gen_range(0..points.len()),
  };

  let t = Instant::now();
  let builder = TourBuilder::new(points, start).context("Failed to start the tour")?;
  duration(t, "sorting points");

  let t = Instant::now();
  let tour = builder.finish();
  duration(t, "finding shortest path");
  info!("Path length: {}", tour.path_length());

  let t = Instant::now();
  let file = File::create(&args.output)
    .with_context(|| format!("Cannot create output file: {}", args.output.display()))?;
  write_tour(BufWriter::new(file), &tour)
    .with_context(|| format!("Failed writing to {}", args.output.display()))?;
  duration(t, "writing to file");
  Ok(())
}

fn duration(start: Instant, phase: &str) {
  info!(
    "Duration for {}: {:.5} seconds",
    phase,
    start.elapsed().as_secs_f64()
  );
}
