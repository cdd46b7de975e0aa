use std::{io::Read, path::PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use orthosweep::{count_intersections_naive, count_intersections_with_limits, Limits};

/// Counts interior crossings between horizontal and vertical segments.
///
/// The input is a segment count followed by that many `x_a y_a x_b y_b` lines.
#[derive(Parser)]
struct Args {
    /// Input file; reads standard input if omitted.
    input: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = orthosweep::MAX_ABSOLUTE_COORD,
        value_parser = clap::value_parser!(i64).range(0..=orthosweep::MAX_DOMAIN_BOUND),
    )]
    max_coord: i64,

    #[arg(long, default_value_t = orthosweep::MAX_SEGMENTS)]
    max_segments: usize,

    /// Also count with the quadratic algorithm, and fail if the answers differ.
    #[arg(long)]
    check: bool,
}

pub fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let segments = orthosweep::input::parse_segments(&text)?;
    let limits = Limits {
        max_abs_coord: args.max_coord,
        max_segments: args.max_segments,
    };
    log::info!("counting intersections among {} segments", segments.len());
    let count = count_intersections_with_limits(&segments, &limits)?;

    if args.check {
        let expected = count_intersections_naive(&segments, &limits)?;
        if expected != count {
            bail!("sweep found {count} intersections, but the naive count is {expected}");
        }
    }

    println!("{count}");
    Ok(())
}
