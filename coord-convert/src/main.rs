/// Batch coordinate converter main entry point
mod bounds;
mod constants;
mod converter;
mod input;
mod manifest;

use clap::Parser;
use converter::BatchConverter;
use coord::CoordinateSystem;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Convert a JSON batch of 3D points between Cartesian, spherical and
/// cylindrical coordinates.
#[derive(Debug, Parser)]
#[command(name = "coord-convert", version, about)]
struct Args {
    /// JSON file holding `[[a, b, c], ...]` or `{"system": ..., "points": [...]}`
    input: PathBuf,

    /// Source system (cartesian, spherical, cylindrical); defaults to the file's `system` field
    #[arg(long)]
    from: Option<CoordinateSystem>,

    /// Target system (cartesian, spherical, cylindrical)
    #[arg(long)]
    to: CoordinateSystem,

    /// Output manifest path [default: <input stem>_<target>.json beside the input]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let converter = BatchConverter::new(&args.input, args.from, args.to, args.output.as_deref())?;
    converter.convert()?;

    Ok(())
}
