//! Binary to render an instance and solution file pair into a PNG image.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tourview::{render, Instance, Solution};

/// Draw a tour over its instance and write the picture as a PNG file
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Instance file with the node coordinates
    instance: PathBuf,
    /// Solution file with the visiting order
    solution: PathBuf,
    /// Output image path
    #[arg(default_value = "out.png")]
    output: PathBuf,
    /// Pixels per coordinate unit
    #[arg(default_value_t = 1000.0)]
    scale: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let instance = Instance::from_path(&args.instance)
        .with_context(|| format!("cannot read instance file {}", args.instance.display()))?;
    let solution = Solution::from_path(&args.solution)
        .with_context(|| format!("cannot read solution file {}", args.solution.display()))?;

    let canvas = render(&instance, &solution, args.scale)?;
    canvas
        .save(&args.output)
        .with_context(|| format!("cannot write image {}", args.output.display()))?;

    Ok(())
}
