//! Binary to generate random instance files for the renderer and the solvers.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tourview::generator::{self, DEFAULT_HEIGHT, DEFAULT_NODES, DEFAULT_WIDTH};

/// Generate a random instance: uniform nodes plus their cost matrix
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of nodes to sample
    #[arg(short, long, default_value_t = DEFAULT_NODES)]
    nodes: u32,
    /// Panel width the nodes are sampled on
    #[arg(short = 'x', long, default_value_t = DEFAULT_WIDTH)]
    width: f64,
    /// Panel height the nodes are sampled on
    #[arg(short = 'y', long, default_value_t = DEFAULT_HEIGHT)]
    height: f64,
    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,
    /// Write the instance to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let nodes = match args.seed {
        Some(seed) => generator::generate(
            args.nodes,
            args.width,
            args.height,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => generator::generate(args.nodes, args.width, args.height, &mut rand::thread_rng()),
    };

    match args.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            generator::write_instance(&mut writer, &nodes)?;
            writer
                .flush()
                .with_context(|| format!("cannot write {}", path.display()))?;
        }
        None => generator::write_instance(&mut io::stdout().lock(), &nodes)?,
    }

    Ok(())
}
