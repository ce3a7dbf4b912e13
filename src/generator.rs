use std::io::{self, Write};

use rand::Rng;

use crate::distance::DistanceMap;
use crate::node::Node;

/// Default number of nodes per generated instance.
pub const DEFAULT_NODES: u32 = 10;
/// Default panel width.
pub const DEFAULT_WIDTH: f64 = 200.0;
/// Default panel height.
pub const DEFAULT_HEIGHT: f64 = 100.0;

/// Samples `count` nodes uniformly on a `width` x `height` panel.
///
/// Identifiers run 1..=count; coordinates are rounded to two decimals.
pub fn generate<R: Rng>(count: u32, width: f64, height: f64, rng: &mut R) -> Vec<Node> {
    (1..=count)
        .map(|id| {
            Node::new(
                id,
                round(rng.gen_range(0.0..width)),
                round(rng.gen_range(0.0..height)),
            )
        })
        .collect()
}

fn round(number: f64) -> f64 {
    (number * 100.0).round() / 100.0
}

/// Writes a complete instance file: the header line, one line per node, then
/// the row-major cost matrix solvers consume and the renderer skips over.
pub fn write_instance<W: Write>(writer: &mut W, nodes: &[Node]) -> io::Result<()> {
    let min_id = nodes.iter().map(|n| n.id).min().unwrap_or(0);
    let max_id = nodes.iter().map(|n| n.id).max().unwrap_or(0);
    let map_size = if nodes.is_empty() { 0 } else { max_id - min_id + 1 };

    writeln!(writer, "{} {} {} {}", nodes.len(), map_size, min_id, max_id)?;
    for node in nodes {
        writeln!(writer, "{} {} {}", node.id, node.x, node.y)?;
    }

    let distances = DistanceMap::new(nodes);
    for row in 0..map_size {
        for col in 0..map_size {
            write!(writer, "{} ", distances.get(min_id + row, min_id + col))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}
