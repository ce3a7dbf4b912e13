use dashmap::DashMap;
use rayon::prelude::*;

use crate::node::Node;

/// Precomputed Euclidean distances between every pair of nodes.
///
/// One entry per unordered pair; lookups normalize the key order.
pub struct DistanceMap {
    map: DashMap<(u32, u32), f64>,
    node_count: usize,
}

impl DistanceMap {
    /* Compute all pairwise distances up front; everything after is lookups. */
    pub fn new(nodes: &[Node]) -> DistanceMap {
        let node_count = nodes.len();
        let map = DashMap::with_capacity(node_count * node_count.saturating_sub(1) / 2);

        nodes.par_iter().enumerate().for_each(|(i, a)| {
            for b in nodes.iter().skip(i + 1) {
                map.insert(Self::key(a.id, b.id), euclidean(a, b));
            }
        });

        DistanceMap { map, node_count }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Distance between two nodes by identifier. Zero for a node to itself
    /// and for pairs that were never computed.
    pub fn get(&self, a: u32, b: u32) -> f64 {
        if a == b {
            return 0.0;
        }
        self.map.get(&Self::key(a, b)).map_or(0.0, |d| *d)
    }

    fn key(a: u32, b: u32) -> (u32, u32) {
        if a < b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

/// Straight-line distance between two nodes.
pub fn euclidean(a: &Node, b: &Node) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}
