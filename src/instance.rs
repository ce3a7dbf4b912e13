use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::error::{Error, Result};
use crate::node::Node;

/// An instance file: the id to node mapping plus the header fields.
///
/// Only the node coordinates matter for rendering; the header values are kept
/// as parsed. Anything after the declared node lines, such as the cost matrix
/// full instance files carry, is ignored.
#[derive(Debug)]
pub struct Instance {
    nodes: HashMap<u32, Node>,
    map_size: usize,
    min_id: u32,
    max_id: u32,
}

impl Instance {
    pub fn from_path(path: &Path) -> Result<Instance> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    /// Reads the `node_count map_size min_id max_id` header, then exactly
    /// `node_count` lines of `id x y`.
    pub fn parse<R: BufRead>(reader: R) -> Result<Instance> {
        let mut lines = reader.lines();
        let mut line_no = 0;

        let header = next_line(&mut lines, &mut line_no)?;
        let mut fields = header.split_whitespace();
        let declared: usize = parse_field(&mut fields, line_no)?;
        let map_size: usize = parse_field(&mut fields, line_no)?;
        let min_id: u32 = parse_field(&mut fields, line_no)?;
        let max_id: u32 = parse_field(&mut fields, line_no)?;

        // capacity is a hint, the declared count is not trusted for allocation
        let mut nodes = HashMap::with_capacity(declared.min(1024));
        for _ in 0..declared {
            let line = next_line(&mut lines, &mut line_no)?;
            let mut fields = line.split_whitespace();
            let id: u32 = parse_field(&mut fields, line_no)?;
            let x: f64 = parse_field(&mut fields, line_no)?;
            let y: f64 = parse_field(&mut fields, line_no)?;
            nodes.insert(id, Node::new(id, x, y));
        }

        Ok(Instance {
            nodes,
            map_size,
            min_id,
            max_id,
        })
    }

    /// Looks a node up by identifier; unknown ids are an error, not a skip.
    pub fn get(&self, id: u32) -> Result<&Node> {
        self.nodes.get(&id).ok_or(Error::UnknownNode { id })
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Largest x coordinate, never below zero.
    pub fn max_x(&self) -> f64 {
        self.nodes.values().fold(0.0, |max, node| max.max(node.x))
    }

    /// Largest y coordinate, never below zero.
    pub fn max_y(&self) -> f64 {
        self.nodes.values().fold(0.0, |max, node| max.max(node.y))
    }

    pub fn map_size(&self) -> usize {
        self.map_size
    }

    pub fn min_id(&self) -> u32 {
        self.min_id
    }

    pub fn max_id(&self) -> u32 {
        self.max_id
    }
}

pub(crate) fn next_line<B: BufRead>(lines: &mut Lines<B>, line_no: &mut usize) -> Result<String> {
    *line_no += 1;
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(Error::Parse {
            line: *line_no,
            message: String::from("unexpected end of file"),
        }),
    }
}

pub(crate) fn parse_field<T: FromStr>(fields: &mut SplitWhitespace<'_>, line: usize) -> Result<T> {
    let token = fields.next().ok_or_else(|| Error::Parse {
        line,
        message: String::from("missing field"),
    })?;
    token.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid number '{token}'"),
    })
}
