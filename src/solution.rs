use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::instance::{next_line, parse_field};

/// A proposed tour: the visiting order over instance node ids.
///
/// The order is cyclic, the last entry connects back to the first. The cost
/// comes straight from the file header and plays no part in rendering.
#[derive(Debug, Clone)]
pub struct Solution {
    pub order: Vec<u32>,
    pub cost: f64,
}

impl Solution {
    pub fn from_path(path: &Path) -> Result<Solution> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    /// Reads the `solution_size cost` header, then `solution_size` lines of
    /// `id x y`. The coordinates are parsed and discarded; the instance is
    /// the authority on node positions.
    pub fn parse<R: BufRead>(reader: R) -> Result<Solution> {
        let mut lines = reader.lines();
        let mut line_no = 0;

        let header = next_line(&mut lines, &mut line_no)?;
        let mut fields = header.split_whitespace();
        let size: usize = parse_field(&mut fields, line_no)?;
        let cost: f64 = parse_field(&mut fields, line_no)?;

        // capacity is a hint, the declared size is not trusted for allocation
        let mut order = Vec::with_capacity(size.min(1024));
        for _ in 0..size {
            let line = next_line(&mut lines, &mut line_no)?;
            let mut fields = line.split_whitespace();
            let id: u32 = parse_field(&mut fields, line_no)?;
            let _x: f64 = parse_field(&mut fields, line_no)?;
            let _y: f64 = parse_field(&mut fields, line_no)?;
            order.push(id);
        }

        Ok(Solution { order, cost })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const TOUR: &str = "3 2.41\n0 0.0 0.0\n1 1.0 0.0\n2 0.0 1.0\n";

    #[test]
    fn parses_order_and_cost() {
        let solution = Solution::parse(TOUR.as_bytes()).unwrap();
        assert_eq!(solution.order, vec![0, 1, 2]);
        assert_eq!(solution.cost, 2.41);
        assert_eq!(solution.len(), 3);
    }

    #[test]
    fn parses_empty_tour() {
        let solution = Solution::parse("0 -1\n".as_bytes()).unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.cost, -1.0);
    }

    #[test]
    fn reports_line_number_of_bad_entry() {
        let text = "2 1.0\n1 0.0 0.0\nnope 0.0 0.0\n";
        match Solution::parse(text.as_bytes()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn reports_truncated_tour() {
        match Solution::parse("2 1.0\n1 0.0 0.0\n".as_bytes()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn absurd_declared_size_is_a_parse_error() {
        match Solution::parse("8888888888888888 0\n".as_bytes()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
