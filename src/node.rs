/// A labeled 2D point of an instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Node { id, x, y }
    }
}
