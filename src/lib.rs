//! Renders tour problem instances and their solutions as PNG images.
//!
//! An instance file supplies the node coordinates, a solution file the cyclic
//! visiting order; [`render`] turns the pair into a [`Canvas`] ready to save.

pub mod canvas;
pub mod distance;
pub mod error;
pub mod generator;
pub mod instance;
pub mod node;
pub mod solution;

pub use canvas::Canvas;
pub use error::{Error, Result};
pub use instance::Instance;
pub use node::Node;
pub use solution::Solution;

/// Draws the whole picture: every node of the instance, then every edge of
/// the tour, onto a freshly allocated canvas.
///
/// The canvas is sized from the instance bounds at the given scale. Edges
/// close the loop, the last visited node connects back to the first. A tour
/// id with no matching node is fatal.
pub fn render(instance: &Instance, solution: &Solution, scale: f64) -> Result<Canvas> {
    let mut canvas = Canvas::new(instance.max_x(), instance.max_y(), scale);

    for node in instance.nodes() {
        canvas.draw_node(node);
    }

    let order = &solution.order;
    for i in 0..order.len() {
        let from = instance.get(order[i])?;
        let to = instance.get(order[(i + 1) % order.len()])?;
        canvas.draw_edge(from, to);
    }

    Ok(canvas)
}
