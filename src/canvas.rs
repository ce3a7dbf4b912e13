use std::fs;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

use crate::error::Result;
use crate::node::Node;

/// Padding in pixels added around the drawable area on every side.
pub const BORDER: u32 = 25;

const MARKER_RADIUS: i32 = 5;
const DOT_RADIUS: i32 = 3;
const STROKE: i32 = 2;

/// The fixed three-color scheme of every rendered image.
#[derive(Debug, Clone, Copy)]
struct Palette {
    background: Rgb<u8>,
    fill: Rgb<u8>,
    border: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            background: Rgb([220, 235, 255]),
            fill: Rgb([80, 135, 180]),
            border: Rgb([40, 65, 90]),
        }
    }
}

/// In-memory raster plus the parameters that map node coordinates to pixels.
#[derive(Debug)]
pub struct Canvas {
    buffer: RgbImage,
    scale: f64,
    border: u32,
    palette: Palette,
}

impl Canvas {
    /// Allocates a canvas sized for the given coordinate bounds and fills it
    /// with the background color.
    pub fn new(max_x: f64, max_y: f64, scale: f64) -> Canvas {
        let palette = Palette::default();
        let width = 2 * BORDER + (max_x * scale).round() as u32;
        let height = 2 * BORDER + (max_y * scale).round() as u32;
        let buffer = RgbImage::from_pixel(width, height, palette.background);
        Canvas {
            buffer,
            scale,
            border: BORDER,
            palette,
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Read access to the underlying pixel buffer.
    pub fn buffer(&self) -> &RgbImage {
        &self.buffer
    }

    fn to_pixel(&self, node: &Node) -> (f64, f64) {
        let border = f64::from(self.border);
        (node.x * self.scale + border, node.y * self.scale + border)
    }

    /// Draws the marker for one node: a dot ringed by the border color.
    ///
    /// Off-canvas positions clip silently.
    pub fn draw_node(&mut self, node: &Node) {
        let (x, y) = self.to_pixel(node);
        let center = (x.round() as i32, y.round() as i32);
        draw_filled_circle_mut(&mut self.buffer, center, MARKER_RADIUS, self.palette.border);
        draw_filled_circle_mut(&mut self.buffer, center, DOT_RADIUS, self.palette.fill);
    }

    /// Draws one tour edge as a straight segment between two nodes.
    pub fn draw_edge(&mut self, from: &Node, to: &Node) {
        let (x1, y1) = self.to_pixel(from);
        let (x2, y2) = self.to_pixel(to);
        // The segment primitive has no stroke width; offset copies thicken it.
        for dx in 0..STROKE {
            for dy in 0..STROKE {
                let (dx, dy) = (dx as f32, dy as f32);
                draw_line_segment_mut(
                    &mut self.buffer,
                    (x1 as f32 + dx, y1 as f32 + dy),
                    (x2 as f32 + dx, y2 as f32 + dy),
                    self.palette.border,
                );
            }
        }
    }

    /// Encodes the canvas as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let encoder = PngEncoder::new(&mut bytes);
        encoder.write_image(
            self.buffer.as_raw(),
            self.buffer.width(),
            self.buffer.height(),
            ExtendedColorType::Rgb8,
        )?;
        Ok(bytes)
    }

    /// Writes the canvas to disk as a PNG file, whatever the path's extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = self.to_png()?;
        fs::write(path, bytes)?;
        Ok(())
    }
}
