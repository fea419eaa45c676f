//! The drawing-surface trait every raster backend implements.
//!
//! The trait is object-safe so the renderer can draw through `&mut dyn
//! Surface` without knowing which backend owns the pixels.

use crate::color::Rgb;
use crate::scene::{Canvas, Paint, Scene, Shape, StrokeStyle};

/// A 2D raster target the renderer paints onto.
///
/// Implementations own their pixel storage. A render pass borrows the
/// surface mutably for its whole duration, clears it, then issues fills and
/// strokes in paint order.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Resets every pixel to fully transparent.
    fn clear(&mut self);

    /// Fills `shape` with a solid color (non-zero winding).
    fn fill(&mut self, shape: &Shape, color: Rgb);

    /// Strokes the outline of `shape`.
    fn stroke(&mut self, shape: &Shape, style: &StrokeStyle);

    /// The canvas geometry matching this surface.
    fn canvas(&self) -> Canvas {
        Canvas::new(self.width(), self.height()).unwrap_or(Canvas::DEFAULT)
    }
}

/// Paints every operation of `scene` onto `surface`, bottom layer first.
///
/// Does not clear the surface.
pub fn draw_scene(scene: &Scene, surface: &mut dyn Surface) {
    for op in scene.ops() {
        match &op.paint {
            Paint::Fill(color) => surface.fill(&op.shape, *color),
            Paint::Stroke(style) => surface.stroke(&op.shape, style),
        }
    }
}
