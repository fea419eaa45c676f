//! Straight-alpha RGBA8 conversion of a premultiplied pixmap.
//!
//! Always available (no feature gate) so that PNG export and any embedder
//! blitting raw pixels share the same conversion.

use tiny_skia::Pixmap;

/// Converts a pixmap to a flat straight-alpha RGBA8 buffer.
///
/// The buffer length is `width * height * 4`, rows top to bottom.
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}

/// Straight-alpha RGBA of a single pixel, `None` when out of bounds.
pub fn pixel_rgba(pixmap: &Pixmap, x: u32, y: u32) -> Option<[u8; 4]> {
    // `Pixmap::pixel` only checks the flat index, so x past the right edge
    // would wrap into the next row.
    if x >= pixmap.width() || y >= pixmap.height() {
        return None;
    }
    let c = pixmap.pixel(x, y)?.demultiply();
    Some([c.red(), c.green(), c.blue(), c.alpha()])
}
