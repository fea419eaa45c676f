//! [`Surface`] implementation backed by a `tiny_skia::Pixmap`.

use avatar_engine_core::error::AvatarError;
use avatar_engine_core::scene::{Canvas, LineCap, Shape, StrokeStyle};
use avatar_engine_core::{Rgb, Surface};
use tiny_skia::{Color, FillRule, Paint, Pixmap, Stroke, Transform};
use tracing::trace;

use crate::path::shape_path;
use crate::pixel::{pixel_rgba, pixmap_to_rgba};

/// Anti-aliased raster surface with a transparent background.
#[derive(Clone, PartialEq)]
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl std::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .finish()
    }
}

impl PixmapSurface {
    /// Allocates a transparent surface.
    ///
    /// Returns `AvatarError::InvalidDimensions` for a zero or oversized
    /// dimension.
    pub fn new(width: u32, height: u32) -> Result<Self, AvatarError> {
        let pixmap = Pixmap::new(width, height).ok_or(AvatarError::InvalidDimensions)?;
        Ok(Self { pixmap })
    }

    /// Allocates a surface matching `canvas`.
    pub fn for_canvas(canvas: Canvas) -> Result<Self, AvatarError> {
        Self::new(canvas.width(), canvas.height())
    }

    /// The underlying premultiplied pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha RGBA of one pixel, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        pixel_rgba(&self.pixmap, x, y)
    }

    /// Straight-alpha RGBA8 buffer of the whole surface.
    pub fn to_rgba(&self) -> Vec<u8> {
        pixmap_to_rgba(&self.pixmap)
    }
}

fn solid(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = true;
    paint
}

fn skia_cap(cap: LineCap) -> tiny_skia::LineCap {
    match cap {
        LineCap::Butt => tiny_skia::LineCap::Butt,
        LineCap::Round => tiny_skia::LineCap::Round,
    }
}

impl Surface for PixmapSurface {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn fill(&mut self, shape: &Shape, color: Rgb) {
        let Some(path) = shape_path(shape) else {
            trace!("skipping degenerate fill: {shape:?}");
            return;
        };
        self.pixmap.fill_path(
            &path,
            &solid(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn stroke(&mut self, shape: &Shape, style: &StrokeStyle) {
        let Some(path) = shape_path(shape) else {
            trace!("skipping degenerate stroke: {shape:?}");
            return;
        };
        let stroke = Stroke {
            width: style.width as f32,
            line_cap: skia_cap(style.cap),
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &solid(style.color),
            &stroke,
            Transform::identity(),
            None,
        );
    }
}
