//! Canvas-2D-style path construction on top of `tiny_skia::PathBuilder`.
//!
//! Arcs follow the HTML canvas rules: an arc starts with a `move_to` when the
//! path is empty and with a straight `line_to` from the current point
//! otherwise. Elliptical arcs are approximated by one cubic Bézier per
//! quarter turn (or less).

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use avatar_engine_core::scene::{Circle, Point, Shape};
use tiny_skia::{Path, PathBuilder, Rect};

/// Path under construction, tracking the current point like a canvas context.
pub struct CanvasPath {
    builder: PathBuilder,
    current: Option<Point>,
}

impl Default for CanvasPath {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasPath {
    pub fn new() -> Self {
        Self {
            builder: PathBuilder::new(),
            current: None,
        }
    }

    /// Position of the pen, `None` for an empty path.
    pub fn current(&self) -> Option<Point> {
        self.current
    }

    pub fn move_to(&mut self, p: Point) {
        self.builder.move_to(p.x as f32, p.y as f32);
        self.current = Some(p);
    }

    /// Draws a straight segment; on an empty path this only moves the pen.
    pub fn line_to(&mut self, p: Point) {
        if self.current.is_none() {
            self.move_to(p);
            return;
        }
        self.builder.line_to(p.x as f32, p.y as f32);
        self.current = Some(p);
    }

    /// Quadratic curve; on an empty path the pen first moves to `control`.
    pub fn quad_to(&mut self, control: Point, to: Point) {
        if self.current.is_none() {
            self.move_to(control);
        }
        self.builder
            .quad_to(control.x as f32, control.y as f32, to.x as f32, to.y as f32);
        self.current = Some(to);
    }

    fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) {
        self.builder.cubic_to(
            c1.x as f32,
            c1.y as f32,
            c2.x as f32,
            c2.y as f32,
            to.x as f32,
            to.y as f32,
        );
        self.current = Some(to);
    }

    /// Appends an elliptical arc starting at angle `start` and turning by
    /// `sweep` radians (positive is clockwise on screen, since y points down).
    pub fn ellipse(&mut self, center: Point, rx: f64, ry: f64, start: f64, sweep: f64) {
        let at = |angle: f64| Point::new(center.x + rx * angle.cos(), center.y + ry * angle.sin());
        self.line_to(at(start));
        if sweep == 0.0 {
            return;
        }

        let segments = (sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
        let step = sweep / segments as f64;
        // Distance of the control points along the tangent, per unit radius.
        let k = 4.0 / 3.0 * (step / 4.0).tan();
        for i in 0..segments {
            let a0 = start + step * i as f64;
            let a1 = a0 + step;
            let (p0, p1) = (at(a0), at(a1));
            let c1 = Point::new(p0.x - k * rx * a0.sin(), p0.y + k * ry * a0.cos());
            let c2 = Point::new(p1.x + k * rx * a1.sin(), p1.y - k * ry * a1.cos());
            self.cubic_to(c1, c2, p1);
        }
    }

    /// Full circle starting at angle 0, like `arc(x, y, r, 0, 2π)`.
    pub fn circle(&mut self, circle: Circle) {
        self.ellipse(circle.center, circle.radius, circle.radius, 0.0, TAU);
    }

    pub fn close(&mut self) {
        self.builder.close();
    }

    /// Returns `None` for empty or degenerate paths.
    pub fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

/// Converts a scene shape into a drawable path.
///
/// Returns `None` when the shape has no area to draw (zero or negative
/// radius, empty rectangle, fewer than two polygon points).
pub fn shape_path(shape: &Shape) -> Option<Path> {
    match shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
        } => {
            if *width <= 0.0 || *height <= 0.0 {
                return None;
            }
            let rect = Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32)?;
            Some(PathBuilder::from_rect(rect))
        }
        Shape::Circle(circle) => {
            if circle.radius <= 0.0 {
                return None;
            }
            // Left open like a bare canvas `arc`: strokes get butt ends at
            // (x + r, y) and fills close the contour implicitly.
            let mut path = CanvasPath::new();
            path.circle(*circle);
            path.finish()
        }
        Shape::HalfEllipse { center, rx, ry } => {
            if *rx <= 0.0 || *ry <= 0.0 {
                return None;
            }
            let mut path = CanvasPath::new();
            path.ellipse(*center, *rx, *ry, PI, PI);
            path.close();
            path.finish()
        }
        Shape::Polygon { points } => {
            if points.len() < 2 {
                return None;
            }
            let mut path = CanvasPath::new();
            for p in points {
                path.line_to(*p);
            }
            path.close();
            path.finish()
        }
        Shape::Blob { circles } => {
            let mut path = CanvasPath::new();
            for circle in circles.iter().filter(|c| c.radius > 0.0) {
                path.circle(*circle);
            }
            path.close();
            path.finish()
        }
        Shape::QuadCurve { from, control, to } => {
            let mut path = CanvasPath::new();
            path.move_to(*from);
            path.quad_to(*control, *to);
            path.finish()
        }
    }
}
