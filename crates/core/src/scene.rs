//! Scene data model: the ordered draw list a renderer produces.
//!
//! A [`Scene`] holds the canvas size and a stack of [`Layer`]s. Layers are
//! identified by their [`LayerKind`] and painted bottom-to-top (index 0 =
//! bottom). Each layer carries the [`DrawOp`]s that make it up, in order.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::AvatarError;

/// Canvas dimensions in pixels. The origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    /// The 300×300 canvas avatars are designed for.
    pub const DEFAULT: Canvas = Canvas {
        width: 300,
        height: 300,
    };

    /// Returns `AvatarError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, AvatarError> {
        if width == 0 || height == 0 {
            return Err(AvatarError::InvalidDimensions);
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn center_x(&self) -> f64 {
        f64::from(self.width) / 2.0
    }

    pub fn center_y(&self) -> f64 {
        f64::from(self.height) / 2.0
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::DEFAULT
    }
}

/// A point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A circle, used on its own and as a member of a [`Shape::Blob`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point::new(x, y),
            radius,
        }
    }
}

/// Geometry of a single draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned rectangle with its top-left corner at `(x, y)`.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle(Circle),
    /// Upper half of an axis-aligned ellipse (angles π to 2π), closed along
    /// its horizontal diameter.
    HalfEllipse { center: Point, rx: f64, ry: f64 },
    /// Closed polygon.
    Polygon { points: Vec<Point> },
    /// Several circles traced as one contour: each circle after the first is
    /// joined to the end of the previous one by a straight segment.
    Blob { circles: Vec<Circle> },
    /// Open quadratic Bézier curve.
    QuadCurve {
        from: Point,
        control: Point,
        to: Point,
    },
}

/// Stroke end cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Outline style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub width: f64,
    pub cap: LineCap,
}

/// How a shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// Solid fill using the non-zero winding rule.
    Fill(Rgb),
    Stroke(StrokeStyle),
}

/// One shape with its paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawOp {
    pub shape: Shape,
    pub paint: Paint,
}

impl DrawOp {
    pub fn fill(shape: Shape, color: Rgb) -> Self {
        Self {
            shape,
            paint: Paint::Fill(color),
        }
    }

    pub fn stroke(shape: Shape, style: StrokeStyle) -> Self {
        Self {
            shape,
            paint: Paint::Stroke(style),
        }
    }
}

/// The avatar's layers, in the order they are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Neck,
    Body,
    Ears,
    Hair,
    Head,
    Eyes,
    Eyebrows,
    Nose,
    Mouth,
}

impl LayerKind {
    /// Every layer, bottom to top.
    pub const Z_ORDER: [LayerKind; 9] = [
        LayerKind::Neck,
        LayerKind::Body,
        LayerKind::Ears,
        LayerKind::Hair,
        LayerKind::Head,
        LayerKind::Eyes,
        LayerKind::Eyebrows,
        LayerKind::Nose,
        LayerKind::Mouth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Neck => "neck",
            LayerKind::Body => "body",
            LayerKind::Ears => "ears",
            LayerKind::Hair => "hair",
            LayerKind::Head => "head",
            LayerKind::Eyes => "eyes",
            LayerKind::Eyebrows => "eyebrows",
            LayerKind::Nose => "nose",
            LayerKind::Mouth => "mouth",
        }
    }
}

/// A single named drawing step. May be empty (a bald avatar has a hair layer
/// with no operations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    kind: LayerKind,
    ops: Vec<DrawOp>,
}

impl Layer {
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            ops: Vec::new(),
        }
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Returns the layer with `op` appended.
    pub fn with(mut self, op: DrawOp) -> Self {
        self.ops.push(op);
        self
    }
}

/// Canvas size plus an ordered layer stack.
///
/// Layers are stored bottom-to-top and each kind appears at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    canvas: Canvas,
    layers: Vec<Layer>,
}

impl Scene {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            layers: Vec::new(),
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Returns a slice of all layers (bottom-to-top order).
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Adds a layer to the top of the stack, replacing any earlier layer of
    /// the same kind in place.
    pub fn push_layer(&mut self, layer: Layer) {
        match self.layers.iter_mut().find(|l| l.kind == layer.kind) {
            Some(existing) => *existing = layer,
            None => self.layers.push(layer),
        }
    }

    /// Returns the layer of the given kind, if present.
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    /// All draw operations in paint order.
    pub fn ops(&self) -> impl Iterator<Item = &DrawOp> + '_ {
        self.layers.iter().flat_map(|l| l.ops.iter())
    }

    /// Total number of draw operations across all layers.
    pub fn op_count(&self) -> usize {
        self.layers.iter().map(|l| l.ops.len()).sum()
    }
}
