//! Avatar renderer: turns an [`AvatarConfig`] into a layered [`Scene`].
//!
//! [`render_scene`] is a pure function; [`render`] clears a [`Surface`] and
//! replays the scene onto it. Layers are painted in [`LayerKind::Z_ORDER`]:
//! neck and body first so the head covers them, ears and hair before the
//! head so its outline sits on top, then the face features.
//!
//! All coordinates are relative to the canvas center except the body (hung
//! from the bottom edge) and the hair floors (absolute pixel rows).

use tracing::debug;

use crate::color::Rgb;
use crate::config::{AvatarConfig, HairStyle, NoseType};
use crate::scene::{
    Canvas, Circle, DrawOp, Layer, LayerKind, LineCap, Point, Scene, Shape, StrokeStyle,
};
use crate::surface::{draw_scene, Surface};

/// Outline color for ears, head and eyes.
pub const OUTLINE_COLOR: Rgb = Rgb::from_u32(0x333333);
/// Outline width in pixels.
pub const OUTLINE_WIDTH: f64 = 2.0;
pub const EYEBROW_COLOR: Rgb = Rgb::from_u32(0x4a3b2a);
pub const MOUTH_COLOR: Rgb = Rgb::from_u32(0x5a3a2a);
/// How much darker than the skin the nose is, in percent.
pub const NOSE_DARKEN_PERCENT: f64 = 20.0;

const HEAD_RADIUS: f64 = 100.0;
const EAR_OFFSET_X: f64 = 100.0;

const NECK_WIDTH: f64 = 50.0;
const NECK_HEIGHT: f64 = 100.0;
const NECK_TOP_OFFSET: f64 = 50.0;

const BODY_RX: f64 = 160.0;
const BODY_RY: f64 = 90.0;
/// How far below the bottom edge the body ellipse is centered.
const BODY_DROP: f64 = 60.0;

/// Gap between the top of the eyes and the hairline.
const HAIRLINE_GAP: f64 = 10.0;
const BOWL_RX: f64 = 105.0;
const BOWL_MIN_BOTTOM: f64 = 50.0;
/// The bowl crown may rise this far above the head center (head top + 15).
const BOWL_CROWN_RISE: f64 = 115.0;
const BUN_RADIUS: f64 = 40.0;
const BUN_MIN_Y: f64 = 40.0;
/// Side curls as (dx, dy from center, radius); mirrored left and right.
const UPPER_CURL: (f64, f64, f64) = (50.0, -60.0, 35.0);
const LOWER_CURL: (f64, f64, f64) = (80.0, -20.0, 30.0);

const PUPIL_DIVISOR: f64 = 2.5;
const PUPIL_MIN_RADIUS: f64 = 2.0;

const EYEBROW_WIDTH_FACTOR: f64 = 2.5;
const EYEBROW_HEIGHT: f64 = 5.0;
const EYEBROW_GAP: f64 = 15.0;

const SQUARE_NOSE_WIDTH_FACTOR: f64 = 1.6;
const SQUARE_NOSE_HEIGHT_FACTOR: f64 = 1.2;

/// How far the mouth curve's control point sits below the mouth line.
const MOUTH_DIP: f64 = 20.0;
const MOUTH_WIDTH: f64 = 3.0;

/// Bottom edge of the hair: just above the eyes, never above row 50.
pub fn hair_bottom(config: &AvatarConfig) -> f64 {
    let eye_top = f64::from(config.eye_y() - config.eye_size());
    (eye_top - HAIRLINE_GAP).max(BOWL_MIN_BOTTOM)
}

/// Vertical radius of the bowl cut, reaching up to `centerY - 115`.
pub fn bowl_radius_y(config: &AvatarConfig, canvas: Canvas) -> f64 {
    (hair_bottom(config) - (canvas.center_y() - BOWL_CROWN_RISE)).max(0.0)
}

/// Center row of the curly top bun, never above row 40.
pub fn top_bun_y(config: &AvatarConfig) -> f64 {
    let eye_top = f64::from(config.eye_y() - config.eye_size());
    (eye_top - HAIRLINE_GAP - BUN_RADIUS).max(BUN_MIN_Y)
}

pub fn pupil_radius(config: &AvatarConfig) -> f64 {
    (f64::from(config.eye_size()) / PUPIL_DIVISOR).max(PUPIL_MIN_RADIUS)
}

/// Top row of both eyebrows.
pub fn eyebrow_top(config: &AvatarConfig) -> f64 {
    f64::from(config.eye_y()) - (f64::from(config.eye_size()) + EYEBROW_GAP)
}

pub fn nose_color(config: &AvatarConfig) -> Rgb {
    config.skin_color().darken(NOSE_DARKEN_PERCENT)
}

/// Builds the full layer stack for `config` on `canvas`.
///
/// Pure and deterministic: equal inputs give equal scenes.
pub fn render_scene(config: &AvatarConfig, canvas: Canvas) -> Scene {
    let mut scene = Scene::new(canvas);
    for kind in LayerKind::Z_ORDER {
        let layer = match kind {
            LayerKind::Neck => neck(config, canvas),
            LayerKind::Body => body(config, canvas),
            LayerKind::Ears => ears(config, canvas),
            LayerKind::Hair => hair(config, canvas),
            LayerKind::Head => head(config, canvas),
            LayerKind::Eyes => eyes(config, canvas),
            LayerKind::Eyebrows => eyebrows(config, canvas),
            LayerKind::Nose => nose(config, canvas),
            LayerKind::Mouth => mouth(config, canvas),
        };
        scene.push_layer(layer);
    }
    scene
}

/// Clears `surface` and paints the avatar onto it.
pub fn render(config: &AvatarConfig, surface: &mut dyn Surface) {
    let canvas = surface.canvas();
    let scene = render_scene(config, canvas);
    surface.clear();
    draw_scene(&scene, surface);
    debug!(
        "rendered avatar: {}x{}, {} ops, hair {}",
        canvas.width(),
        canvas.height(),
        scene.op_count(),
        config.hair_style().name()
    );
}

fn outline() -> StrokeStyle {
    StrokeStyle {
        color: OUTLINE_COLOR,
        width: OUTLINE_WIDTH,
        cap: LineCap::Butt,
    }
}

/// A filled circle followed by its outline.
fn outlined_circle(layer: Layer, circle: Circle, color: Rgb) -> Layer {
    layer
        .with(DrawOp::fill(Shape::Circle(circle), color))
        .with(DrawOp::stroke(Shape::Circle(circle), outline()))
}

fn neck(config: &AvatarConfig, canvas: Canvas) -> Layer {
    let rect = Shape::Rect {
        x: canvas.center_x() - NECK_WIDTH / 2.0,
        y: canvas.center_y() + NECK_TOP_OFFSET,
        width: NECK_WIDTH,
        height: NECK_HEIGHT,
    };
    Layer::new(LayerKind::Neck).with(DrawOp::fill(rect, config.skin_color()))
}

fn body(config: &AvatarConfig, canvas: Canvas) -> Layer {
    let shirt = Shape::HalfEllipse {
        center: Point::new(canvas.center_x(), f64::from(canvas.height()) + BODY_DROP),
        rx: BODY_RX,
        ry: BODY_RY,
    };
    Layer::new(LayerKind::Body).with(DrawOp::fill(shirt, config.clothing_color()))
}

fn ears(config: &AvatarConfig, canvas: Canvas) -> Layer {
    let y = f64::from(config.ear_y());
    let r = f64::from(config.ear_size());
    [-EAR_OFFSET_X, EAR_OFFSET_X]
        .into_iter()
        .fold(Layer::new(LayerKind::Ears), |layer, dx| {
            outlined_circle(
                layer,
                Circle::new(canvas.center_x() + dx, y, r),
                config.skin_color(),
            )
        })
}

fn hair(config: &AvatarConfig, canvas: Canvas) -> Layer {
    let layer = Layer::new(LayerKind::Hair);
    let color = config.hair_color();
    match config.hair_style() {
        HairStyle::Bald => layer,
        HairStyle::Bowl => {
            let ry = bowl_radius_y(config, canvas);
            if ry <= 0.0 {
                return layer;
            }
            let bowl = Shape::HalfEllipse {
                center: Point::new(canvas.center_x(), hair_bottom(config)),
                rx: BOWL_RX,
                ry,
            };
            layer.with(DrawOp::fill(bowl, color))
        }
        HairStyle::Curly => {
            let (cx, cy) = (canvas.center_x(), canvas.center_y());
            let curl = |side: f64, (ox, oy, r): (f64, f64, f64)| {
                Circle::new(cx + side * ox, cy + oy, r)
            };
            let circles = vec![
                Circle::new(cx, top_bun_y(config), BUN_RADIUS),
                curl(-1.0, UPPER_CURL),
                curl(1.0, UPPER_CURL),
                curl(-1.0, LOWER_CURL),
                curl(1.0, LOWER_CURL),
            ];
            layer.with(DrawOp::fill(Shape::Blob { circles }, color))
        }
    }
}

fn head(config: &AvatarConfig, canvas: Canvas) -> Layer {
    outlined_circle(
        Layer::new(LayerKind::Head),
        Circle::new(canvas.center_x(), canvas.center_y(), HEAD_RADIUS),
        config.skin_color(),
    )
}

/// Eye centers as (left, right) x coordinates.
fn eye_xs(config: &AvatarConfig, canvas: Canvas) -> [f64; 2] {
    let spacing = f64::from(config.eye_spacing());
    [canvas.center_x() - spacing, canvas.center_x() + spacing]
}

fn eyes(config: &AvatarConfig, canvas: Canvas) -> Layer {
    let y = f64::from(config.eye_y());
    let r = f64::from(config.eye_size());
    let xs = eye_xs(config, canvas);
    // Both whites first, then both pupils.
    let layer = xs.into_iter().fold(Layer::new(LayerKind::Eyes), |layer, x| {
        outlined_circle(layer, Circle::new(x, y, r), Rgb::WHITE)
    });
    let pupil = pupil_radius(config);
    xs.into_iter().fold(layer, |layer, x| {
        layer.with(DrawOp::fill(
            Shape::Circle(Circle::new(x, y, pupil)),
            Rgb::BLACK,
        ))
    })
}

fn eyebrows(config: &AvatarConfig, canvas: Canvas) -> Layer {
    let width = f64::from(config.eye_size()) * EYEBROW_WIDTH_FACTOR;
    let y = eyebrow_top(config);
    eye_xs(config, canvas)
        .into_iter()
        .fold(Layer::new(LayerKind::Eyebrows), |layer, x| {
            let brow = Shape::Rect {
                x: x - width / 2.0,
                y,
                width,
                height: EYEBROW_HEIGHT,
            };
            layer.with(DrawOp::fill(brow, EYEBROW_COLOR))
        })
}

fn nose(config: &AvatarConfig, canvas: Canvas) -> Layer {
    let cx = canvas.center_x();
    let y = f64::from(config.nose_y());
    let size = f64::from(config.nose_size());
    let shape = match config.nose_type() {
        NoseType::Round => Shape::Circle(Circle::new(cx, y, size)),
        NoseType::Square => {
            let width = size * SQUARE_NOSE_WIDTH_FACTOR;
            let height = size * SQUARE_NOSE_HEIGHT_FACTOR;
            Shape::Rect {
                x: cx - width / 2.0,
                y: y - height / 2.0,
                width,
                height,
            }
        }
        NoseType::Triangle => Shape::Polygon {
            points: vec![
                Point::new(cx, y - size),
                Point::new(cx - size, y + size),
                Point::new(cx + size, y + size),
            ],
        },
    };
    Layer::new(LayerKind::Nose).with(DrawOp::fill(shape, nose_color(config)))
}

fn mouth(config: &AvatarConfig, canvas: Canvas) -> Layer {
    let cx = canvas.center_x();
    let y = f64::from(config.mouth_y());
    let half = f64::from(config.mouth_width()) / 2.0;
    let curve = Shape::QuadCurve {
        from: Point::new(cx - half, y),
        control: Point::new(cx, y + MOUTH_DIP),
        to: Point::new(cx + half, y),
    };
    let style = StrokeStyle {
        color: MOUTH_COLOR,
        width: MOUTH_WIDTH,
        cap: LineCap::Round,
    };
    Layer::new(LayerKind::Mouth).with(DrawOp::stroke(curve, style))
}
