#![deny(unsafe_code)]
//! Core types for the avatar-engine cartoon avatar renderer.
//!
//! Provides the `AvatarConfig` parameter model (ranges, clamping, JSON), the
//! `Rgb` color type with its darken adjustment, the `Xorshift64` PRNG and
//! randomizer, the `Scene`/`Layer` draw-list model, the `Surface` trait and
//! the pure renderer that maps a config to a scene.

pub mod color;
pub mod config;
pub mod error;
pub mod params;
pub mod prng;
pub mod randomize;
pub mod render;
pub mod scene;
pub mod surface;

pub use color::Rgb;
pub use config::{AvatarConfig, ConfigField, FieldRange, HairStyle, NoseType};
pub use error::AvatarError;
pub use prng::Xorshift64;
pub use randomize::randomize;
pub use render::{render, render_scene};
pub use scene::{Canvas, Layer, LayerKind, Scene};
pub use surface::Surface;
