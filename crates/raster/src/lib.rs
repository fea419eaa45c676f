#![deny(unsafe_code)]
//! Raster backend for the avatar-engine: a `tiny-skia` drawing surface, PNG
//! export and the studio that keeps a config and its surface in sync.
//!
//! This crate sits on top of `avatar-engine-core`, which defines the
//! `Surface` trait and the renderer. Nothing in core depends on a rasterizer.

pub mod path;
pub mod pixel;
pub mod studio;
pub mod surface;

#[cfg(feature = "png")]
pub mod export;

pub use studio::AvatarStudio;
pub use surface::PixmapSurface;

#[cfg(feature = "png")]
pub use export::{encode_png, export, write_png, Export};
