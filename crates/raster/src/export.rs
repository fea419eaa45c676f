//! PNG export of a rendered [`PixmapSurface`].
//!
//! Feature-gated behind `png` (default on) so that embedders which only blit
//! raw pixels do not pull in the `image` crate. The straight-alpha conversion
//! lives in [`crate::pixel`].

use std::io::Cursor;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use avatar_engine_core::error::AvatarError;
use avatar_engine_core::Surface;
use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::surface::PixmapSurface;

/// Leading part of every exported file name.
pub const FILE_PREFIX: &str = "avatar-";

/// An encoded PNG together with its suggested download name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    file_name: String,
    bytes: Vec<u8>,
}

impl Export {
    /// `avatar-<unix millis>.png`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Download name for an export taken at `unix_millis`.
pub fn export_file_name(unix_millis: u128) -> String {
    format!("{FILE_PREFIX}{unix_millis}.png")
}

fn unix_millis_now() -> u128 {
    // A clock before 1970 is treated as the epoch.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

/// Encodes the surface as an RGBA PNG; transparent pixels stay transparent.
///
/// Returns `AvatarError::Encode` if the encoder rejects the buffer.
pub fn encode_png(surface: &PixmapSurface) -> Result<Vec<u8>, AvatarError> {
    let img = RgbaImage::from_raw(surface.width(), surface.height(), surface.to_rgba())
        .ok_or_else(|| AvatarError::Encode("RGBA buffer size mismatch".into()))?;
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| AvatarError::Encode(e.to_string()))?;
    Ok(bytes.into_inner())
}

/// Encodes the surface and names it after the given timestamp.
pub fn export_at(surface: &PixmapSurface, unix_millis: u128) -> Result<Export, AvatarError> {
    let bytes = encode_png(surface)?;
    let file_name = export_file_name(unix_millis);
    debug!(
        "exported {}: {}x{}, {} bytes",
        file_name,
        surface.width(),
        surface.height(),
        bytes.len()
    );
    Ok(Export { file_name, bytes })
}

/// Encodes the surface and names it after the current wall-clock time.
pub fn export(surface: &PixmapSurface) -> Result<Export, AvatarError> {
    export_at(surface, unix_millis_now())
}

/// Writes the surface to `path` as a PNG.
///
/// Returns `AvatarError::Encode` on encoder failure or `AvatarError::Io` on
/// write failure.
pub fn write_png(surface: &PixmapSurface, path: &Path) -> Result<(), AvatarError> {
    let bytes = encode_png(surface)?;
    std::fs::write(path, bytes).map_err(|e| AvatarError::Io(e.to_string()))
}
