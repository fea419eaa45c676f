//! Config state plus an optional drawing surface, kept in sync.
//!
//! Every config replacement (field update, wholesale set, randomize)
//! re-renders immediately when a surface is attached. Without a surface the
//! studio still tracks the config; rendering and export become no-ops.

use avatar_engine_core::error::AvatarError;
use avatar_engine_core::{render, AvatarConfig, Xorshift64};
use serde_json::Value;
use tracing::trace;

#[cfg(feature = "png")]
use crate::export::{self, Export};
use crate::surface::PixmapSurface;

#[derive(Debug, Default)]
pub struct AvatarStudio {
    config: AvatarConfig,
    surface: Option<PixmapSurface>,
}

impl AvatarStudio {
    /// Studio with `config` and no surface.
    pub fn new(config: AvatarConfig) -> Self {
        Self {
            config,
            surface: None,
        }
    }

    /// Studio drawing onto `surface`, rendered once up front.
    pub fn with_surface(config: AvatarConfig, surface: PixmapSurface) -> Self {
        let mut studio = Self::new(config);
        studio.attach(surface);
        studio
    }

    pub fn config(&self) -> &AvatarConfig {
        &self.config
    }

    pub fn surface(&self) -> Option<&PixmapSurface> {
        self.surface.as_ref()
    }

    /// Attaches a surface (replacing any previous one) and renders onto it.
    pub fn attach(&mut self, surface: PixmapSurface) {
        self.surface = Some(surface);
        self.render();
    }

    /// Detaches and returns the current surface.
    pub fn detach(&mut self) -> Option<PixmapSurface> {
        self.surface.take()
    }

    /// Replaces the whole config and re-renders.
    pub fn set_config(&mut self, config: AvatarConfig) {
        self.config = config;
        self.render();
    }

    /// Applies a single named field update and re-renders.
    ///
    /// On error the previous config stays in effect and nothing is redrawn.
    pub fn update(&mut self, name: &str, raw: &Value) -> Result<(), AvatarError> {
        let next = self.config.update(name, raw)?;
        self.set_config(next);
        Ok(())
    }

    /// Replaces the config with a random one drawn from `rng` and re-renders.
    pub fn randomize(&mut self, rng: &mut Xorshift64) {
        self.set_config(avatar_engine_core::randomize(rng));
    }

    /// Clears the surface and redraws the current config.
    pub fn render(&mut self) {
        match self.surface.as_mut() {
            Some(surface) => render(&self.config, surface),
            None => trace!("no surface attached, skipping render"),
        }
    }

    /// Encodes the current surface as a PNG, `Ok(None)` without a surface.
    #[cfg(feature = "png")]
    pub fn export(&self) -> Result<Option<Export>, AvatarError> {
        let Some(surface) = self.surface.as_ref() else {
            trace!("no surface attached, skipping export");
            return Ok(None);
        };
        export::export(surface).map(Some)
    }
}
