//! Generation facade: content -> payload -> module matrix -> renderings

use std::path::Path;

use image::RgbaImage;

use crate::config::StyleConfig;
use crate::payload::Content;
use crate::render::{self, VectorDocument};
use crate::symbol::{ModuleMatrix, QrEncoder, SymbolEncoder};
use crate::{Error, Result};

/// Result of one successful generation
#[derive(Debug, Clone)]
pub struct Generation {
    /// The string embedded in the symbol
    pub payload: String,
    pub matrix: ModuleMatrix,
    pub vector: VectorDocument,
}

/// Raster rendering of a generation
#[derive(Debug)]
pub struct Raster {
    pub image: RgbaImage,
    /// Set when a logo was requested but could not be composited; the image
    /// is then returned without it.
    pub logo_error: Option<Error>,
}

/// Turns content into QR renderings using a fixed style configuration.
///
/// Holds no state between calls; one `Generator` can serve any number of
/// independent requests.
#[derive(Debug, Clone)]
pub struct Generator<E = QrEncoder> {
    config: StyleConfig,
    encoder: E,
}

impl Generator<QrEncoder> {
    /// Create a generator backed by the `qrcode` crate
    pub fn new(config: StyleConfig) -> Result<Self> {
        let encoder = QrEncoder::new(config.min_version);
        Self::with_encoder(config, encoder)
    }
}

impl<E: SymbolEncoder> Generator<E> {
    /// Create a generator with a custom symbol encoder
    pub fn with_encoder(config: StyleConfig, encoder: E) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, encoder })
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Encode `content` and render it.
    ///
    /// Fails with [`Error::EmptyInput`] before touching the encoder when the
    /// content yields no payload.
    pub fn generate(&self, content: &Content) -> Result<Generation> {
        let payload = content.encode();
        tracing::debug!("{} content encoded to {} chars", content.kind(), payload.chars().count());
        self.generate_payload(payload)
    }

    /// Render an already encoded payload.
    pub fn generate_payload(&self, payload: String) -> Result<Generation> {
        if payload.is_empty() {
            return Err(Error::EmptyInput);
        }

        let matrix = self.encoder.encode(&payload, self.config.ec_level)?;
        let vector = render::render(
            &matrix,
            self.config.module_size()?,
            self.config.style,
            self.config.foreground,
            self.config.background,
        );

        tracing::info!(
            "generated {}x{} symbol ({} style, level {})",
            matrix.side(),
            matrix.side(),
            self.config.style,
            self.config.ec_level
        );
        Ok(Generation { payload, matrix, vector })
    }

    /// Rasterize a generation, optionally with a centred logo.
    ///
    /// A logo failure does not fail the call: it is logged and reported in
    /// [`Raster::logo_error`].
    pub fn rasterize(&self, generation: &Generation, logo: Option<&Path>) -> Result<Raster> {
        let mut image = render::render_raster(
            &generation.matrix,
            self.config.module_size()?,
            self.config.border,
            self.config.style,
            self.config.foreground,
            self.config.background,
        );

        let logo_error = match logo {
            Some(path) => match render::overlay_logo(&mut image, path) {
                Ok(()) => None,
                Err(e) => {
                    tracing::warn!("continuing without logo: {}", e);
                    Some(e)
                }
            },
            None => None,
        };

        Ok(Raster { image, logo_error })
    }
}

/// Generate with the default encoder.
pub fn generate(content: &Content, config: &StyleConfig) -> Result<Generation> {
    Generator::new(config.clone())?.generate(content)
}
