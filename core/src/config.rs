//! Rendering configuration

use std::num::NonZeroU32;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::render::serde_utils::hex_color;
use crate::render::{
    Color, RenderStyle, DEFAULT_BORDER, DEFAULT_MIN_VERSION, DEFAULT_MODULE_SIZE, MAX_MODULE_SIZE,
    MIN_MODULE_SIZE,
};
use crate::symbol::{EcLevel, MAX_VERSION};
use crate::{Error, Result};

/// How a payload is turned into a symbol and drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Error-correction level requested from the encoder
    pub ec_level: EcLevel,
    /// Pixels per module, 5-20
    pub module_size: u32,
    /// Module drawing style
    pub style: RenderStyle,
    /// Dark module color
    #[serde(with = "hex_color")]
    pub foreground: Color,
    /// Light module and canvas color
    #[serde(with = "hex_color")]
    pub background: Color,
    /// Smallest QR version; larger payloads grow the symbol
    pub min_version: i16,
    /// Quiet zone in modules (raster output only)
    pub border: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::Q,
            module_size: DEFAULT_MODULE_SIZE,
            style: RenderStyle::Square,
            foreground: Color::BLACK,
            background: Color::WHITE,
            min_version: DEFAULT_MIN_VERSION,
            border: DEFAULT_BORDER,
        }
    }
}

impl StyleConfig {
    /// Load from a JSON file; absent fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_MODULE_SIZE..=MAX_MODULE_SIZE).contains(&self.module_size) {
            return Err(Error::InvalidModuleSize(self.module_size));
        }
        if !(1..=MAX_VERSION).contains(&self.min_version) {
            return Err(Error::Config(format!(
                "min_version {} is out of range (1-{})",
                self.min_version, MAX_VERSION
            )));
        }
        Ok(())
    }

    /// Module size as a renderer argument; fails outside 5-20.
    pub fn module_size(&self) -> Result<NonZeroU32> {
        self.validate()?;
        NonZeroU32::new(self.module_size).ok_or(Error::InvalidModuleSize(self.module_size))
    }
}
