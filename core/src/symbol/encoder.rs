//! QR symbol encoding backed by the `qrcode` crate

use std::fmt;
use std::str::FromStr;

use qrcode::types::QrError;
use qrcode::{QrCode, Version};
use serde::{Deserialize, Serialize};

use super::ModuleMatrix;
use crate::{Error, Result};

/// Highest normal QR version
pub const MAX_VERSION: i16 = 40;

/// QR error-correction level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EcLevel {
    /// ~7% recovery
    L,
    /// ~15% recovery
    M,
    /// ~25% recovery
    #[default]
    Q,
    /// ~30% recovery
    H,
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for EcLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LOW" => Ok(EcLevel::L),
            "M" | "MEDIUM" => Ok(EcLevel::M),
            "Q" | "QUARTILE" => Ok(EcLevel::Q),
            "H" | "HIGH" => Ok(EcLevel::H),
            _ => Err(Error::InvalidEcLevel(s.to_string())),
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        };
        f.write_str(name)
    }
}

/// Turns a payload into a module grid.
///
/// Implementations must be deterministic and must report an oversized
/// payload as [`Error::EncodingCapacityExceeded`].
pub trait SymbolEncoder {
    fn encode(&self, payload: &str, ec_level: EcLevel) -> Result<ModuleMatrix>;
}

/// Encoder that starts at `min_version` and grows to the smallest version
/// holding the payload.
#[derive(Debug, Clone, Copy)]
pub struct QrEncoder {
    min_version: i16,
}

impl QrEncoder {
    pub fn new(min_version: i16) -> Self {
        Self {
            min_version: min_version.clamp(1, MAX_VERSION),
        }
    }

    pub fn min_version(&self) -> i16 {
        self.min_version
    }

    /// Encode and keep the `qrcode` symbol itself, for callers that want
    /// its own renderers.
    pub fn encode_code(&self, payload: &str, ec_level: EcLevel) -> Result<QrCode> {
        let level = qrcode::EcLevel::from(ec_level);
        let code = QrCode::with_error_correction_level(payload.as_bytes(), level)
            .map_err(capacity_error)?;

        match code.version() {
            Version::Normal(v) if v < self.min_version => {
                QrCode::with_version(payload.as_bytes(), Version::Normal(self.min_version), level)
                    .map_err(capacity_error)
            }
            _ => Ok(code),
        }
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new(crate::render::DEFAULT_MIN_VERSION)
    }
}

impl SymbolEncoder for QrEncoder {
    fn encode(&self, payload: &str, ec_level: EcLevel) -> Result<ModuleMatrix> {
        let code = self.encode_code(payload, ec_level)?;
        tracing::debug!(
            "encoded {} payload bytes as {:?} at level {}",
            payload.len(),
            code.version(),
            ec_level
        );
        Ok(ModuleMatrix::from(&code))
    }
}

fn capacity_error(err: QrError) -> Error {
    Error::EncodingCapacityExceeded(err.to_string())
}

/// Side length in modules of a normal QR version.
pub fn side_for_version(version: i16) -> usize {
    17 + 4 * version as usize
}
