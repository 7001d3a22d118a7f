use std::path::PathBuf;

use thiserror::Error;

/// qrkit error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("no data to encode")]
    EmptyInput,

    #[error("payload does not fit in a QR symbol: {0}; shorten the input or lower the error-correction level")]
    EncodingCapacityExceeded(String),

    #[error("could not add logo: {0}")]
    LogoCompositionFailed(String),

    #[error("failed to write {}: {source}", path.display())]
    PersistenceFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("module size {0} is out of range (5-20)")]
    InvalidModuleSize(u32),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("unknown module style: {0}")]
    InvalidStyle(String),

    #[error("unknown error-correction level: {0}")]
    InvalidEcLevel(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("Failed to serialize/deserialize: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
