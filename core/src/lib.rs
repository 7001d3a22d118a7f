//! qrkit core - payload encoding and module-matrix rendering
//!
//! This library turns structured input (text, URLs, Wi-Fi credentials,
//! email and SMS drafts, contact cards) into QR payload strings, asks a
//! QR encoder for the module matrix, and renders that matrix as a vector
//! document or a styled raster image.
//!
//! Every operation is synchronous and keeps no state between calls.

pub mod config;
pub mod export;
pub mod generator;
pub mod payload;
pub mod render;
pub mod symbol;

mod error;

pub use error::{Error, Result};

// Re-export key types for convenience
pub use config::StyleConfig;
pub use generator::{generate, Generation, Generator, Raster};
pub use payload::{
    ContactCard, Content, ContentKind, EmailDraft, PlainTextInput, SmsDraft, UrlInput,
    WifiCredential, WifiSecurity,
};
pub use render::{Color, RenderStyle, Shape, VectorDocument};
pub use symbol::{EcLevel, ModuleMatrix, QrEncoder, SymbolEncoder};
