//! QR symbol computation seam
//!
//! The core never does Reed-Solomon or masking itself; it asks a
//! [`SymbolEncoder`] for a [`ModuleMatrix`].

mod encoder;
mod matrix;

pub use encoder::{side_for_version, EcLevel, QrEncoder, SymbolEncoder, MAX_VERSION};
pub use matrix::ModuleMatrix;
