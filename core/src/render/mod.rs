//! Rendering of module matrices
//!
//! - `style`: module drawing styles and the vector shape rule
//! - `vector`: shape-list documents serializable as SVG
//! - [`raster`]: styled RGBA images with optional logo

mod color;
pub mod raster;
pub mod serde_utils;
mod style;
mod vector;

pub use color::Color;
pub use raster::{overlay_logo, overlay_logo_image, render_raster};
pub use style::{shape_for, RenderStyle, Shape};
pub use vector::{render, VectorDocument};

/// Smallest module size accepted from callers, in pixels
pub const MIN_MODULE_SIZE: u32 = 5;

/// Largest module size accepted from callers, in pixels
pub const MAX_MODULE_SIZE: u32 = 20;

/// Default module size, in pixels
pub const DEFAULT_MODULE_SIZE: u32 = 10;

/// Default quiet zone, in modules
pub const DEFAULT_BORDER: u32 = 4;

/// Default smallest QR version a symbol is grown from
pub const DEFAULT_MIN_VERSION: i16 = 5;
