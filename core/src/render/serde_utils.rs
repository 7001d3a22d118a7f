//! Serde helpers for render types
//!
//! Colors travel as `#RRGGBB` strings in JSON config files and vector
//! document dumps.

use serde::{Deserialize, Deserializer, Serializer};

/// Serialize/deserialize a [`Color`](super::Color) as a hex string.
///
/// Usage:
/// ```ignore
/// #[serde(with = "crate::render::serde_utils::hex_color")]
/// pub fill: Color,
/// ```
pub mod hex_color {
    use super::*;
    use crate::render::Color;

    pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&color.to_hex())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
