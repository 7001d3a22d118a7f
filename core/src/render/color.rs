//! RGB color type.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Opaque RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // Common colors
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// `#RRGGBB`, uppercase.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Accepts `#RRGGBB`, `#RGB` (leading `#` optional) and a few names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "black" => return Ok(Color::BLACK),
            "white" => return Ok(Color::WHITE),
            "red" => return Ok(Color::rgb(255, 0, 0)),
            "green" => return Ok(Color::rgb(0, 128, 0)),
            "blue" => return Ok(Color::rgb(0, 0, 255)),
            "deepskyblue" => return Ok(Color::rgb(0, 191, 255)),
            _ => {}
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };

        match hex.len() {
            6 => Ok(Color::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Color::rgb(r * 17, g * 17, b * 17))
            }
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!("#4a6fa5".parse::<Color>().unwrap(), Color::rgb(0x4a, 0x6f, 0xa5));
        assert_eq!("FFFFFF".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#f00".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Black".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("deepskyblue".parse::<Color>().unwrap(), Color::rgb(0, 191, 255));
    }

    #[test]
    fn test_parse_invalid() {
        for bad in ["", "#12345", "#GGGGGG", "#+1+2+3", "#ąę", "chartreuse"] {
            assert!(bad.parse::<Color>().is_err(), "{bad}");
        }
    }

    #[test]
    fn test_hex_format() {
        assert_eq!(Color::rgb(0x0a, 0xbc, 0xff).to_hex(), "#0ABCFF");
        assert_eq!(Color::WHITE.to_string(), "#FFFFFF");
    }
}
