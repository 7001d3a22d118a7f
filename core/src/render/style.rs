//! Module drawing styles and the per-module shape rule

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::serde_utils::hex_color;
use super::Color;
use crate::Error;

/// How each dark module is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStyle {
    #[default]
    Square,
    GappedSquare,
    Dot,
    Rounded,
    VerticalBars,
    HorizontalBars,
}

impl RenderStyle {
    pub const ALL: [RenderStyle; 6] = [
        RenderStyle::Square,
        RenderStyle::GappedSquare,
        RenderStyle::Dot,
        RenderStyle::Rounded,
        RenderStyle::VerticalBars,
        RenderStyle::HorizontalBars,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RenderStyle::Square => "square",
            RenderStyle::GappedSquare => "gapped-square",
            RenderStyle::Dot => "dot",
            RenderStyle::Rounded => "rounded",
            RenderStyle::VerticalBars => "vertical-bars",
            RenderStyle::HorizontalBars => "horizontal-bars",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RenderStyle::Square => "solid squares",
            RenderStyle::GappedSquare => "squares with a gap between modules",
            RenderStyle::Dot => "circular dots",
            RenderStyle::Rounded => "squares with rounded outer corners",
            RenderStyle::VerticalBars => "vertically joined bars",
            RenderStyle::HorizontalBars => "horizontally joined bars",
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "square" | "squares" => Ok(RenderStyle::Square),
            "gapped-square" | "gapped" => Ok(RenderStyle::GappedSquare),
            "dot" | "dots" | "circle" => Ok(RenderStyle::Dot),
            "rounded" | "round" => Ok(RenderStyle::Rounded),
            "vertical-bars" | "vertical" => Ok(RenderStyle::VerticalBars),
            "horizontal-bars" | "horizontal" => Ok(RenderStyle::HorizontalBars),
            _ => Err(Error::InvalidStyle(s.to_string())),
        }
    }
}

/// One drawable record of a vector document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rect {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        corner_radius: Option<f64>,
        #[serde(with = "hex_color")]
        fill: Color,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        #[serde(with = "hex_color")]
        fill: Color,
    },
}

/// Shape for the dark module at column `x`, row `y`.
///
/// Only `Dot` and `Rounded` differ here; the remaining styles are drawn as
/// full-cell squares in vector output and only diverge in raster output.
pub fn shape_for(style: RenderStyle, x: usize, y: usize, module_size: u32, color: Color) -> Shape {
    let size = f64::from(module_size);
    match style {
        RenderStyle::Dot => Shape::Circle {
            cx: (x as f64 + 0.5) * size,
            cy: (y as f64 + 0.5) * size,
            r: size / 2.0,
            fill: color,
        },
        RenderStyle::Rounded => Shape::Rect {
            x: x as u32 * module_size,
            y: y as u32 * module_size,
            width: module_size,
            height: module_size,
            corner_radius: Some(size / 4.0),
            fill: color,
        },
        RenderStyle::Square
        | RenderStyle::GappedSquare
        | RenderStyle::VerticalBars
        | RenderStyle::HorizontalBars => Shape::Rect {
            x: x as u32 * module_size,
            y: y as u32 * module_size,
            width: module_size,
            height: module_size,
            corner_radius: None,
            fill: color,
        },
    }
}
