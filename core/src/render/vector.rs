//! Vector rendering of a module matrix
//!
//! The output is a flat shape list: one full-canvas background rectangle,
//! then one shape per dark module in row-major order. It serializes to SVG
//! using only `<rect>` and `<circle>` elements.

use std::fmt::Write as _;
use std::num::NonZeroU32;

use serde::Serialize;

use super::style::{shape_for, RenderStyle, Shape};
use super::Color;
use crate::symbol::ModuleMatrix;

/// Resolution-independent rendering of a symbol
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorDocument {
    pub width: u32,
    pub height: u32,
    /// Background first, then lit modules
    pub shapes: Vec<Shape>,
}

impl VectorDocument {
    pub fn background(&self) -> Option<&Shape> {
        self.shapes.first()
    }

    /// Shapes drawn for dark modules
    pub fn module_shapes(&self) -> &[Shape] {
        self.shapes.get(1..).unwrap_or(&[])
    }

    /// Serialize as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{1}\" viewBox=\"0 0 {0} {1}\">\n",
            self.width, self.height
        );
        for shape in &self.shapes {
            // Writing to a String cannot fail
            let _ = match shape {
                Shape::Rect { x, y, width, height, corner_radius: Some(radius), fill } => writeln!(
                    svg,
                    "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" rx=\"{radius}\" ry=\"{radius}\" fill=\"{fill}\"/>"
                ),
                Shape::Rect { x, y, width, height, corner_radius: None, fill } => writeln!(
                    svg,
                    "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" fill=\"{fill}\"/>"
                ),
                Shape::Circle { cx, cy, r, fill } => {
                    writeln!(svg, "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"{fill}\"/>")
                }
            };
        }
        svg.push_str("</svg>\n");
        svg
    }
}

/// Render `matrix` with `module_size` units per module.
pub fn render(
    matrix: &ModuleMatrix,
    module_size: NonZeroU32,
    style: RenderStyle,
    fg: Color,
    bg: Color,
) -> VectorDocument {
    let module_size = module_size.get();
    let canvas = matrix.side() as u32 * module_size;

    let mut shapes = Vec::with_capacity(matrix.dark_count() + 1);
    shapes.push(Shape::Rect {
        x: 0,
        y: 0,
        width: canvas,
        height: canvas,
        corner_radius: None,
        fill: bg,
    });
    shapes.extend(
        matrix
            .dark_modules()
            .map(|(x, y)| shape_for(style, x, y, module_size, fg)),
    );

    tracing::debug!("rendered {} shapes on a {}px canvas", shapes.len(), canvas);
    VectorDocument {
        width: canvas,
        height: canvas,
        shapes,
    }
}
