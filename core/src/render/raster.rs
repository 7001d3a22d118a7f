//! Raster rendering with per-style module drawers
//!
//! Unlike vector output, every style has its own drawer here. The image
//! includes a quiet zone of `border` modules on each side.

use std::num::NonZeroU32;
use std::path::Path;

use image::{DynamicImage, Rgba, RgbaImage};

use super::{Color, RenderStyle};
use crate::symbol::ModuleMatrix;
use crate::{Error, Result};

/// Logo side is at most this fraction of the image side
const LOGO_FRACTION: u32 = 4;

/// Render `matrix` to an RGBA image.
pub fn render_raster(
    matrix: &ModuleMatrix,
    module_size: NonZeroU32,
    border: u32,
    style: RenderStyle,
    fg: Color,
    bg: Color,
) -> RgbaImage {
    let size = module_size.get();
    let side = (matrix.side() as u32 + 2 * border) * size;
    let mut img = RgbaImage::from_pixel(side, side, bg.to_rgba());
    let fg = fg.to_rgba();

    for (x, y) in matrix.dark_modules() {
        let cell = Cell {
            left: (x as u32 + border) * size,
            top: (y as u32 + border) * size,
            size,
        };
        let neighbours = Neighbours::of(matrix, x, y);
        draw_module(&mut img, style, cell, neighbours, fg);
    }

    tracing::debug!("rasterized {}x{} image ({})", side, side, style);
    img
}

/// Pixel bounds of one module
#[derive(Debug, Clone, Copy)]
struct Cell {
    left: u32,
    top: u32,
    size: u32,
}

/// Which orthogonal neighbours are dark
#[derive(Debug, Clone, Copy)]
struct Neighbours {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl Neighbours {
    fn of(matrix: &ModuleMatrix, x: usize, y: usize) -> Self {
        Self {
            up: y.checked_sub(1).is_some_and(|y| matrix.is_dark(x, y)),
            down: matrix.is_dark(x, y + 1),
            left: x.checked_sub(1).is_some_and(|x| matrix.is_dark(x, y)),
            right: matrix.is_dark(x + 1, y),
        }
    }
}

fn draw_module(img: &mut RgbaImage, style: RenderStyle, cell: Cell, n: Neighbours, fg: Rgba<u8>) {
    let s = cell.size;
    // about 80% of the cell, with an equal gap on both sides
    let inset = ((s + 5) / 10).max(1);
    let inner = s - 2 * inset;

    match style {
        RenderStyle::Square => fill_cell(img, cell, |_, _| true, fg),
        RenderStyle::GappedSquare => fill_cell(
            img,
            cell,
            |dx, dy| within(dx, inset, inner) && within(dy, inset, inner),
            fg,
        ),
        RenderStyle::Dot => fill_cell(img, cell, |dx, dy| in_circle(dx, dy, s, s, s), fg),
        RenderStyle::Rounded => {
            let r = s / 2;
            fill_cell(
                img,
                cell,
                |dx, dy| {
                    let left_half = dx < r;
                    let top_half = dy < r;
                    let rounded = match (left_half, top_half) {
                        (true, true) => !n.up && !n.left,
                        (false, true) => !n.up && !n.right,
                        (true, false) => !n.down && !n.left,
                        (false, false) => !n.down && !n.right,
                    };
                    !rounded || in_corner_arc(dx, dy, s, r)
                },
                fg,
            )
        }
        RenderStyle::VerticalBars => fill_cell(
            img,
            cell,
            |dx, dy| {
                let top = if n.up { 0 } else { inset };
                let bottom = if n.down { s } else { s - inset };
                within(dx, inset, inner) && dy >= top && dy < bottom
            },
            fg,
        ),
        RenderStyle::HorizontalBars => fill_cell(
            img,
            cell,
            |dx, dy| {
                let left = if n.left { 0 } else { inset };
                let right = if n.right { s } else { s - inset };
                within(dy, inset, inner) && dx >= left && dx < right
            },
            fg,
        ),
    }
}

/// Paint every pixel of `cell` for which `inside(dx, dy)` holds.
fn fill_cell(img: &mut RgbaImage, cell: Cell, inside: impl Fn(u32, u32) -> bool, fg: Rgba<u8>) {
    for dy in 0..cell.size {
        for dx in 0..cell.size {
            if inside(dx, dy) {
                img.put_pixel(cell.left + dx, cell.top + dy, fg);
            }
        }
    }
}

fn within(v: u32, start: u32, len: u32) -> bool {
    v >= start && v < start + len
}

/// Pixel centre inside the circle of diameter `d` centred at (`cx2`/2, `cy2`/2).
/// All values are doubled to stay in integers.
fn in_circle(dx: u32, dy: u32, cx2: u32, cy2: u32, d: u32) -> bool {
    let px = i64::from(2 * dx + 1) - i64::from(cx2);
    let py = i64::from(2 * dy + 1) - i64::from(cy2);
    px * px + py * py <= i64::from(d) * i64::from(d)
}

/// Inside the quarter circle of radius `r` that rounds the corner nearest
/// to (`dx`, `dy`) in a cell of side `s`.
fn in_corner_arc(dx: u32, dy: u32, s: u32, r: u32) -> bool {
    let cx2 = if dx < r { 2 * r } else { 2 * (s - r) };
    let cy2 = if dy < r { 2 * r } else { 2 * (s - r) };
    in_circle(dx, dy, cx2, cy2, 2 * r)
}

/// Load a logo from disk and composite it at the centre of `img`.
pub fn overlay_logo(img: &mut RgbaImage, logo_path: &Path) -> Result<()> {
    let logo = image::open(logo_path)
        .map_err(|e| Error::LogoCompositionFailed(format!("{}: {}", logo_path.display(), e)))?;
    overlay_logo_image(img, &logo)
}

/// Composite `logo` at the centre of `img`, scaled down (aspect kept) to fit
/// a quarter of the image side. Logos already small enough are not scaled.
pub fn overlay_logo_image(img: &mut RgbaImage, logo: &DynamicImage) -> Result<()> {
    if logo.width() == 0 || logo.height() == 0 {
        return Err(Error::LogoCompositionFailed("logo has no pixels".to_string()));
    }

    let max_w = img.width() / LOGO_FRACTION;
    let max_h = img.height() / LOGO_FRACTION;
    if max_w == 0 || max_h == 0 {
        return Err(Error::LogoCompositionFailed("image too small for a logo".to_string()));
    }

    let logo = if logo.width() > max_w || logo.height() > max_h {
        logo.thumbnail(max_w, max_h)
    } else {
        logo.clone()
    };
    let logo = logo.to_rgba8();

    let x = (img.width() - logo.width()) / 2;
    let y = (img.height() - logo.height()) / 2;
    image::imageops::overlay(img, &logo, i64::from(x), i64::from(y));
    Ok(())
}
