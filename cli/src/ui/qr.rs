//! QR code display.

use qrkit_core::ModuleMatrix;

/// Quiet zone in modules around the terminal preview
const QUIET_ZONE: usize = 2;

/// Print a module matrix to the terminal.
pub fn print_qr_code(matrix: &ModuleMatrix) {
    print!("{}", render_blocks(matrix));
}

/// Render with Unicode block characters where each character represents
/// 2 vertical modules.
pub fn render_blocks(matrix: &ModuleMatrix) -> String {
    // Unicode block characters:
    // ▀ = top black, bottom white
    // ▄ = top white, bottom black
    // █ = both black
    // (space) = both white
    let width = matrix.side() + 2 * QUIET_ZONE;
    let blank = " ".repeat(width);
    let mut out = String::new();

    out.push_str(&blank);
    out.push('\n');

    for y in (0..matrix.side()).step_by(2) {
        out.push_str(&" ".repeat(QUIET_ZONE));
        for x in 0..matrix.side() {
            let top = matrix.is_dark(x, y);
            let bottom = matrix.is_dark(x, y + 1);

            let ch = match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            };
            out.push(ch);
        }
        out.push_str(&" ".repeat(QUIET_ZONE));
        out.push('\n');
    }

    out.push_str(&blank);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_blocks_pairs_rows() {
        let matrix = ModuleMatrix::from_rows(&[
            [true, false, true],
            [true, true, false],
            [false, true, false],
        ])
        .unwrap();
        let lines: Vec<String> = render_blocks(&matrix).lines().map(str::to_string).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "  █▄▀  ");
        assert_eq!(lines[2], "   ▀   ");
    }
}
