//! Square module grid produced by the QR encoder

use serde::Serialize;

/// Read-only square grid of modules; `true` is dark.
///
/// The grid covers the symbol only. Quiet-zone border modules are added by
/// raster output, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleMatrix {
    side: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Build from rows; returns `None` unless every row has as many entries
    /// as there are rows.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Option<Self> {
        let side = rows.len();
        let mut modules = Vec::with_capacity(side * side);
        for row in rows {
            let row = row.as_ref();
            if row.len() != side {
                return None;
            }
            modules.extend_from_slice(row);
        }
        Some(Self { side, modules })
    }

    /// Build a `side` x `side` grid from a predicate over `(x, y)`.
    pub fn from_fn(side: usize, mut dark: impl FnMut(usize, usize) -> bool) -> Self {
        let mut modules = Vec::with_capacity(side * side);
        for y in 0..side {
            for x in 0..side {
                modules.push(dark(x, y));
            }
        }
        Self { side, modules }
    }

    pub fn empty() -> Self {
        Self { side: 0, modules: Vec::new() }
    }

    /// Number of modules along one edge
    pub fn side(&self) -> usize {
        self.side
    }

    /// Whether the module at column `x`, row `y` is dark. Out-of-range
    /// coordinates read as light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.side && y < self.side && self.modules[y * self.side + x]
    }

    /// Dark module coordinates in row-major order (y outer, x inner).
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let side = self.side;
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, dark)| **dark)
            .map(move |(i, _)| (i % side, i / side))
    }

    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|dark| **dark).count()
    }
}

impl From<&qrcode::QrCode> for ModuleMatrix {
    fn from(code: &qrcode::QrCode) -> Self {
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == qrcode::Color::Dark)
            .collect();
        Self { side: code.width(), modules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let matrix = ModuleMatrix::from_rows(&[[true, false], [false, true]]).unwrap();
        assert_eq!(matrix.side(), 2);
        assert!(matrix.is_dark(0, 0));
        assert!(!matrix.is_dark(1, 0));
        assert!(matrix.is_dark(1, 1));
        assert_eq!(matrix.dark_count(), 2);
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        assert!(ModuleMatrix::from_rows(&[vec![true, false]]).is_none());
        assert!(ModuleMatrix::from_rows(&[vec![true], vec![true, false]]).is_none());
    }

    #[test]
    fn test_out_of_range_is_light() {
        let matrix = ModuleMatrix::from_fn(3, |_, _| true);
        assert!(!matrix.is_dark(3, 0));
        assert!(!matrix.is_dark(0, 3));
        assert!(!ModuleMatrix::empty().is_dark(0, 0));
    }

    #[test]
    fn test_dark_modules_row_major() {
        let matrix = ModuleMatrix::from_fn(3, |x, y| x == y || (x == 2 && y == 0));
        let dark: Vec<_> = matrix.dark_modules().collect();
        assert_eq!(dark, [(0, 0), (2, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_from_qrcode() {
        let code = qrcode::QrCode::new(b"hello").unwrap();
        let matrix = ModuleMatrix::from(&code);
        assert_eq!(matrix.side(), code.width());
        assert_eq!(matrix.is_dark(0, 0), code[(0, 0)] == qrcode::Color::Dark);
        // finder pattern corner
        assert!(matrix.is_dark(0, 0));
        assert!(matrix.is_dark(6, 6));
    }
}
