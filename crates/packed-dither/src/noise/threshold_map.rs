//! Bayer ordered-dithering threshold maps.
//!
//! The two supported base matrices are the canonical Bayer index matrices
//! of order 4 and 8. Their ordering is the whole point of ordered
//! dithering, so the tables are literal and must not be re-derived or
//! sorted.
//!
//! ```text
//!     0   1   2   3   (x mod 4)
//!   ┌───┬───┬───┬───┐
//! 0 │ 0 │ 8 │ 2 │10 │
//!   ├───┼───┼───┼───┤
//! 1 │12 │ 4 │14 │ 6 │
//!   ├───┼───┼───┼───┤
//! 2 │ 3 │11 │ 1 │ 9 │
//!   ├───┼───┼───┼───┤
//! 3 │15 │ 7 │13 │ 5 │
//!   └───┴───┴───┴───┘
//! ```

use std::fmt;
use std::sync::OnceLock;

use crate::error::QuantizeError;

/// Bayer index matrix of order 4, row-major.
const BAYER_4: [u8; 16] = [
    0, 8, 2, 10, //
    12, 4, 14, 6, //
    3, 11, 1, 9, //
    15, 7, 13, 5,
];

/// Bayer index matrix of order 8, row-major.
const BAYER_8: [u8; 64] = [
    0, 32, 8, 40, 2, 34, 10, 42, //
    48, 16, 56, 24, 50, 18, 58, 26, //
    12, 44, 4, 36, 14, 46, 6, 38, //
    60, 28, 52, 20, 62, 30, 54, 22, //
    3, 35, 11, 43, 1, 33, 9, 41, //
    51, 19, 59, 27, 49, 17, 57, 25, //
    15, 47, 7, 39, 13, 45, 5, 37, //
    63, 31, 55, 23, 61, 29, 53, 21,
];

static MAP_4: OnceLock<ThresholdMap> = OnceLock::new();
static MAP_8: OnceLock<ThresholdMap> = OnceLock::new();

/// A centered n x n ordered-dithering matrix, tileable over the image plane.
///
/// Entries are `bayer[i] / n² - 0.5`, so they lie in `[-0.5, 0.5)`.
/// Immutable once built.
///
/// # Example
///
/// ```
/// use packed_dither::ThresholdMap;
///
/// let map = ThresholdMap::new(4).unwrap();
/// assert_eq!(map.order(), 4);
/// assert_eq!(map.threshold_at(0, 0), -0.5);
/// assert_eq!(map.threshold_at(4, 4), map.threshold_at(0, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdMap {
    /// Matrix order (4 or 8).
    order: usize,
    /// Centered values, row-major, `order * order` entries.
    values: Vec<f32>,
}

impl ThresholdMap {
    /// Build the centered threshold map of the given order.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::UnsupportedMatrixSize`] for any order other than
    /// 4 or 8.
    pub fn new(order: usize) -> Result<Self, QuantizeError> {
        let base: &[u8] = match order {
            4 => &BAYER_4,
            8 => &BAYER_8,
            _ => return Err(QuantizeError::UnsupportedMatrixSize { order }),
        };

        let div = 1.0f32 / (order * order) as f32;
        let values = base.iter().map(|&m| m as f32 * div - 0.5).collect();

        Ok(Self { order, values })
    }

    /// Process-wide shared instance of the map of the given order.
    ///
    /// Built on first use and reused afterwards.
    pub fn shared(order: usize) -> Result<&'static Self, QuantizeError> {
        let cell = match order {
            4 => &MAP_4,
            8 => &MAP_8,
            _ => return Err(QuantizeError::UnsupportedMatrixSize { order }),
        };
        if let Some(map) = cell.get() {
            return Ok(map);
        }
        let map = Self::new(order)?;
        Ok(cell.get_or_init(|| map))
    }

    /// Matrix order `n`.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Centered values, row-major.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Threshold at pixel `(x, y)`, tiling the matrix infinitely.
    ///
    /// Returns `map[y mod n][x mod n]`.
    #[inline]
    pub fn threshold_at(&self, x: u32, y: u32) -> f32 {
        let n = self.order;
        let x = x as usize % n;
        let y = y as usize % n;
        self.values[y * n + x]
    }
}

impl fmt::Display for ThresholdMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.values.chunks(self.order) {
            for v in row {
                write!(f, "{:5.3}  ", v)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
