//! Coordinate parsing and ship geometry.
//!
//! Coordinates are written as a column letter followed by a 1-based row
//! number (`"B5"`). Internally both axes are zero-based.

use alloc::collections::BTreeSet;
use core::fmt;

use crate::core::config::{FIRST_COLUMN, LAST_COLUMN};

/// Zero-based position of a cell on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub col: usize,
    pub row: usize,
}

impl Coordinate {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Build a coordinate from a `(col, row)` pair.
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for Coordinate {
    /// Renders the coordinate back in its input form, e.g. `B5`. Columns past
    /// the alphabet are rendered as `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = FIRST_COLUMN as usize + self.col;
        let letter = if letter <= LAST_COLUMN as usize {
            letter as u8 as char
        } else {
            '?'
        };
        write!(f, "{}{}", letter, self.row + 1)
    }
}

/// Parse a coordinate such as `"b5"` or `" B50 "`.
///
/// Returns `None` for empty input, a first character outside `A..=Z`, a
/// non-numeric remainder or a row number of zero.
pub fn parse_coordinate(input: &str) -> Option<Coordinate> {
    let s = input.trim();
    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let letter = bytes[0].to_ascii_uppercase();
    if !(FIRST_COLUMN..=LAST_COLUMN).contains(&letter) {
        return None;
    }
    // first byte is ASCII, so index 1 is a char boundary
    let row: usize = s[1..].parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Coordinate::new((letter - FIRST_COLUMN) as usize, row - 1))
}

/// Inclusive bounding box spanned by two corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    min_col: usize,
    max_col: usize,
    min_row: usize,
    max_row: usize,
}

impl Bounds {
    fn from_corners(a: Coordinate, b: Coordinate) -> Self {
        Self {
            min_col: a.col.min(b.col),
            max_col: a.col.max(b.col),
            min_row: a.row.min(b.row),
            max_row: a.row.max(b.row),
        }
    }

    /// Grow by one cell in every direction, never below zero.
    fn expanded(self) -> Self {
        Self {
            min_col: self.min_col.saturating_sub(1),
            max_col: self.max_col.saturating_add(1),
            min_row: self.min_row.saturating_sub(1),
            max_row: self.max_row.saturating_add(1),
        }
    }

    fn cells(self) -> impl Iterator<Item = Coordinate> {
        (self.min_col..=self.max_col)
            .flat_map(move |col| (self.min_row..=self.max_row).map(move |row| Coordinate::new(col, row)))
    }
}

/// Compute the cells a ship with the given corners occupies (`inner`) and
/// the buffer cells around it (`outer`).
///
/// The corners may be given in any order. `outer` is clipped at zero but not
/// at the far edge; cells past the field are ignored when placing.
pub fn cells_of(a: Coordinate, b: Coordinate) -> (BTreeSet<Coordinate>, BTreeSet<Coordinate>) {
    let bounds = Bounds::from_corners(a, b);
    let inner: BTreeSet<Coordinate> = bounds.cells().collect();
    let outer = bounds
        .expanded()
        .cells()
        .filter(|c| !inner.contains(c))
        .collect();
    (inner, outer)
}
