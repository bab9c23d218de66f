//! Ships and the textual ship list accepted by `add_ships`.

use alloc::{collections::BTreeSet, vec::Vec};

use crate::core::common::FieldError;
use crate::core::coordinate::{cells_of, parse_coordinate, Coordinate};

/// Index of a ship in the field's ship list. Grid cells refer to ships by id
/// so every hit lands on the one shared counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShipId(pub usize);

/// A placed ship: an axis-aligned rectangle of cells plus its buffer zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    corners: [Coordinate; 2],
    inner: BTreeSet<Coordinate>,
    outer: BTreeSet<Coordinate>,
    alive_cells: usize,
    knocked: bool,
}

impl Ship {
    /// Build a ship spanning the rectangle between two corners, in any order.
    ///
    /// Cost grows with the area of the rectangle; callers bound the corners
    /// by the grid first.
    pub fn new(a: Coordinate, b: Coordinate) -> Self {
        let (inner, outer) = cells_of(a, b);
        Self {
            corners: [a, b],
            alive_cells: inner.len(),
            inner,
            outer,
            knocked: false,
        }
    }

    /// Corners exactly as supplied.
    pub fn corners(&self) -> [Coordinate; 2] {
        self.corners
    }

    /// Cells occupied by the ship.
    pub fn inner(&self) -> &BTreeSet<Coordinate> {
        &self.inner
    }

    /// Cells adjacent to the ship, diagonals included.
    pub fn outer(&self) -> &BTreeSet<Coordinate> {
        &self.outer
    }

    pub fn alive_cells(&self) -> usize {
        self.alive_cells
    }

    /// Hit at least once but still afloat.
    pub fn is_knocked(&self) -> bool {
        self.knocked
    }

    pub fn is_destroyed(&self) -> bool {
        self.alive_cells == 0
    }

    /// Register a hit on one of the ship's cells.
    ///
    /// Returns `(first_hit, destroyed)`.
    pub(crate) fn hit(&mut self) -> (bool, bool) {
        let first_hit = self.alive_cells == self.inner.len();
        self.alive_cells = self.alive_cells.saturating_sub(1);
        let destroyed = self.alive_cells == 0;
        self.knocked = !destroyed;
        (first_hit, destroyed)
    }
}

/// Parse a ship list such as `"A1 B2,C4 C6"` into corner pairs.
///
/// Ships are separated by commas; each ship is two corner coordinates
/// separated by exactly one space. Corners are not checked against any
/// field, so no cells are computed here.
pub fn parse_ships(input: &str) -> Result<Vec<[Coordinate; 2]>, FieldError> {
    if input.is_empty() {
        return Err(FieldError::InvalidCoordinate);
    }
    input
        .split(',')
        .map(|pair| {
            let mut corners = pair.split(' ');
            match (corners.next(), corners.next(), corners.next()) {
                (Some(a), Some(b), None) => {
                    let a = parse_coordinate(a).ok_or(FieldError::InvalidCoordinate)?;
                    let b = parse_coordinate(b).ok_or(FieldError::InvalidCoordinate)?;
                    Ok([a, b])
                }
                _ => Err(FieldError::InvalidCoordinate),
            }
        })
        .collect()
}
