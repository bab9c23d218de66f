//! Square grid of cells backing a field.

use alloc::{vec, vec::Vec};

use crate::core::common::FieldError;
use crate::core::config::is_valid_size;
use crate::core::coordinate::Coordinate;
use crate::core::ship::{Ship, ShipId};

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Set for ship cells and for the buffer zone around ships.
    pub occupied: bool,
    /// Ship occupying the cell. Implies `occupied`.
    pub ship: Option<ShipId>,
    /// Set once the cell has been shot; never cleared.
    pub shot: bool,
}

/// Observable state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Ship,
    ShotEmpty,
    ShotShipAlive,
    ShotShipDestroyed,
}

/// `size` x `size` cells stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Fails unless `1 <= size <= 26`.
    pub fn new(size: usize) -> Result<Self, FieldError> {
        if !is_valid_size(size) {
            return Err(FieldError::InvalidSize);
        }
        Ok(Self {
            size,
            cells: vec![Cell::default(); size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        if coord.col < self.size && coord.row < self.size {
            Some(coord.row * self.size + coord.col)
        } else {
            None
        }
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.index(coord).is_some()
    }

    /// Cell at `coord`, or `None` if it lies outside the grid.
    pub fn get(&self, coord: Coordinate) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        self.index(coord).map(move |i| &mut self.cells[i])
    }

    /// Check that every inner cell of `ship` is free to take a ship.
    fn check_placement(&self, ship: &Ship) -> Result<(), FieldError> {
        for &coord in ship.inner() {
            match self.get(coord) {
                None => return Err(FieldError::OutOfBounds),
                Some(cell) if cell.ship.is_some() => return Err(FieldError::OccupiedByShip),
                Some(cell) if cell.occupied => return Err(FieldError::OccupiedNearby),
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Write a ship and its buffer zone into the grid.
    ///
    /// All inner cells are validated before anything is written, so a
    /// rejected ship leaves the grid untouched. Buffer cells outside the
    /// grid are skipped.
    pub fn place_ship(&mut self, id: ShipId, ship: &Ship) -> Result<(), FieldError> {
        self.check_placement(ship)?;
        for &coord in ship.inner() {
            if let Some(cell) = self.get_mut(coord) {
                cell.occupied = true;
                cell.ship = Some(id);
            }
        }
        for &coord in ship.outer() {
            if let Some(cell) = self.get_mut(coord) {
                cell.occupied = true;
            }
        }
        Ok(())
    }
}
