//! A single game: the grid, its ships and the running counters.

use alloc::vec::Vec;

use crate::core::common::FieldError;
use crate::core::coordinate::{parse_coordinate, Coordinate};
use crate::core::grid::{CellState, Grid};
use crate::core::ship::{parse_ships, Ship, ShipId};

/// Aggregate counters reported to callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    /// Ships placed in the current game.
    pub ship_count: usize,
    /// Ships with every cell hit.
    pub destroyed: usize,
    /// Ships hit at least once but still afloat.
    pub knocked: usize,
    /// Accepted shots.
    pub shots_fired: usize,
}

/// Outcome of a single accepted shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotResult {
    /// A ship was hit.
    pub knock: bool,
    /// The hit ship has no cells left.
    pub destroy: bool,
    /// No ships remain afloat.
    pub end: bool,
}

/// The game. Starts empty; `create` allocates a grid, `add_ships` fills it
/// once, `shoot` plays it until every ship is destroyed.
#[derive(Debug, Clone, Default)]
pub struct Field {
    grid: Option<Grid>,
    ships: Vec<Ship>,
    ships_placed: bool,
    over: bool,
    ships_alive: usize,
    state: State,
}

impl Field {
    /// An empty game with no grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh `size` x `size` grid, replacing a finished game.
    pub fn create(&mut self, size: usize) -> Result<(), FieldError> {
        let grid = Grid::new(size)?;
        if self.grid.is_some() && !self.over {
            return Err(FieldError::FieldAlreadySet);
        }
        *self = Self {
            grid: Some(grid),
            ..Self::default()
        };
        Ok(())
    }

    /// Drop the grid and every counter. Clearing an empty game is a no-op.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parse and place a batch of ships, returning how many were placed.
    ///
    /// The batch is applied to a staged copy of the grid and committed only
    /// if every ship fits, so a rejected batch leaves the field unchanged.
    /// The error is the first one met placing ships in input order.
    pub fn add_ships(&mut self, input: &str) -> Result<usize, FieldError> {
        if self.ships_placed {
            return Err(FieldError::ShipsAlreadyAdded);
        }
        let corners = parse_ships(input)?;
        // without a grid every cell is outside the field
        let grid = self.grid.as_ref().ok_or(FieldError::OutOfBounds)?;
        let mut staged = grid.clone();
        let mut ships = Vec::with_capacity(corners.len());
        for (i, [a, b]) in corners.into_iter().enumerate() {
            // both corners inside means the whole rectangle is
            if !staged.contains(a) || !staged.contains(b) {
                return Err(FieldError::OutOfBounds);
            }
            let ship = Ship::new(a, b);
            staged.place_ship(ShipId(i), &ship)?;
            ships.push(ship);
        }

        let count = ships.len();
        self.grid = Some(staged);
        self.ships = ships;
        self.ships_placed = true;
        self.ships_alive = count;
        self.state.ship_count = count;
        Ok(count)
    }

    /// Fire at the cell named by `input`.
    pub fn shoot(&mut self, input: &str) -> Result<ShotResult, FieldError> {
        if !self.ships_placed {
            return Err(FieldError::ShipsNotPlaced);
        }
        let coord = parse_coordinate(input).ok_or(FieldError::InvalidCoordinate)?;
        self.shoot_at(coord)
    }

    /// Fire at an already parsed coordinate.
    pub fn shoot_at(&mut self, coord: Coordinate) -> Result<ShotResult, FieldError> {
        if !self.ships_placed {
            return Err(FieldError::ShipsNotPlaced);
        }
        let grid = self.grid.as_mut().ok_or(FieldError::ShipsNotPlaced)?;
        let cell = grid.get_mut(coord).ok_or(FieldError::OutOfBounds)?;
        if cell.shot {
            return Err(FieldError::AlreadyShot);
        }
        cell.shot = true;
        let hit = cell.ship;

        let mut result = ShotResult::default();
        if let Some(ship) = hit.and_then(|id| self.ships.get_mut(id.0)) {
            let (first_hit, destroyed) = ship.hit();
            result.knock = true;
            if first_hit {
                self.state.knocked += 1;
            }
            if destroyed {
                result.destroy = true;
                self.ships_alive -= 1;
                self.state.knocked -= 1;
                self.state.destroyed += 1;
            }
        }
        if self.ships_alive == 0 {
            self.over = true;
            result.end = true;
        }
        self.state.shots_fired += 1;
        Ok(result)
    }

    /// Snapshot of the counters.
    pub fn state(&self) -> State {
        self.state
    }

    /// Side length of the grid, if one has been created.
    pub fn size(&self) -> Option<usize> {
        self.grid.as_ref().map(Grid::size)
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ships_placed(&self) -> bool {
        self.ships_placed
    }

    pub fn ships_alive(&self) -> usize {
        self.ships_alive
    }

    /// Every ship has been destroyed.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Observable state of the cell at `coord`, or `None` if there is no
    /// grid or the coordinate lies outside it.
    pub fn cell_state(&self, coord: Coordinate) -> Option<CellState> {
        let cell = self.grid.as_ref()?.get(coord)?;
        let ship = cell.ship.and_then(|id| self.ships.get(id.0));
        Some(match (cell.shot, ship) {
            (false, None) => CellState::Empty,
            (false, Some(_)) => CellState::Ship,
            (true, None) => CellState::ShotEmpty,
            (true, Some(ship)) if ship.is_destroyed() => CellState::ShotShipDestroyed,
            (true, Some(_)) => CellState::ShotShipAlive,
        })
    }
}
