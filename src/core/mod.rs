//! Core battlefield rules (no_std compatible)
//!
//! Coordinate parsing, ship geometry, the grid and the game state machine.
//! Nothing in here locks, allocates threads or performs I/O; it only needs
//! `alloc`.

pub mod common;
pub mod config;
pub mod coordinate;
pub mod field;
pub mod grid;
pub mod ship;

// Re-export commonly used types
pub use common::{ErrorCategory, FieldError};
pub use config::{is_valid_size, MAX_FIELD_SIZE, MIN_FIELD_SIZE};
pub use coordinate::{cells_of, parse_coordinate, Coordinate};
pub use field::{Field, ShotResult, State};
pub use grid::{Cell, CellState, Grid};
pub use ship::{parse_ships, Ship, ShipId};
