#![cfg(feature = "std")]

//! The process-wide game behind a reader/writer lock.

use std::string::{String, ToString};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};

use crate::core::{Field, FieldError, ShotResult, State, MAX_FIELD_SIZE};
use crate::display::BoardView;

/// Owns the single [`Field`] shared by every caller.
///
/// Mutating operations hold the write lock for their whole duration;
/// [`Engine::state`] and [`Engine::render`] share the read lock.
#[derive(Debug, Default)]
pub struct Engine {
    field: RwLock<Field>,
}

impl Engine {
    pub fn new() -> Self {
        info!("maximum field size is {}", MAX_FIELD_SIZE);
        Self::default()
    }

    // Field operations validate before mutating, so a guard recovered from a
    // panicking holder still sees a consistent field.
    fn read(&self) -> RwLockReadGuard<'_, Field> {
        self.field.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Field> {
        self.field.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Allocate a new field unless a game is still in progress.
    pub fn create_field(&self, size: usize) -> Result<(), FieldError> {
        debug!("create_field: size={}", size);
        let mut field = self.write();
        match field.create(size) {
            Ok(()) => {
                info!("new battlefield created with size {}", size);
                Ok(())
            }
            Err(e) => {
                warn!("create_field({}) rejected: {}", size, e);
                Err(e)
            }
        }
    }

    /// Discard the current field. Always succeeds.
    pub fn clear_field(&self) {
        debug!("clear_field");
        self.write().clear();
        info!("battlefield has been cleared");
    }

    /// Place every ship described by `coords`; returns the number placed.
    pub fn add_ships(&self, coords: &str) -> Result<usize, FieldError> {
        debug!("add_ships: {:?}", coords);
        let mut field = self.write();
        match field.add_ships(coords) {
            Ok(count) => {
                info!("{} ships added", count);
                Ok(count)
            }
            Err(e) => {
                warn!("add_ships({:?}) rejected: {}", coords, e);
                Err(e)
            }
        }
    }

    /// Fire at a single coordinate.
    pub fn shoot(&self, coord: &str) -> Result<ShotResult, FieldError> {
        debug!("shoot: {:?}", coord);
        let mut field = self.write();
        match field.shoot(coord) {
            Ok(result) => {
                debug!("shot at {:?}: {:?}", coord, result);
                if result.end {
                    info!("all ships destroyed after {} shots", field.state().shots_fired);
                }
                Ok(result)
            }
            Err(e) => {
                warn!("shoot({:?}) rejected: {}", coord, e);
                Err(e)
            }
        }
    }

    /// Snapshot of the counters.
    pub fn state(&self) -> State {
        self.read().state()
    }

    /// Text rendering of the field, hiding unshot ships unless `reveal`.
    pub fn render(&self, reveal: bool) -> String {
        BoardView::new(&self.read(), reveal).to_string()
    }

    /// Whether the current game has ended.
    pub fn is_over(&self) -> bool {
        self.read().is_over()
    }
}
