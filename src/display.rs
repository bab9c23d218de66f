//! Text rendering of a field.

use core::fmt;

use crate::core::{CellState, Coordinate, Field};

/// Renders a field as a letter/number labelled grid.
///
/// `.` untouched water, `S` an unshot ship cell (only when `reveal` is set),
/// `o` a miss, `x` a hit on a ship still afloat, `#` a destroyed ship.
pub struct BoardView<'a> {
    field: &'a Field,
    reveal: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(field: &'a Field, reveal: bool) -> Self {
        Self { field, reveal }
    }

    fn symbol(&self, state: CellState) -> char {
        match state {
            CellState::Empty => '.',
            CellState::Ship if self.reveal => 'S',
            CellState::Ship => '.',
            CellState::ShotEmpty => 'o',
            CellState::ShotShipAlive => 'x',
            CellState::ShotShipDestroyed => '#',
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = match self.field.size() {
            Some(size) => size,
            None => return writeln!(f, "(no field)"),
        };
        write!(f, "   ")?;
        for c in 0..size {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for r in 0..size {
            write!(f, "{:2} ", r + 1)?;
            for c in 0..size {
                let state = self
                    .field
                    .cell_state(Coordinate::new(c, r))
                    .unwrap_or(CellState::Empty);
                write!(f, " {}", self.symbol(state))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
