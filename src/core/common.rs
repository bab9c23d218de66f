//! Error kinds shared by every field operation.

/// Broad family an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input was malformed or outside the field.
    Validation,
    /// The operation is not allowed in the current phase of the game.
    StateConflict,
    /// A ship would touch or overlap another ship.
    SpatialConflict,
}

/// Errors returned by field operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldError {
    /// Requested field size is outside `MIN_FIELD_SIZE..=MAX_FIELD_SIZE`.
    InvalidSize,
    /// A field exists and its game is not over yet.
    FieldAlreadySet,
    /// Ships were already placed for the current game.
    ShipsAlreadyAdded,
    /// A coordinate or a ship definition could not be parsed.
    InvalidCoordinate,
    /// A coordinate lies outside the field.
    OutOfBounds,
    /// The cell already holds a ship.
    OccupiedByShip,
    /// The cell is inside the buffer zone of another ship.
    OccupiedNearby,
    /// Shots are only accepted once ships have been placed.
    ShipsNotPlaced,
    /// The cell has been shot before.
    AlreadyShot,
}

impl FieldError {
    /// Every error kind, in declaration order.
    pub const ALL: [FieldError; 9] = [
        FieldError::InvalidSize,
        FieldError::FieldAlreadySet,
        FieldError::ShipsAlreadyAdded,
        FieldError::InvalidCoordinate,
        FieldError::OutOfBounds,
        FieldError::OccupiedByShip,
        FieldError::OccupiedNearby,
        FieldError::ShipsNotPlaced,
        FieldError::AlreadyShot,
    ];

    /// Family the error belongs to.
    pub fn category(self) -> ErrorCategory {
        match self {
            FieldError::InvalidSize | FieldError::InvalidCoordinate | FieldError::OutOfBounds => {
                ErrorCategory::Validation
            }
            FieldError::FieldAlreadySet
            | FieldError::ShipsAlreadyAdded
            | FieldError::ShipsNotPlaced
            | FieldError::AlreadyShot => ErrorCategory::StateConflict,
            FieldError::OccupiedByShip | FieldError::OccupiedNearby => {
                ErrorCategory::SpatialConflict
            }
        }
    }

    /// Status code an HTTP-style adapter reports for this error.
    pub fn status_code(self) -> u16 {
        match self.category() {
            ErrorCategory::Validation => 400,
            ErrorCategory::StateConflict | ErrorCategory::SpatialConflict => 409,
        }
    }

    /// Stable, human readable message.
    pub fn message(self) -> &'static str {
        match self {
            FieldError::InvalidSize => "field size is invalid",
            FieldError::FieldAlreadySet => "field is already set",
            FieldError::ShipsAlreadyAdded => "ships are already added",
            FieldError::InvalidCoordinate => "coordinate is invalid",
            FieldError::OutOfBounds => "coordinate is out of bounds",
            FieldError::OccupiedByShip => "cell is occupied by a ship",
            FieldError::OccupiedNearby => "cell is too close to another ship",
            FieldError::ShipsNotPlaced => "ships are not placed",
            FieldError::AlreadyShot => "cell has already been shot",
        }
    }
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}
