/// Smallest field that can be created.
pub const MIN_FIELD_SIZE: usize = 1;

/// Largest field that can be created. Columns are addressed by a single
/// letter, so the alphabet bounds the field size.
pub const MAX_FIELD_SIZE: usize = (LAST_COLUMN - FIRST_COLUMN + 1) as usize;

/// Letter addressing column 0.
pub const FIRST_COLUMN: u8 = b'A';

/// Letter addressing the last possible column.
pub const LAST_COLUMN: u8 = b'Z';

/// Returns `true` if a field of `size` x `size` cells may be created.
pub const fn is_valid_size(size: usize) -> bool {
    size >= MIN_FIELD_SIZE && size <= MAX_FIELD_SIZE
}
