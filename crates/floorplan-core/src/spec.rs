//! House specification and text parsing.
//!
//! Input arrives as free-form text. Parsing and range checks happen here so
//! that a [`HouseSpec`] in hand is always valid.

use crate::{Field, InputError};

/// Largest room count a house may have.
///
/// Bounds the [`crate::RoomLayout`] allocation, not the grid geometry.
pub const MAX_ROOMS: u32 = 1_000_000;

/// Validated width, height, and room count of one floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HouseSpec {
    width: u32,
    height: u32,
    room_count: u32,
}

impl HouseSpec {
    /// Create a house spec from numeric values.
    ///
    /// All three values must be non-zero and the room count must not exceed
    /// [`MAX_ROOMS`].
    pub fn new(width: u32, height: u32, room_count: u32) -> Result<Self, InputError> {
        for (field, value) in
            [(Field::Width, width), (Field::Height, height), (Field::RoomCount, room_count)]
        {
            if value == 0 {
                return Err(InputError::NotPositive { field });
            }
        }
        if room_count > MAX_ROOMS {
            return Err(InputError::TooManyRooms { room_count, max: MAX_ROOMS });
        }
        Ok(Self { width, height, room_count })
    }

    /// Parse a house spec from the three raw text fields.
    pub fn parse(width: &str, height: &str, room_count: &str) -> Result<Self, InputError> {
        let width = parse_field(Field::Width, width)?;
        let height = parse_field(Field::Height, height)?;
        let room_count = parse_field(Field::RoomCount, room_count)?;
        Self::new(width, height, room_count)
    }

    /// House width in drawing units.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// House height in drawing units.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of rooms.
    pub fn room_count(&self) -> u32 {
        self.room_count
    }
}

fn parse_field(field: Field, input: &str) -> Result<u32, InputError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| InputError::InvalidNumber { field, input: input.to_string() })
}

/// Parse a 1-based room number.
///
/// Only checks that the text is an integer; range validation belongs to
/// [`crate::Floorplan::navigate`], which knows the current room count.
pub fn parse_room_number(input: &str) -> Result<i64, InputError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::InvalidRoomNumber { input: input.to_string() })
}
