//! Error types for user-supplied floor plan input.
//!
//! Every failure in this crate is a user-correctable input mistake. The
//! application layer turns an [`InputError`] into a status message; it never
//! reaches the layout engine or the painter.

use std::fmt;

use thiserror::Error;

/// House field a user fills in when creating a floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// House width in drawing units.
    Width,
    /// House height in drawing units.
    Height,
    /// Number of rooms.
    RoomCount,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::RoomCount => "room count",
        };
        f.write_str(name)
    }
}

/// Rejected user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A house field is not a non-negative integer
    #[error("Please enter valid numbers: {field} {input:?} is not a number")]
    InvalidNumber {
        /// Field that failed to parse
        field: Field,
        /// Raw text the user entered
        input: String,
    },

    /// A house field is zero
    #[error("Please enter valid numbers: {field} must be greater than zero")]
    NotPositive {
        /// Field that was zero
        field: Field,
    },

    /// Room count exceeds what a layout may allocate
    #[error("Please enter valid numbers: at most {max} rooms, got {room_count}")]
    TooManyRooms {
        /// Requested room count
        room_count: u32,
        /// Largest accepted room count
        max: u32,
    },

    /// The room number is not an integer
    #[error("Please enter a valid room number: {input:?} is not a number")]
    InvalidRoomNumber {
        /// Raw text the user entered
        input: String,
    },

    /// The room number parsed but names no room of the current house
    #[error("Invalid room number: {number} (house has {room_count} rooms)")]
    RoomOutOfRange {
        /// 1-based room number the user asked for
        number: i64,
        /// Rooms in the current house, 0 when no house exists
        room_count: u32,
    },
}
