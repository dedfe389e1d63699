//! Floor plan domain core
//!
//! Pure geometry and state for a rectangular house split into a grid of
//! labeled rooms. Nothing in this crate performs I/O: the terminal (or any
//! other back end) plugs in through the [`Canvas`] trait.
//!
//! # Components
//!
//! - [`HouseSpec`]: validated width, height, and room count
//! - [`RoomLayout`]: grid dimensions and per-room bounding boxes and labels
//! - [`Floorplan`]: the current house plus its [`Selection`]
//! - [`paint`]: draws a layout onto a [`Canvas`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod canvas;
pub mod error;
pub mod floorplan;
pub mod layout;
pub mod paint;
pub mod palette;
pub mod selection;
pub mod spec;

pub use canvas::{Canvas, TextMetrics};
pub use error::{Field, InputError};
pub use floorplan::Floorplan;
pub use layout::{Bounds, DEFAULT_LABELS, GridDims, MARGIN, Room, RoomLayout};
pub use paint::paint;
pub use palette::Rgb;
pub use selection::Selection;
pub use spec::{HouseSpec, MAX_ROOMS, parse_room_number};
