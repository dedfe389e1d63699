//! Room layout engine.
//!
//! Maps a [`HouseSpec`] to a grid just large enough for its rooms and
//! computes each room's bounding box and label. Rooms fill the grid in
//! row-major order; the last row may be partially filled.
//!
//! Layout is pure and deterministic. Degenerate inputs (a house narrower
//! than its column count) yield zero-area rooms rather than errors.

use std::slice;

use crate::{HouseSpec, palette, palette::Rgb};

/// Offset between the drawing origin and the house outline, on both axes.
pub const MARGIN: u32 = 10;

/// Labels of the first rooms, in index order.
pub const DEFAULT_LABELS: [&str; 5] = ["Kitchen", "Bedroom", "Bathroom", "Living Room", "Dining Room"];

/// Axis-aligned rectangle in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

impl Bounds {
    /// Create a rectangle.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether the rectangle covers no area.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Rows and columns of the room grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDims {
    /// Number of rows, `ceil(sqrt(room_count))`.
    pub rows: u32,
    /// Number of columns, `ceil(room_count / rows)`.
    pub cols: u32,
}

impl GridDims {
    /// Grid for `room_count` rooms.
    ///
    /// Satisfies `cols * (rows - 1) < room_count <= cols * rows` for every
    /// non-zero count. Zero rooms give an empty grid.
    pub fn for_room_count(room_count: u32) -> Self {
        let rows = ceil_sqrt(room_count);
        let cols = if rows == 0 { 0 } else { room_count.div_ceil(rows) };
        Self { rows, cols }
    }

    /// Number of cells in the grid.
    pub fn capacity(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }
}

fn ceil_sqrt(n: u32) -> u32 {
    let root = n.isqrt();
    if root * root == n { root } else { root + 1 }
}

/// One room of a floor plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// 0-based position in row-major order.
    pub index: usize,
    /// Left edge in drawing units.
    pub x: u32,
    /// Top edge in drawing units.
    pub y: u32,
    /// Horizontal extent, shared by all rooms of a layout.
    pub width: u32,
    /// Vertical extent, shared by all rooms of a layout.
    pub height: u32,
    /// Display name.
    pub label: String,
}

impl Room {
    /// Bounding box of the room.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    /// Fill color of the room.
    pub fn color(&self) -> Rgb {
        palette::room_color(self.index)
    }

    /// 1-based number users select the room by.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Label of the room at `index`.
///
/// The first rooms take [`DEFAULT_LABELS`]; the rest are numbered from
/// `Room1` upward.
pub fn room_label(index: usize) -> String {
    DEFAULT_LABELS.get(index).map_or_else(
        || format!("Room{}", index - DEFAULT_LABELS.len() + 1),
        |label| (*label).to_string(),
    )
}

/// Ordered rooms derived from a [`HouseSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomLayout {
    spec: HouseSpec,
    grid: GridDims,
    room_width: u32,
    room_height: u32,
    rooms: Vec<Room>,
}

impl RoomLayout {
    /// Compute the layout of `spec`.
    pub fn compute(spec: HouseSpec) -> Self {
        let grid = GridDims::for_room_count(spec.room_count());
        let room_width = spec.width() / grid.cols;
        let room_height = spec.height() / grid.rows;

        let rooms = (0..spec.room_count())
            .map(|i| {
                let row = i / grid.cols;
                let col = i % grid.cols;
                let index = i as usize;
                Room {
                    index,
                    x: MARGIN.saturating_add(col * room_width),
                    y: MARGIN.saturating_add(row * room_height),
                    width: room_width,
                    height: room_height,
                    label: room_label(index),
                }
            })
            .collect();

        Self { spec, grid, room_width, room_height, rooms }
    }

    /// Spec the layout was computed from.
    pub fn spec(&self) -> HouseSpec {
        self.spec
    }

    /// Grid dimensions.
    pub fn grid(&self) -> GridDims {
        self.grid
    }

    /// Width and height shared by every room.
    pub fn room_size(&self) -> (u32, u32) {
        (self.room_width, self.room_height)
    }

    /// Outline of the whole house.
    pub fn house_bounds(&self) -> Bounds {
        Bounds::new(MARGIN, MARGIN, self.spec.width(), self.spec.height())
    }

    /// Rooms in index order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Room at a 0-based index.
    pub fn get(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the layout has no rooms. Never true for a valid spec.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterate rooms in index order.
    pub fn iter(&self) -> slice::Iter<'_, Room> {
        self.rooms.iter()
    }
}

impl<'a> IntoIterator for &'a RoomLayout {
    type Item = &'a Room;
    type IntoIter = slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
