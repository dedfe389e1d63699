//! Floor plan state.
//!
//! [`Floorplan`] owns the current [`RoomLayout`] (absent until the first
//! successful create) and the [`Selection`] within it. It is the only place
//! selection changes, so a selected index always names a room of the
//! current layout.
//!
//! # Transitions
//!
//! - `create`: installs a new layout and resets to `Unselected`
//! - `navigate`: selects a validated 1-based room number, or leaves state
//!   unchanged on error
//! - `clear`: resets to `Unselected`

use crate::{Canvas, HouseSpec, InputError, Room, RoomLayout, Selection, paint};

/// Current house and its highlighted room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Floorplan {
    /// Layout of the current house. `None` before the first create.
    layout: Option<RoomLayout>,
    /// Highlighted room within `layout`.
    selection: Selection,
}

impl Floorplan {
    /// Create an empty floor plan with no house.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the house with a freshly computed layout of `spec`.
    ///
    /// Always resets the selection.
    pub fn create(&mut self, spec: HouseSpec) -> &RoomLayout {
        self.selection = Selection::Unselected;
        self.layout.insert(RoomLayout::compute(spec))
    }

    /// Highlight the room with the 1-based `room_number`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::RoomOutOfRange`] unless
    /// `1 <= room_number <= room_count`. Selection is left unchanged.
    pub fn navigate(&mut self, room_number: i64) -> Result<Selection, InputError> {
        let room_count = self.room_count();
        if room_number < 1 || room_number > i64::from(room_count) {
            return Err(InputError::RoomOutOfRange { number: room_number, room_count });
        }

        self.selection = Selection::Selected((room_number - 1) as usize);
        Ok(self.selection)
    }

    /// Remove any highlight.
    pub fn clear(&mut self) -> Selection {
        self.selection = Selection::Unselected;
        self.selection
    }

    /// Paint the current house. Does nothing before the first create.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        if let Some(layout) = &self.layout {
            paint(canvas, layout, self.selection);
        }
    }

    /// Layout of the current house. `None` before the first create.
    pub fn layout(&self) -> Option<&RoomLayout> {
        self.layout.as_ref()
    }

    /// Spec of the current house. `None` before the first create.
    pub fn spec(&self) -> Option<HouseSpec> {
        self.layout.as_ref().map(RoomLayout::spec)
    }

    /// Current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Highlighted room. `None` if nothing is selected.
    pub fn selected_room(&self) -> Option<&Room> {
        let index = self.selection.index()?;
        self.layout.as_ref().and_then(|layout| layout.get(index))
    }

    /// Rooms in the current house, 0 when there is none.
    pub fn room_count(&self) -> u32 {
        self.spec().map_or(0, |spec| spec.room_count())
    }
}
