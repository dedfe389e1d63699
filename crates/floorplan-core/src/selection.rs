//! Which room, if any, is highlighted.

/// Highlighted room of the current house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// No room highlighted.
    #[default]
    Unselected,
    /// Room at this 0-based index is highlighted.
    Selected(usize),
}

impl Selection {
    /// Selected 0-based index, if any.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Unselected => None,
            Self::Selected(index) => Some(index),
        }
    }

    /// Whether the room at `index` is the selected one.
    pub fn is_selected(self, index: usize) -> bool {
        self == Self::Selected(index)
    }
}
