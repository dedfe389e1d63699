//! Fixed colors used when painting a floor plan.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Room fill colors, cycled by room index.
pub const PASTEL: [Rgb; 5] = [
    Rgb::new(255, 218, 185), // peach puff
    Rgb::new(173, 216, 230), // light blue
    Rgb::new(152, 251, 152), // pale green
    Rgb::new(255, 182, 193), // light pink
    Rgb::new(240, 230, 140), // khaki
];

/// Borders, the house outline, and labels.
pub const INK: Rgb = Rgb::new(0, 0, 0);

/// Fill of the selected room.
pub const HIGHLIGHT: Rgb = Rgb::new(255, 0, 0);

/// Fill color of the room at `index`.
pub fn room_color(index: usize) -> Rgb {
    PASTEL[index % PASTEL.len()]
}
