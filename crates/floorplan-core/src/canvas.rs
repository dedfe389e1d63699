//! Drawing surface abstraction.
//!
//! Decouples painting from any particular back end (terminal buffer, image,
//! test recorder). Coordinates are drawing units with the origin at the
//! top-left; implementations clip whatever falls outside their surface.

use crate::{Bounds, Rgb};

/// Size of a rendered string as reported by the back end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextMetrics {
    /// Advance width of the whole string.
    pub width: u32,
    /// Line height.
    pub height: u32,
    /// Distance from the top of the line to the baseline.
    pub ascent: u32,
}

/// Back end the painter draws onto.
pub trait Canvas {
    /// Fill `bounds` with a solid color.
    fn fill_rect(&mut self, bounds: Bounds, color: Rgb);

    /// Draw the outline of `bounds`.
    fn stroke_rect(&mut self, bounds: Bounds, color: Rgb);

    /// Draw `text` with its left edge at `x` and its baseline at `y`.
    ///
    /// Either coordinate may be negative when text overflows its box.
    fn draw_text(&mut self, x: i64, y: i64, text: &str, color: Rgb);

    /// Measure `text` as `draw_text` would render it.
    fn measure_text(&self, text: &str) -> TextMetrics;
}
