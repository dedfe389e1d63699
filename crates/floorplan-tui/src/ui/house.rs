//! House panel
//!
//! Paints the floor plan into a bordered panel through a [`Canvas`] backed by
//! the ratatui buffer. One drawing unit is one terminal cell; anything past
//! the panel edge is clipped.

use floorplan_core::{Bounds, Canvas, Rgb, TextMetrics};
use ratatui::{
    Frame,
    buffer::{Buffer, Cell},
    layout::{Position, Rect},
    style::Color,
    widgets::{Block, Borders},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::App;

/// Panel background, light gray so black outlines stay visible.
const PANEL_BACKGROUND: Rgb = Rgb::new(238, 238, 238);

const TOP_LEFT: &str = "┌";
const TOP_RIGHT: &str = "┐";
const BOTTOM_LEFT: &str = "└";
const BOTTOM_RIGHT: &str = "┘";
const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";
const POINT: &str = "·";

/// Render the house panel. Returns the drawable area inside the border.
pub fn render(frame: &mut Frame, app: &App, area: Rect) -> Rect {
    let block = Block::default().borders(Borders::ALL).title(" House ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut canvas = BufferCanvas::new(frame.buffer_mut(), inner);
    canvas.fill_rect(Bounds::new(0, 0, u32::from(inner.width), u32::from(inner.height)), PANEL_BACKGROUND);
    app.floorplan().paint(&mut canvas);

    inner
}

/// [`Canvas`] over a region of a ratatui [`Buffer`].
///
/// Drawing coordinates are relative to the region's top-left cell.
/// `stroke_rect` covers `x..=x+width` like a pixel outline, so neighboring
/// rooms share their walls.
pub struct BufferCanvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferCanvas<'a> {
    /// Canvas drawing into `area` of `buf`.
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        let area = area.intersection(buf.area);
        Self { buf, area }
    }

    /// Cell at region-relative coordinates, if inside the region.
    fn cell_mut(&mut self, x: i64, y: i64) -> Option<&mut Cell> {
        if x < 0 || y < 0 || x >= i64::from(self.area.width) || y >= i64::from(self.area.height) {
            return None;
        }
        let position = Position::new(self.area.x + x as u16, self.area.y + y as u16);
        self.buf.cell_mut(position)
    }

    /// Region-relative span `start..end` clipped to `0..limit`.
    fn clip(start: u32, len: u32, limit: u16) -> std::ops::Range<i64> {
        let start = i64::from(start);
        let end = start + i64::from(len);
        start.min(i64::from(limit))..end.min(i64::from(limit))
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

impl Canvas for BufferCanvas<'_> {
    fn fill_rect(&mut self, bounds: Bounds, rgb: Rgb) {
        let bg = color(rgb);
        for y in Self::clip(bounds.y, bounds.height, self.area.height) {
            for x in Self::clip(bounds.x, bounds.width, self.area.width) {
                if let Some(cell) = self.cell_mut(x, y) {
                    cell.set_symbol(" ").set_bg(bg);
                }
            }
        }
    }

    fn stroke_rect(&mut self, bounds: Bounds, rgb: Rgb) {
        let fg = color(rgb);
        let (left, top) = (i64::from(bounds.x), i64::from(bounds.y));
        let (right, bottom) = (left + i64::from(bounds.width), top + i64::from(bounds.height));

        // Clip once so huge houses only walk visible cells
        let max_x = right.min(i64::from(self.area.width));
        let max_y = bottom.min(i64::from(self.area.height));

        for y in top..=max_y {
            for x in left..=max_x {
                let on_edge = x == left || x == right || y == top || y == bottom;
                if !on_edge {
                    continue;
                }
                let symbol = match (x == left, x == right, y == top, y == bottom) {
                    _ if left == right && top == bottom => POINT,
                    _ if left == right => VERTICAL,
                    _ if top == bottom => HORIZONTAL,
                    (true, _, true, _) => TOP_LEFT,
                    (_, true, true, _) => TOP_RIGHT,
                    (true, _, _, true) => BOTTOM_LEFT,
                    (_, true, _, true) => BOTTOM_RIGHT,
                    (true, _, _, _) | (_, true, _, _) => VERTICAL,
                    _ => HORIZONTAL,
                };
                if let Some(cell) = self.cell_mut(x, y) {
                    cell.set_symbol(symbol).set_fg(fg);
                }
            }
        }
    }

    fn draw_text(&mut self, x: i64, y: i64, text: &str, rgb: Rgb) {
        let fg = color(rgb);
        let mut column = x;
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0) as i64;
            if width == 0 {
                continue;
            }
            if let Some(cell) = self.cell_mut(column, y) {
                let mut symbol = [0u8; 4];
                cell.set_symbol(ch.encode_utf8(&mut symbol)).set_fg(fg);
            }
            column += width;
        }
    }

    fn measure_text(&self, text: &str) -> TextMetrics {
        TextMetrics { width: text.width() as u32, height: 1, ascent: 0 }
    }
}

#[cfg(test)]
mod tests {
    use floorplan_core::{HouseSpec, RoomLayout, Selection, paint, palette};

    use super::*;

    fn painted(width: u16, height: u16, spec: HouseSpec, selection: Selection) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        let area = buf.area;
        let layout = RoomLayout::compute(spec);
        paint(&mut BufferCanvas::new(&mut buf, area), &layout, selection);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn rooms_share_walls() {
        // 2x2 grid of 10x4 rooms at margin 10
        let buf = painted(40, 20, HouseSpec::new(20, 8, 4).unwrap(), Selection::Unselected);

        assert_eq!(buf[(10, 10)].symbol(), TOP_LEFT);
        assert_eq!(buf[(20, 10)].symbol(), TOP_LEFT);
        assert_eq!(buf[(30, 10)].symbol(), TOP_RIGHT);
        assert_eq!(buf[(20, 12)].symbol(), VERTICAL);
        assert_eq!(buf[(30, 18)].symbol(), BOTTOM_RIGHT);
    }

    #[test]
    fn labels_centered_on_middle_row() {
        let buf = painted(40, 20, HouseSpec::new(20, 8, 4).unwrap(), Selection::Unselected);

        // "Kitchen" is 7 wide: x = 10 + (10 - 7) / 2, y = 10 + (4 - 1) / 2
        assert!(row(&buf, 11).contains("Kitchen"));
        assert_eq!(buf[(11, 11)].symbol(), "K");
        assert_eq!(buf[(11, 11)].bg, color(palette::PASTEL[0]));
    }

    #[test]
    fn selected_room_is_solid_highlight() {
        let buf = painted(40, 20, HouseSpec::new(20, 8, 4).unwrap(), Selection::Selected(0));

        for y in 10..14 {
            for x in 10..20 {
                assert_eq!(buf[(x, y)].bg, color(palette::HIGHLIGHT));
                assert_eq!(buf[(x, y)].symbol(), " ");
            }
        }
        assert!(!row(&buf, 11).contains("Kitchen"));
        assert!(row(&buf, 11).contains("Bedroom"));
    }

    #[test]
    fn oversized_house_is_clipped() {
        let buf = painted(30, 15, HouseSpec::new(100_000, 100_000, 9).unwrap(), Selection::Unselected);

        assert_eq!(buf[(10, 10)].symbol(), TOP_LEFT);
        assert_eq!(buf[(29, 14)].bg, color(palette::PASTEL[0]));
    }

    #[test]
    fn zero_width_rooms_draw_lines_only() {
        let buf = painted(20, 20, HouseSpec::new(1, 6, 4).unwrap(), Selection::Unselected);

        // Row 11 holds the overflowing labels (Bedroom drawn last), row 12 only walls
        assert_eq!(buf[(10, 12)].symbol(), VERTICAL);
        assert_eq!(buf[(10, 12)].bg, Color::Reset);
        assert!(row(&buf, 11).starts_with("       Bedroom"));
    }

    #[test]
    fn canvas_offsets_into_region() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));
        let mut canvas = BufferCanvas::new(&mut buf, Rect::new(2, 1, 5, 3));

        canvas.draw_text(-1, 0, "abc", palette::INK);
        canvas.fill_rect(Bounds::new(4, 2, 10, 10), palette::HIGHLIGHT);

        assert_eq!(row(&buf, 1), "  bc      ");
        assert_eq!(buf[(6, 3)].bg, color(palette::HIGHLIGHT));
        assert_eq!(buf[(7, 3)].bg, Color::Reset);
    }
}
