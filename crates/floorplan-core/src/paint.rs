//! Floor plan painter.
//!
//! Draws the house outline, then each room in index order: fill, border,
//! centered label. The selected room is then overpainted entirely in the
//! highlight color, covering its border and label.

use crate::{Bounds, Canvas, RoomLayout, Selection, TextMetrics, palette};

/// Paint `layout` onto `canvas`, highlighting `selection`.
pub fn paint<C: Canvas + ?Sized>(canvas: &mut C, layout: &RoomLayout, selection: Selection) {
    canvas.stroke_rect(layout.house_bounds(), palette::INK);

    for room in layout {
        let bounds = room.bounds();
        canvas.fill_rect(bounds, room.color());
        canvas.stroke_rect(bounds, palette::INK);

        let metrics = canvas.measure_text(&room.label);
        let (x, y) = centered_text_origin(bounds, metrics);
        canvas.draw_text(x, y, &room.label, palette::INK);

        if selection.is_selected(room.index) {
            canvas.fill_rect(bounds, palette::HIGHLIGHT);
        }
    }
}

/// Baseline origin that centers text of `metrics` inside `bounds`.
///
/// Text larger than the box starts before its left or top edge.
pub fn centered_text_origin(bounds: Bounds, metrics: TextMetrics) -> (i64, i64) {
    let x = i64::from(bounds.x) + (i64::from(bounds.width) - i64::from(metrics.width)) / 2;
    let y = i64::from(bounds.y)
        + (i64::from(bounds.height) - i64::from(metrics.height)) / 2
        + i64::from(metrics.ascent);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_within_box() {
        let metrics = TextMetrics { width: 7, height: 12, ascent: 9 };
        let origin = centered_text_origin(Bounds::new(10, 10, 150, 100), metrics);
        assert_eq!(origin, (10 + 71, 10 + 44 + 9));
    }

    #[test]
    fn overflowing_text_truncates_toward_zero() {
        let metrics = TextMetrics { width: 11, height: 1, ascent: 0 };
        let origin = centered_text_origin(Bounds::new(10, 10, 4, 0), metrics);
        // (4 - 11) / 2 == -3 and (0 - 1) / 2 == 0 with truncating division
        assert_eq!(origin, (7, 10));
    }
}
