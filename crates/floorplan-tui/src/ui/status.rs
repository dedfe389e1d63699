//! Status bar
//!
//! Displays the last status message and a summary of the current house.

use floorplan_core::MARGIN;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

/// Render the status bar.
///
/// `drawable` is the house panel's inner area, used to flag clipping.
pub fn render(frame: &mut Frame, app: &App, drawable: Rect, area: Rect) {
    let message = Span::styled(
        app.status_message().unwrap_or_default().to_string(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    );

    let plan = app.floorplan();
    let house_info = plan.spec().map_or_else(String::new, |spec| {
        let selected = plan.selected_room().map_or_else(
            || "none".to_string(),
            |room| format!("{} {}", room.number(), room.label),
        );
        // Outline spans MARGIN..=MARGIN+size on both axes
        let clipped = u64::from(MARGIN) + u64::from(spec.width()) >= u64::from(drawable.width)
            || u64::from(MARGIN) + u64::from(spec.height()) >= u64::from(drawable.height);
        let clip_note = if clipped {
            format!(" | clipped to {}x{}", drawable.width, drawable.height)
        } else {
            String::new()
        };
        format!(
            " | {}x{} | {} rooms | selected: {selected}{clip_note}",
            spec.width(),
            spec.height(),
            spec.room_count()
        )
    });

    let status_line = Line::from(vec![
        Span::raw(" "),
        message,
        Span::styled(house_info, Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
