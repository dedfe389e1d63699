//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), drawing into the
//! frame's buffer.

mod house;
mod input;
mod status;

pub use house::BufferCanvas;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::App;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const HOUSE_AREA_MIN_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(HOUSE_AREA_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [house_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    let drawable = house::render(frame, app, *house_area);
    input::render(frame, app.input(), *input_area);
    status::render(frame, app, drawable, *status_area);
}
