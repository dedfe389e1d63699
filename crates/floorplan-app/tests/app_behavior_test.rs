//! End-to-end tests for interactive behavior.
//!
//! Each test types what a user would type into the command line, presses
//! Enter, and checks the resulting floor plan and status message.

use floorplan_app::{App, AppAction, AppEvent, KeyInput};
use floorplan_core::Selection;

/// Type `line` into the App and press Enter.
fn submit(app: &mut App, line: &str) -> Vec<AppAction> {
    for c in line.chars() {
        app.handle(AppEvent::Key(KeyInput::Char(c)));
    }
    app.handle(AppEvent::Key(KeyInput::Enter))
}

fn labels(app: &App) -> Vec<String> {
    app.floorplan()
        .layout()
        .map(|layout| layout.iter().map(|room| room.label.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn create_then_navigate_then_clear() {
    let mut app = App::new();

    assert_eq!(submit(&mut app, "/create 300 200 4"), [AppAction::Render]);
    assert_eq!(labels(&app), ["Kitchen", "Bedroom", "Bathroom", "Living Room"]);
    assert!(app.input().buffer().is_empty());

    submit(&mut app, "/go 2");
    assert_eq!(app.floorplan().selection(), Selection::Selected(1));

    submit(&mut app, "/clear");
    assert_eq!(app.floorplan().selection(), Selection::Unselected);

    submit(&mut app, "/clear");
    assert_eq!(app.floorplan().selection(), Selection::Unselected);
}

#[test]
fn large_room_counts_are_laid_out() {
    let mut app = App::new();

    assert_eq!(submit(&mut app, "/create 300 200 5000"), [AppAction::Render]);

    assert_eq!(app.floorplan().room_count(), 5000);
    assert_eq!(labels(&app).last().map(String::as_str), Some("Room4995"));

    submit(&mut app, "5000");
    assert_eq!(app.floorplan().selection(), Selection::Selected(4999));
}

#[test]
fn bare_number_navigates() {
    let mut app = App::new();
    submit(&mut app, "/create 90 90 7");

    submit(&mut app, "7");

    assert_eq!(app.floorplan().selection(), Selection::Selected(6));
    assert_eq!(app.status_message(), Some("Room 7: Room2"));
}

#[test]
fn recreate_resets_selection() {
    let mut app = App::new();
    submit(&mut app, "/create 300 200 12");
    submit(&mut app, "/go 12");

    submit(&mut app, "/create 300 200 3");

    assert_eq!(app.floorplan().selection(), Selection::Unselected);
    assert_eq!(app.floorplan().room_count(), 3);
}

#[test]
fn navigate_bounds_follow_room_count() {
    let mut app = App::new();
    submit(&mut app, "/create 300 200 5");

    submit(&mut app, "/go 0");
    assert_eq!(app.floorplan().selection(), Selection::Unselected);

    submit(&mut app, "/go 6");
    assert_eq!(app.floorplan().selection(), Selection::Unselected);
    assert!(app.status_message().is_some_and(|m| m.starts_with("Invalid room number")));

    submit(&mut app, "/go 5");
    assert_eq!(app.floorplan().selection(), Selection::Selected(4));
}

#[test]
fn navigate_before_any_house_is_rejected() {
    let mut app = App::new();

    submit(&mut app, "1");

    assert_eq!(app.floorplan().selection(), Selection::Unselected);
    assert!(app.status_message().is_some_and(|m| m.starts_with("Invalid room number")));
}

#[test]
fn zero_rooms_rejected_without_touching_house() {
    let mut app = App::new();
    submit(&mut app, "/create 300 200 4");

    submit(&mut app, "/create 300 200 0");

    assert_eq!(app.floorplan().room_count(), 4);
    assert_eq!(
        app.status_message(),
        Some("Please enter valid numbers: room count must be greater than zero")
    );
}

#[test]
fn wrong_arity_shows_usage() {
    let mut app = App::new();

    submit(&mut app, "/create 300");

    assert!(app.floorplan().layout().is_none());
    assert_eq!(app.status_message(), Some("Usage: /create <width> <height> <rooms>"));
}

#[test]
fn quit_command_returns_quit() {
    let mut app = App::new();
    assert_eq!(submit(&mut app, "/quit"), [AppAction::Quit]);
}
