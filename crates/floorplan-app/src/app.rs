//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the interactive
//! state of the application completely decoupled from terminal I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Owns the [`Floorplan`] (house layout and selection).
//! - Edits the input line and dispatches submitted [`Command`]s.
//! - Turns rejected input into a status message.
//! - Stores terminal dimensions to handle resize events.

use floorplan_core::{Floorplan, HouseSpec, InputError, parse_room_number};

use crate::{
    AppAction, AppEvent, InputLine, KeyInput,
    command::{self, Command},
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies, fully testable without a terminal.
#[derive(Debug, Clone)]
pub struct App {
    /// Current house and selection.
    floorplan: Floorplan,
    /// Command line being typed.
    input: InputLine,
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl App {
    /// Create an App with no house.
    pub fn new() -> Self {
        Self {
            floorplan: Floorplan::new(),
            input: InputLine::new(),
            status_message: Some(command::help_line()),
        }
    }

    /// Create an App with an initial house already built.
    pub fn with_house(spec: HouseSpec) -> Self {
        let mut app = Self::new();
        app.create(spec);
        app
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => vec![],
            AppEvent::Resize(..) => vec![AppAction::Render],
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Enter => self.submit(),
            KeyInput::Esc => self.quit(),
            _ => {
                self.input.edit(key);
                vec![AppAction::Render]
            },
        }
    }

    /// Parse the input line and dispatch the command.
    fn submit(&mut self) -> Vec<AppAction> {
        let text = self.input.take();
        if text.trim().is_empty() {
            return vec![AppAction::Render];
        }

        self.dispatch(command::parse(&text))
    }

    /// Execute a parsed command.
    pub fn dispatch(&mut self, command: Command) -> Vec<AppAction> {
        match command {
            Command::Create { width, height, rooms } => self.create_from_text(&width, &height, &rooms),
            Command::Navigate { room } => self.navigate_from_text(&room),
            Command::Clear => self.clear_selection(),
            Command::Help => {
                self.set_status(command::help_line());
                vec![AppAction::Render]
            },
            Command::Quit => self.quit(),
            Command::Unknown { name } => {
                self.set_status(format!("Unknown command: /{name}"));
                vec![AppAction::Render]
            },
            Command::Usage { usage } => {
                self.set_status(format!("Usage: {usage}"));
                vec![AppAction::Render]
            },
        }
    }

    /// Build a house from raw text fields.
    ///
    /// Invalid input leaves the current house and selection unchanged.
    pub fn create_from_text(&mut self, width: &str, height: &str, rooms: &str) -> Vec<AppAction> {
        match HouseSpec::parse(width, height, rooms) {
            Ok(spec) => self.create(spec),
            Err(err) => self.reject(&err),
        }
    }

    /// Build a house from a validated spec. Clears any selection.
    pub fn create(&mut self, spec: HouseSpec) -> Vec<AppAction> {
        let layout = self.floorplan.create(spec);
        let grid = layout.grid();
        tracing::debug!(
            width = spec.width(),
            height = spec.height(),
            rooms = spec.room_count(),
            rows = grid.rows,
            cols = grid.cols,
            "house created"
        );

        self.status_message = Some(format!(
            "House {}x{} with {} rooms ({}x{} grid)",
            spec.width(),
            spec.height(),
            spec.room_count(),
            grid.rows,
            grid.cols
        ));
        vec![AppAction::Render]
    }

    /// Highlight a room given its raw 1-based number.
    pub fn navigate_from_text(&mut self, room: &str) -> Vec<AppAction> {
        match parse_room_number(room) {
            Ok(number) => self.navigate(number),
            Err(err) => self.reject(&err),
        }
    }

    /// Highlight the room with the 1-based `room_number`.
    pub fn navigate(&mut self, room_number: i64) -> Vec<AppAction> {
        if let Err(err) = self.floorplan.navigate(room_number) {
            return self.reject(&err);
        }

        let label = self.floorplan.selected_room().map(|room| room.label.clone()).unwrap_or_default();
        tracing::debug!(room_number, %label, "room selected");
        self.status_message = Some(format!("Room {room_number}: {label}"));
        vec![AppAction::Render]
    }

    /// Remove any highlight.
    pub fn clear_selection(&mut self) -> Vec<AppAction> {
        self.floorplan.clear();
        tracing::debug!("selection cleared");
        self.status_message = Some("Selection cleared".to_string());
        vec![AppAction::Render]
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    fn reject(&mut self, err: &InputError) -> Vec<AppAction> {
        tracing::warn!(%err, "input rejected");
        self.status_message = Some(err.to_string());
        vec![AppAction::Render]
    }

    /// Set a status message to display to the user.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Current house and selection.
    pub fn floorplan(&self) -> &Floorplan {
        &self.floorplan
    }

    /// Command line being typed.
    pub fn input(&self) -> &InputLine {
        &self.input
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use floorplan_core::Selection;

    use super::*;

    fn app_with_house() -> App {
        App::with_house(HouseSpec::new(300, 200, 4).unwrap())
    }

    #[test]
    fn new_app_shows_help() {
        let app = App::new();
        assert_eq!(app.status_message(), Some(command::help_line().as_str()));
        assert!(app.floorplan().layout().is_none());
    }

    #[test]
    fn api_create_from_text() {
        let mut app = App::new();
        let actions = app.create_from_text("300", "200", "4");

        assert_eq!(actions, [AppAction::Render]);
        assert_eq!(app.floorplan().room_count(), 4);
        assert_eq!(app.status_message(), Some("House 300x200 with 4 rooms (2x2 grid)"));
    }

    #[test]
    fn invalid_create_keeps_previous_house() {
        let mut app = app_with_house();
        app.navigate(2);

        let actions = app.create_from_text("300", "oops", "9");

        assert_eq!(actions, [AppAction::Render]);
        assert_eq!(app.floorplan().room_count(), 4);
        assert_eq!(app.floorplan().selection(), Selection::Selected(1));
        assert!(app.status_message().is_some_and(|m| m.starts_with("Please enter valid numbers")));
    }

    #[test]
    fn api_navigate() {
        let mut app = app_with_house();
        let actions = app.navigate(3);

        assert_eq!(actions, [AppAction::Render]);
        assert_eq!(app.floorplan().selection(), Selection::Selected(2));
        assert_eq!(app.status_message(), Some("Room 3: Bathroom"));
    }

    #[test]
    fn navigate_out_of_range_reports_error() {
        let mut app = app_with_house();
        app.navigate(5);

        assert_eq!(app.floorplan().selection(), Selection::Unselected);
        assert!(app.status_message().is_some_and(|m| m.starts_with("Invalid room number")));
    }

    #[test]
    fn navigate_non_number_reports_error() {
        let mut app = app_with_house();
        app.navigate_from_text("den");

        assert!(
            app.status_message().is_some_and(|m| m.starts_with("Please enter a valid room number"))
        );
    }

    #[test]
    fn api_clear_selection() {
        let mut app = app_with_house();
        app.navigate(1);

        assert_eq!(app.clear_selection(), [AppAction::Render]);
        assert_eq!(app.floorplan().selection(), Selection::Unselected);
    }

    #[test]
    fn esc_quits() {
        let mut app = App::new();
        assert_eq!(app.handle(AppEvent::Key(KeyInput::Esc)), [AppAction::Quit]);
    }

    #[test]
    fn empty_enter_only_renders() {
        let mut app = app_with_house();
        let before = app.status_message().map(str::to_string);

        assert_eq!(app.handle(AppEvent::Key(KeyInput::Enter)), [AppAction::Render]);
        assert_eq!(app.status_message().map(str::to_string), before);
    }

    #[test]
    fn resize_only_renders() {
        let mut app = app_with_house();
        let before = app.floorplan().clone();

        assert_eq!(app.handle(AppEvent::Resize(120, 40)), [AppAction::Render]);
        assert_eq!(app.floorplan(), &before);
    }

    #[test]
    fn tick_is_silent() {
        let mut app = App::new();
        assert!(app.handle(AppEvent::Tick).is_empty());
    }

    #[test]
    fn unknown_and_usage_messages() {
        let mut app = App::new();

        app.dispatch(Command::Unknown { name: "paint".into() });
        assert_eq!(app.status_message(), Some("Unknown command: /paint"));

        app.dispatch(Command::Usage { usage: "/go <room>" });
        assert_eq!(app.status_message(), Some("Usage: /go <room>"));
    }
}
