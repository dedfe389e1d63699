//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use floorplan_app::{App, AppEvent, Driver, KeyInput};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::ui;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Logging could not be set up.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm) and rendering (ratatui). Restores the
/// terminal when stopped or dropped.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    tick: Duration,
    active: bool,
}

impl TerminalDriver {
    /// Enter raw mode and the alternate screen.
    pub fn new(tick: Duration) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, tick, active: true })
    }

    /// Convert a crossterm key event to `KeyInput`.
    ///
    /// Ctrl-C maps to Esc since raw mode swallows the interrupt signal.
    fn convert_key(key: KeyEvent) -> Option<KeyInput> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c' | 'd')).then_some(KeyInput::Esc);
        }

        match key.code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }

    /// Translate a terminal event. `None` for events the app ignores.
    fn convert_event(event: Event) -> Option<AppEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Self::convert_key(key).map(AppEvent::Key)
            },
            Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
            _ => None,
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        loop {
            tokio::select! {
                biased;

                // Terminal events
                maybe_event = self.event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if let Some(app_event) = Self::convert_event(event) {
                                return Ok(Some(app_event));
                            }
                        },
                        Some(Err(e)) => return Err(TerminalError::Io(e)),
                        None => return Ok(None),
                    }
                }

                // Tick timeout
                () = tokio::time::sleep(self.tick) => {
                    return Ok(Some(AppEvent::Tick));
                }
            }
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            ui::render(frame, app);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        if let Err(e) = disable_raw_mode() {
            tracing::warn!("Failed to disable raw mode: {:?}", e);
        }
        if let Err(e) = stdout().execute(LeaveAlternateScreen) {
            tracing::warn!("Failed to leave alternate screen: {:?}", e);
        }
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn printable_and_editing_keys() {
        assert_eq!(
            TerminalDriver::convert_event(key(KeyCode::Char('7'), KeyModifiers::NONE)),
            Some(AppEvent::Key(KeyInput::Char('7')))
        );
        assert_eq!(
            TerminalDriver::convert_event(key(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            Some(AppEvent::Key(KeyInput::Char('R')))
        );
        assert_eq!(
            TerminalDriver::convert_event(key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(AppEvent::Key(KeyInput::Backspace))
        );
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            TerminalDriver::convert_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppEvent::Key(KeyInput::Esc))
        );
        assert_eq!(
            TerminalDriver::convert_event(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn release_events_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(TerminalDriver::convert_event(release), None);
    }

    #[test]
    fn resize_passes_through() {
        assert_eq!(TerminalDriver::convert_event(Event::Resize(100, 30)), Some(AppEvent::Resize(100, 30)));
    }
}
