//! Terminal UI for the floor plan viewer
//!
//! A thin shell over [`floorplan_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`floorplan_app::Runtime`].
//!
//! This crate only handles terminal events, rendering, and process setup.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use cli::Args;
pub use floorplan_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
