//! Application layer for the floor plan viewer
//!
//! Pure state machine and generic runtime, so the same code that drives the
//! terminal also runs under scripted tests.
//!
//! # Components
//!
//! - [`App`]: UI state machine (input line, commands, floor plan, status)
//! - [`Command`]: parsed input line, dispatched by [`App`]
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic event loop using a [`Driver`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
pub mod command;
mod driver;
mod event;
mod input;
mod runtime;

pub use action::AppAction;
pub use app::App;
pub use command::Command;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::{InputLine, KeyInput};
pub use runtime::Runtime;
