//! Command-line arguments.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use floorplan_core::{HouseSpec, InputError};

/// Interactive floor plan viewer
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "floorplan")]
#[command(about = "Lay out a house as a grid of rooms and highlight one at a time")]
#[command(version)]
pub struct Args {
    /// Initial house width in terminal cells
    #[arg(long, requires_all = ["height", "rooms"])]
    pub width: Option<u32>,

    /// Initial house height in terminal cells
    #[arg(long, requires_all = ["width", "rooms"])]
    pub height: Option<u32>,

    /// Initial number of rooms
    #[arg(long, requires_all = ["width", "height"])]
    pub rooms: Option<u32>,

    /// Tick interval in milliseconds
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Write logs to this file (filtered by `RUST_LOG`)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// House to show at startup, if all three dimensions were given.
    ///
    /// # Errors
    ///
    /// Returns the same [`InputError`] `/create` would for these values.
    pub fn initial_house(&self) -> Result<Option<HouseSpec>, InputError> {
        match (self.width, self.height, self.rooms) {
            (Some(width), Some(height), Some(rooms)) => HouseSpec::new(width, height, rooms).map(Some),
            _ => Ok(None),
        }
    }

    /// Tick interval.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
