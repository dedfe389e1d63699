//! Floor plan viewer entry point.

use clap::Parser;
use floorplan_tui::{App, Args, Runtime, TerminalDriver, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        logging::init(path)?;
    }

    let app = match args.initial_house()? {
        Some(spec) => App::with_house(spec),
        None => App::new(),
    };
    tracing::info!(house = ?app.floorplan().spec(), "starting");

    let driver = TerminalDriver::new(args.tick())?;
    Ok(Runtime::new(driver, app).run().await?)
}
