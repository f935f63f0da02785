use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;

mod config;
mod datalog;
mod error;
mod history;
mod logging;
mod reading;
mod sensor;
mod session;
mod ui;

use crate::config::AppConfig;
use crate::datalog::ForceLog;
use crate::error::UiError;
use crate::sensor::SerialConnector;
use crate::session::Session;
use crate::ui::{handle_input, App, Tui};

/// Main entry point for the rudder force monitor.
///
/// This function performs the following steps:
/// 1. Loads the optional configuration file and starts diagnostics logging.
/// 2. Creates this run's CSV force log with its header row.
/// 3. Attempts a first connection to the force sensor.
/// 4. Takes over the terminal and runs the acquisition loop until the operator quits.
/// 5. Closes the serial connection and restores the terminal.
///
/// # Errors
///
/// Only startup fails the program: an invalid configuration, an unusable log
/// directory or a terminal that cannot be initialized. Once the loop runs,
/// every acquisition failure is reported in the status bar instead.
fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init(&config.logging)?;
    tracing::info!("Rudder Force Monitor starting");

    let log_dir = config.log.resolve_directory()?;
    let log = ForceLog::create(&log_dir, Local::now())?;

    let mut session = Session::new(Box::new(SerialConnector), log);
    if !session.connect() {
        tracing::warn!("No sensor connected at startup");
    }

    let mut app = App::new(config.chart.clone());
    let result = Tui::new()
        .map_err(anyhow::Error::from)
        .and_then(|mut tui| run(&mut tui, &mut app, &mut session));

    session.close();
    tracing::info!(
        started = ?session.anchor(),
        rows = session.log().rows_written(),
        path = %session.log().path().display(),
        "Rudder Force Monitor stopped"
    );
    result
}

/// Tick the session on schedule and redraw until the operator quits
fn run(tui: &mut Tui, app: &mut App, session: &mut Session) -> Result<()> {
    let mut next_tick = Instant::now();

    while !app.should_quit {
        if Instant::now() >= next_tick {
            let delay = session.tick(Local::now());
            next_tick = Instant::now() + delay;
        }

        tui.draw(app, session)?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        let action = handle_input(timeout).map_err(|e| UiError::InputError(e.to_string()))?;
        app.handle_action(action);
    }

    Ok(())
}
