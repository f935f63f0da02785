//! Acquisition session.
//!
//! Owns the connection, the run's anchor time, the bounded history and the
//! CSV log. The main loop calls [`Session::tick`] and waits for the returned
//! delay before calling it again.

use std::time::Duration;

use chrono::{DateTime, Local};

use crate::config::{MAX_DATA_POINTS, RECONNECT_INTERVAL, UPDATE_INTERVAL};
use crate::datalog::ForceLog;
use crate::error::{AppError, Result};
use crate::history::History;
use crate::reading::{first_number, grams_to_newtons, Reading};
use crate::sensor::{Connector, LineSource};

pub const STATUS_READY: &str = "Ready";
pub const STATUS_RECONNECTING: &str = "Reconnecting...";
pub const STATUS_DISCONNECTED: &str = "Serial Disconnected. Reconnecting...";

/// State of one acquisition run
pub struct Session {
    connector: Box<dyn Connector>,
    connection: Option<Box<dyn LineSource>>,
    /// Wall-clock time of the first accepted reading
    anchor: Option<DateTime<Local>>,
    history: History,
    log: ForceLog,
    latest: Option<Reading>,
    status: String,
}

impl Session {
    /// Create a disconnected session writing to `log`
    pub fn new(connector: Box<dyn Connector>, log: ForceLog) -> Self {
        Self::with_capacity(connector, log, MAX_DATA_POINTS)
    }

    pub fn with_capacity(connector: Box<dyn Connector>, log: ForceLog, capacity: usize) -> Self {
        Self {
            connector,
            connection: None,
            anchor: None,
            history: History::new(capacity),
            log,
            latest: None,
            status: STATUS_READY.to_string(),
        }
    }

    /// Discover and open the sensor. Failure leaves the session disconnected.
    pub fn connect(&mut self) -> bool {
        match self.connector.connect() {
            Ok(connection) => {
                self.status = format!("Connected to {}", connection.port_name());
                self.connection = Some(connection);
                true
            }
            Err(e) => {
                tracing::debug!("Connection attempt failed: {}", e);
                false
            }
        }
    }

    /// Run one acquisition step and return the delay until the next one
    pub fn tick(&mut self, now: DateTime<Local>) -> Duration {
        if !self.is_connected() {
            self.status = STATUS_RECONNECTING.to_string();
            self.connect();
            return RECONNECT_INTERVAL;
        }

        match self.poll(now) {
            Ok(_) => {}
            Err(AppError::Serial(e)) if e.is_disconnect() => {
                tracing::warn!("{}", e);
                self.status = STATUS_DISCONNECTED.to_string();
                self.connection = None;
            }
            Err(AppError::Serial(e)) => self.report_error(e),
            Err(AppError::DataLog(e)) => self.report_error(e),
            Err(e) => self.report_error(e),
        }
        UPDATE_INTERVAL
    }

    /// Show an error that leaves the connection open
    fn report_error(&mut self, err: impl std::fmt::Display) {
        tracing::error!("Error: {}", err);
        self.status = format!("Error: {}", err);
    }

    /// Read and record one line if the device has data waiting
    fn poll(&mut self, now: DateTime<Local>) -> Result<Option<Reading>> {
        let Some(connection) = self.connection.as_mut() else {
            return Ok(None);
        };
        if connection.bytes_available()? == 0 {
            return Ok(None);
        }

        let raw = connection.read_line()?;
        self.status = format!("Received: {}", raw);

        let Some(grams) = first_number(&raw) else {
            tracing::trace!("No number in {:?}", raw);
            return Ok(None);
        };

        let reading = Reading {
            timestamp: now,
            elapsed_time: self.elapsed_since_anchor(now),
            force: grams_to_newtons(grams),
        };

        // Log first: a failed write must not leave a reading in the history
        // without its row.
        self.log.append(&reading)?;
        self.anchor.get_or_insert(now);
        self.history.push(&reading);
        self.latest = Some(reading);
        tracing::debug!(
            elapsed = reading.elapsed_time,
            force = reading.force,
            points = self.history.len(),
            "Reading accepted"
        );

        Ok(Some(reading))
    }

    /// Seconds since the anchor, never less than the previous reading's.
    /// Before the first reading `now` is the anchor.
    fn elapsed_since_anchor(&self, now: DateTime<Local>) -> f64 {
        let anchor = self.anchor.unwrap_or(now);
        let elapsed = (now - anchor)
            .num_microseconds()
            .map_or(0.0, |us| us as f64 / 1_000_000.0);
        let floor = self.history.latest_elapsed().unwrap_or(0.0);
        elapsed.max(floor)
    }

    /// Close the connection if one is open
    pub fn close(&mut self) {
        if let Some(connection) = self.connection.take() {
            tracing::info!("Closing connection to {}", connection.port_name());
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    pub fn port_name(&self) -> Option<String> {
        self.connection.as_ref().map(|c| c.port_name())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.latest.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn log(&self) -> &ForceLog {
        &self.log
    }

    pub fn anchor(&self) -> Option<DateTime<Local>> {
        self.anchor
    }
}
