//! Serial force sensor access.
//!
//! The session talks to the device through two seams: a [`Connector`] that
//! discovers and opens the device, and the [`LineSource`] it hands back.

use crate::error::SerialError;

pub mod connection;
pub mod discovery;

pub use connection::SerialConnector;

/// An open, newline-framed text stream from the sensor
#[cfg_attr(test, mockall::automock)]
pub trait LineSource {
    /// Name of the underlying device
    fn port_name(&self) -> String;

    /// Bytes that can be read without blocking
    fn bytes_available(&mut self) -> Result<usize, SerialError>;

    /// Read one line, without its terminator or surrounding whitespace
    fn read_line(&mut self) -> Result<String, SerialError>;
}

/// Discovers the sensor and opens a connection to it
#[cfg_attr(test, mockall::automock)]
pub trait Connector {
    fn connect(&mut self) -> Result<Box<dyn LineSource>, SerialError>;
}
