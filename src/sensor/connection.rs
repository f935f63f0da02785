//! Serial connection to the force sensor.

use std::io::{self, Read};
use std::mem;
use std::time::Instant;

use serialport::SerialPort;

use super::discovery::find_serial_port;
use super::{Connector, LineSource};
use crate::config::{BAUD_RATE, READ_TIMEOUT};
use crate::error::SerialError;

const READ_CHUNK: usize = 256;

/// An open serial port with line framing
pub struct SerialConnection {
    port: Box<dyn SerialPort>,
    name: String,
    /// Bytes read from the port but not yet returned as a line
    pending: Vec<u8>,
}

impl SerialConnection {
    /// Open `name` at the sensor's baud rate with a bounded read timeout
    pub fn open(name: &str) -> Result<Self, SerialError> {
        let port = serialport::new(name, BAUD_RATE)
            .timeout(READ_TIMEOUT)
            .open()
            .map_err(|e| SerialError::OpenFailed {
                port: name.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self::with_port(port, name))
    }

    /// Wrap an already opened port
    pub fn with_port(port: Box<dyn SerialPort>, name: &str) -> Self {
        Self {
            port,
            name: name.to_string(),
            pending: Vec::new(),
        }
    }

    /// Remove and return the first complete line in `pending`, if any
    fn take_line(&mut self) -> Option<Vec<u8>> {
        let end = self.pending.iter().position(|&b| b == b'\n')?;
        Some(self.pending.drain(..=end).collect())
    }
}

impl LineSource for SerialConnection {
    fn port_name(&self) -> String {
        self.name.clone()
    }

    fn bytes_available(&mut self) -> Result<usize, SerialError> {
        // The query only fails once the handle is dead (EIO after a hangup)
        let waiting = self
            .port
            .bytes_to_read()
            .map_err(|e| SerialError::Disconnected(e.to_string()))?;
        Ok(self.pending.len() + waiting as usize)
    }

    fn read_line(&mut self) -> Result<String, SerialError> {
        let deadline = Instant::now() + READ_TIMEOUT;
        let mut chunk = [0u8; READ_CHUNK];

        loop {
            if let Some(line) = self.take_line() {
                return decode_line(line);
            }
            // Whatever arrived before the timeout is the line
            if Instant::now() >= deadline {
                return decode_line(mem::take(&mut self.pending));
            }

            match self.port.read(&mut chunk) {
                Ok(0) => return Err(SerialError::Disconnected("device returned end of stream".to_string())),
                Ok(n) => self.pending.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == io::ErrorKind::TimedOut => {
                    return decode_line(mem::take(&mut self.pending));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(SerialError::from_read(e)),
            }
        }
    }
}

impl Drop for SerialConnection {
    fn drop(&mut self) {
        tracing::info!("Closed serial port {}", self.name);
    }
}

/// Decode a raw line as UTF-8 and strip surrounding whitespace
pub fn decode_line(raw: Vec<u8>) -> Result<String, SerialError> {
    let text = String::from_utf8(raw).map_err(|_| SerialError::Decode)?;
    Ok(text.trim().to_string())
}

/// Discovers the first USB-serial port and opens it
#[derive(Debug, Default)]
pub struct SerialConnector;

impl Connector for SerialConnector {
    fn connect(&mut self) -> Result<Box<dyn LineSource>, SerialError> {
        let port = find_serial_port().ok_or(SerialError::DeviceNotFound)?;
        match SerialConnection::open(&port) {
            Ok(connection) => {
                tracing::info!("Connected to {}", port);
                Ok(Box::new(connection))
            }
            Err(e) => {
                tracing::warn!("Failed to connect: {}", e);
                Err(e)
            }
        }
    }
}
