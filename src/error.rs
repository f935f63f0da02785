//! Custom error types for the rudder force monitor.
//!
//! This module defines domain-specific error types using thiserror,
//! providing clear error messages and proper error context propagation.

use std::io;

use thiserror::Error;

/// Errors related to the serial force sensor
#[derive(Debug, Error)]
pub enum SerialError {
    #[error("No USB-serial device found")]
    DeviceNotFound,

    #[error("Failed to open {port}: {message}")]
    OpenFailed { port: String, message: String },

    #[error("Serial device disconnected: {0}")]
    Disconnected(String),

    #[error("Serial read failed: {0}")]
    Read(String),

    #[error("Received data is not valid UTF-8")]
    Decode,
}

impl SerialError {
    /// Whether the error means the handle is dead and must be dropped
    pub fn is_disconnect(&self) -> bool {
        matches!(self, SerialError::Disconnected(_))
    }

    /// Classify an I/O error raised by a serial read.
    pub fn from_read(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::BrokenPipe
            | io::ErrorKind::NotConnected
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::NotFound
            | io::ErrorKind::PermissionDenied
            | io::ErrorKind::UnexpectedEof => SerialError::Disconnected(err.to_string()),
            _ => SerialError::Read(err.to_string()),
        }
    }
}

impl From<serialport::Error> for SerialError {
    fn from(err: serialport::Error) -> Self {
        match err.kind() {
            serialport::ErrorKind::NoDevice => SerialError::Disconnected(err.to_string()),
            serialport::ErrorKind::Io(kind) => SerialError::from_read(io::Error::new(kind, err.description)),
            _ => SerialError::Read(err.to_string()),
        }
    }
}

/// Errors related to the CSV force log
#[derive(Debug, Error)]
pub enum DataLogError {
    #[error("Failed to create log directory {path}: {source}")]
    CreateDir { path: String, source: io::Error },

    #[error("Failed to open log file {path}: {source}")]
    Open { path: String, source: io::Error },

    #[error("Failed to write log row: {0}")]
    Write(#[from] csv::Error),

    #[error("Failed to flush log file: {0}")]
    Flush(#[from] io::Error),
}

/// Errors related to application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("No usable log directory could be determined")]
    NoLogDirectory,
}

/// Errors related to the UI
#[derive(Debug, Error)]
pub enum UiError {
    #[error("Terminal initialization failed: {0}")]
    InitializationError(String),

    #[error("Terminal rendering failed: {0}")]
    RenderError(String),

    #[error("Input handling failed: {0}")]
    InputError(String),
}

/// Application-level errors that can wrap other error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Serial error: {0}")]
    Serial(#[from] SerialError),

    #[error("Data log error: {0}")]
    DataLog(#[from] DataLogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("UI error: {0}")]
    Ui(#[from] UiError),
}

/// Convenience type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_pipe_is_disconnect() {
        let err = SerialError::from_read(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(err.is_disconnect());
    }

    #[test]
    fn test_timeout_is_not_disconnect() {
        let err = SerialError::from_read(io::Error::new(io::ErrorKind::TimedOut, "slow"));
        assert!(!err.is_disconnect());
    }

    #[test]
    fn test_no_device_is_disconnect() {
        let err: SerialError = serialport::Error::new(serialport::ErrorKind::NoDevice, "unplugged").into();
        assert!(err.is_disconnect());
    }
}
