//! Diagnostics logging.
//!
//! The terminal belongs to the UI, so tracing output goes to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global tracing subscriber
pub fn init(config: &LoggingConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .with_context(|| format!("Failed to open log file {}", config.file.display()))?;

    let filter = EnvFilter::try_new(config.level.to_ascii_lowercase())
        .with_context(|| format!("Invalid log level {}", config.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "INFO".to_string(),
            file: dir.path().join("monitor.log"),
        };
        init(&config).unwrap();
        tracing::info!("logging initialised");

        let content = std::fs::read_to_string(&config.file).unwrap();
        assert!(content.contains("logging initialised"));
    }
}
