//! Application configuration management.
//!
//! Timing and unit constants are fixed at compile time. The remaining
//! defaults (log directory, chart ranges, diagnostics) can be overridden from
//! an optional `rudder-force.toml` in the working directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Serial line speed of the force sensor.
pub const BAUD_RATE: u32 = 115_200;
/// Period of the acquisition tick.
pub const UPDATE_INTERVAL: Duration = Duration::from_millis(100);
/// Delay before the next tick after a reconnect attempt.
pub const RECONNECT_INTERVAL: Duration = Duration::from_millis(2000);
/// Upper bound on a single blocking serial read.
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);
/// Number of points kept for the chart.
pub const MAX_DATA_POINTS: usize = 200;
/// Grams-force to newtons.
pub const NEWTONS_PER_GRAM: f64 = 0.00980665;

/// Config file looked up in the working directory (extension resolved by `config`).
pub const CONFIG_FILE_STEM: &str = "rudder-force";

/// Top-level application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub log: DataLogConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the CSV force log is written
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataLogConfig {
    /// Target directory; the Desktop when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// Chart ranges
#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    #[serde(default = "default_axis_max")]
    pub initial_x_max: f64,
    #[serde(default = "default_axis_max")]
    pub initial_y_max: f64,
    #[serde(default = "default_y_grid_step")]
    pub y_grid_step: f64,
    #[serde(default = "default_min_x_span")]
    pub min_x_span: f64,
}

/// Diagnostics logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

// Default value functions
fn default_axis_max() -> f64 {
    150.0
}

fn default_y_grid_step() -> f64 {
    25.0
}

fn default_min_x_span() -> f64 {
    10.0
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rudder-force-monitor.log")
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            initial_x_max: default_axis_max(),
            initial_y_max: default_axis_max(),
            y_grid_step: default_y_grid_step(),
            min_x_span: default_min_x_span(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

impl DataLogConfig {
    /// Resolve the directory the CSV log goes into.
    ///
    /// Falls back from the configured directory to the Desktop, the home
    /// directory and finally the working directory.
    pub fn resolve_directory(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.directory {
            return Ok(dir.clone());
        }
        dirs::desktop_dir()
            .or_else(dirs::home_dir)
            .or_else(|| std::env::current_dir().ok())
            .ok_or_else(|| ConfigError::NoLogDirectory.into())
    }
}

impl AppConfig {
    /// Load configuration from `rudder-force.toml` if present, defaults otherwise
    pub fn load() -> Result<Self> {
        Self::from_file(Path::new(CONFIG_FILE_STEM))
    }

    /// Load configuration from an optional file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = config::File::from(path.as_ref())
            .format(config::FileFormat::Toml)
            .required(false);

        let config: AppConfig = config::Config::builder()
            .add_source(source)
            .build()
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .map_err(ConfigError::from)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let chart_fields = [
            ("chart.initial_x_max", self.chart.initial_x_max),
            ("chart.initial_y_max", self.chart.initial_y_max),
            ("chart.y_grid_step", self.chart.y_grid_step),
            ("chart.min_x_span", self.chart.min_x_span),
        ];
        for (field, value) in chart_fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "must be a positive number".to_string(),
                }
                .into());
            }
        }

        if !matches!(
            self.logging.level.to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                message: "must be one of trace, debug, info, warn, error".to_string(),
            }
            .into());
        }

        if self.logging.file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.file".to_string(),
                message: "cannot be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
