//! CSV force log.
//!
//! One file per run, created with a header row at startup. Every row is
//! written by opening the file in append mode, writing, flushing and closing
//! it again, so no handle is held across ticks.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::DataLogError;
use crate::reading::Reading;

pub const HEADER: [&str; 3] = ["Date", "Time", "Force (N)"];

/// Append-only CSV log of accepted readings
#[derive(Debug)]
pub struct ForceLog {
    path: PathBuf,
    rows_written: usize,
}

impl ForceLog {
    /// Create `rudder_force_log_<timestamp>.csv` in `dir` and write the header
    pub fn create(dir: &Path, created_at: DateTime<Local>) -> Result<Self, DataLogError> {
        fs::create_dir_all(dir).map_err(|source| DataLogError::CreateDir {
            path: dir.display().to_string(),
            source,
        })?;

        let path = dir.join(file_name(created_at));
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| DataLogError::Open {
                path: path.display().to_string(),
                source,
            })?;

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(HEADER)?;
        writer.flush()?;

        tracing::info!(path = %path.display(), "Created force log");
        Ok(Self { path, rows_written: 0 })
    }

    /// Append one row for `reading`
    pub fn append(&mut self, reading: &Reading) -> Result<(), DataLogError> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|source| DataLogError::Open {
                path: self.path.display().to_string(),
                source,
            })?;

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(&row(reading))?;
        writer.flush()?;

        self.rows_written += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }
}

/// Log file name for a run started at `created_at`
pub fn file_name(created_at: DateTime<Local>) -> String {
    format!("rudder_force_log_{}.csv", created_at.format("%Y-%m-%d_%H-%M-%S"))
}

fn row(reading: &Reading) -> [String; 3] {
    [
        reading.timestamp.format("%Y-%m-%d").to_string(),
        reading.timestamp.format("%H:%M:%S").to_string(),
        format!("{:.6}", reading.force),
    ]
}
