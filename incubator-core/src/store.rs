//! Flat-file persistence for the incubator state and its audit log.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::{IncubatorError, Result};
use crate::models::IncubatorState;

pub const DEFAULT_DATA_FILE: &str = "incubator_data.json";
pub const DEFAULT_LOG_FILE: &str = "incubator_log.txt";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// JSON file holding the eight slots.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted state. A missing file means all slots are empty.
    pub fn load(&self) -> Result<IncubatorState> {
        debug!(path = %self.path.display(), "loading incubator state");
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no state file yet, starting empty");
                return Ok(IncubatorState::default());
            }
            Err(e) => return Err(IncubatorError::io(&self.path, e)),
        };

        let state: IncubatorState =
            serde_json::from_str(&contents).map_err(|source| IncubatorError::MalformedState {
                path: self.path.clone(),
                source,
            })?;
        debug!(occupied = state.occupied_count(), "incubator state loaded");
        Ok(state)
    }

    /// Overwrite the persisted state with all eight slots (temp file + rename).
    pub fn save(&self, state: &IncubatorState) -> Result<()> {
        debug!(
            path = %self.path.display(),
            occupied = state.occupied_count(),
            "saving incubator state"
        );
        let mut buf = serde_json::to_string_pretty(state).map_err(|source| {
            IncubatorError::MalformedState {
                path: self.path.clone(),
                source,
            }
        })?;
        buf.push('\n');
        write_atomic(&self.path, &buf)
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IncubatorError::io(parent, e))?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents).map_err(|e| IncubatorError::io(&tmp_path, e))?;
    fs::rename(&tmp_path, path).map_err(|e| IncubatorError::io(path, e))?;
    Ok(())
}

/// Append-only text log, one line per mutation.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `[YYYY-MM-DD HH:MM:SS] message`.
    pub fn append(&self, at: NaiveDateTime, message: &str) -> Result<()> {
        let line = format_entry(at, message);
        debug!(path = %self.path.display(), %line, "appending audit entry");

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| IncubatorError::io(parent, e))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| IncubatorError::io(&self.path, e))?;
        writeln!(file, "{line}").map_err(|e| IncubatorError::io(&self.path, e))
    }

    /// All entries written so far, oldest first. Missing log reads as empty.
    pub fn entries(&self) -> Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(IncubatorError::io(&self.path, e)),
        }
    }
}

fn format_entry(at: NaiveDateTime, message: &str) -> String {
    format!("[{}] {}", at.format(TIMESTAMP_FORMAT), message)
}
