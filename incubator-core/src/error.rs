use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::dates::ACCEPTED_FORMATS;
use crate::models::SlotIndex;

/// Errors produced by the incubator core.
///
/// Everything except [`IncubatorError::MalformedState`] and
/// [`IncubatorError::Io`] is a user-input problem: it is reported as a message
/// and the operation is abandoned without touching the state file or the log.
#[derive(Debug, Error)]
pub enum IncubatorError {
    #[error("Invalid date '{input}'. Date must be in format {}", ACCEPTED_FORMATS.join(", "))]
    InvalidDateFormat { input: String },

    #[error("Date cannot be in the future ({date} is after {today}).")]
    FutureDate { date: NaiveDate, today: NaiveDate },

    #[error("Invalid slot '{0}'. Slot must be a number from 1 to 8.")]
    InvalidSlot(String),

    #[error("Slot {0} already occupied.")]
    SlotOccupied(SlotIndex),

    #[error("Slot {0} already empty.")]
    SlotEmpty(SlotIndex),

    #[error("Malformed incubator state in {path}: {source}")]
    MalformedState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IncubatorError {
    /// Whether the error should abort the program instead of being reported.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MalformedState { .. } | Self::Io { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = IncubatorError> = std::result::Result<T, E>;
