//! Core of the egg incubator tracker: slot state, persistence, date rules.

pub mod clock;
pub mod dates;
pub mod error;
pub mod models;
pub mod ops;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dates::{parse_date, ACCEPTED_FORMATS};
pub use error::{IncubatorError, Result};
pub use models::*;
pub use ops::Incubator;
pub use store::{AuditLog, StateStore};
