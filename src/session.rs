//! User-facing commands: validate input, run the operation, report the outcome.
//!
//! Input problems (bad slot, bad date, occupied or empty slot) are written to
//! the output as a message and the command returns `Ok`. Only fatal errors,
//! such as a malformed state file, come back as `Err`.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use incubator_core::{
    parse_date, AuditLog, Clock, Incubator, IncubatorError, SlotIndex, StateStore, SystemClock,
};

use crate::config::Config;
use crate::render::{render, style_for, Style};

pub struct Session<C = SystemClock> {
    incubator: Incubator<C>,
    style: Box<dyn Style + Send + Sync>,
    refresh_interval: Duration,
}

impl Session<SystemClock> {
    pub fn from_config(config: &Config) -> Self {
        let incubator = Incubator::open(
            StateStore::new(&config.data_file),
            AuditLog::new(&config.log_file),
        );
        Self::new(incubator, style_for(config.color), config.refresh_interval())
    }
}

impl<C: Clock> Session<C> {
    pub fn new(
        incubator: Incubator<C>,
        style: Box<dyn Style + Send + Sync>,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            incubator,
            style,
            refresh_interval,
        }
    }

    pub fn incubator(&self) -> &Incubator<C> {
        &self.incubator
    }

    pub fn style(&self) -> &dyn Style {
        self.style.as_ref()
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Render the grid once.
    pub fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        let grid = render(&self.incubator, self.style())?;
        write!(out, "{grid}")?;
        Ok(())
    }

    /// Add an egg. `date` defaults to today when absent or blank.
    pub fn add<W: Write>(&self, out: &mut W, slot: SlotIndex, date: Option<&str>) -> Result<()> {
        let date = match date.map(str::trim).filter(|d| !d.is_empty()) {
            Some(input) => match parse_date(input, self.incubator.clock().current_year()) {
                Ok(date) => date,
                Err(e) => return report(out, e),
            },
            None => self.incubator.today(),
        };

        match self.incubator.add(slot, date) {
            Ok(()) => {
                writeln!(out, "Added egg to slot {slot} on {date}.")?;
                Ok(())
            }
            Err(e) => report(out, e),
        }
    }

    pub fn remove<W: Write>(&self, out: &mut W, slot: SlotIndex) -> Result<()> {
        match self.incubator.remove(slot) {
            Ok(date) => {
                writeln!(out, "Removed egg from slot {slot} (was added on {date}).")?;
                Ok(())
            }
            Err(e) => report(out, e),
        }
    }
}

/// Print a user error, or hand a fatal one back to the caller.
fn report<W: Write>(out: &mut W, err: IncubatorError) -> Result<()> {
    if err.is_fatal() {
        return Err(err.into());
    }
    writeln!(out, "{err}")?;
    Ok(())
}
