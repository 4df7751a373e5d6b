//! Adding and removing eggs.
//!
//! Every operation is a full load, mutate, save cycle against the
//! [`StateStore`]; nothing is cached between calls. Rejected operations leave
//! both the state file and the audit log untouched.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::{IncubatorError, Result};
use crate::models::{IncubatorState, SlotIndex};
use crate::store::{AuditLog, StateStore};

pub struct Incubator<C = SystemClock> {
    store: StateStore,
    log: AuditLog,
    clock: C,
}

impl Incubator<SystemClock> {
    pub fn open(store: StateStore, log: AuditLog) -> Self {
        Self::with_clock(store, log, SystemClock)
    }
}

impl<C: Clock> Incubator<C> {
    pub fn with_clock(store: StateStore, log: AuditLog, clock: C) -> Self {
        Self { store, log, clock }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn log(&self) -> &AuditLog {
        &self.log
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Fresh read of the persisted state.
    pub fn state(&self) -> Result<IncubatorState> {
        self.store.load()
    }

    /// Put an egg placed on `date` into an empty slot.
    pub fn add(&self, slot: SlotIndex, date: NaiveDate) -> Result<()> {
        let today = self.clock.today();
        if date > today {
            warn!(%slot, %date, %today, "rejected future date");
            return Err(IncubatorError::FutureDate { date, today });
        }

        let mut state = self.store.load()?;
        if !state.place(slot, date) {
            warn!(%slot, "slot already occupied");
            return Err(IncubatorError::SlotOccupied(slot));
        }
        self.store.save(&state)?;
        self.log.append(
            self.clock.now(),
            &format!("Added egg to slot {slot} on {date}"),
        )?;

        info!(%slot, %date, "egg added");
        Ok(())
    }

    /// Empty an occupied slot, returning the date the egg was placed.
    pub fn remove(&self, slot: SlotIndex) -> Result<NaiveDate> {
        let mut state = self.store.load()?;
        let Some(removed) = state.clear(slot) else {
            warn!(%slot, "slot already empty");
            return Err(IncubatorError::SlotEmpty(slot));
        };
        self.store.save(&state)?;
        self.log.append(
            self.clock.now(),
            &format!("Removed egg from slot {slot} (was added on {removed})"),
        )?;

        info!(%slot, date = %removed, "egg removed");
        Ok(removed)
    }
}
