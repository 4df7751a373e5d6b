use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{IncubatorState, SlotIndex};

/// Days from placing an egg until it is expected to hatch.
pub const INCUBATION_DAYS: u64 = 21;

/// How far along a slot is.
///
/// - `Empty`: No egg in the slot
/// - `New`: Under 7 days
/// - `Week1`: 7 to 13 days
/// - `Week2`: 14 to 17 days
/// - `Imminent`: 18 to 20 days, hatch is close
/// - `Done`: 21 days or more
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Empty,
    New,
    Week1,
    Week2,
    Imminent,
    Done,
}

impl Stage {
    /// Stage for an occupied slot of the given age in days.
    pub fn for_age(age_days: i64) -> Self {
        match age_days {
            ..=6 => Self::New,
            7..=13 => Self::Week1,
            14..=17 => Self::Week2,
            18..=20 => Self::Imminent,
            _ => Self::Done,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::New => "new",
            Self::Week1 => "week1",
            Self::Week2 => "week2",
            Self::Imminent => "imminent",
            Self::Done => "done",
        }
    }
}

/// Whole days between placing an egg and `today`.
pub fn age_in_days(start: NaiveDate, today: NaiveDate) -> i64 {
    (today - start).num_days()
}

/// Expected hatch date for an egg placed on `start`.
pub fn hatch_date(start: NaiveDate) -> NaiveDate {
    start
        .checked_add_days(Days::new(INCUBATION_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// What the renderer shows for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotView {
    pub slot: SlotIndex,
    pub stage: Stage,
    /// `None` for an empty slot.
    pub age_days: Option<i64>,
    /// `None` for an empty slot.
    pub hatch_date: Option<NaiveDate>,
}

impl SlotView {
    pub fn new(slot: SlotIndex, start: Option<NaiveDate>, today: NaiveDate) -> Self {
        match start {
            None => Self {
                slot,
                stage: Stage::Empty,
                age_days: None,
                hatch_date: None,
            },
            Some(start) => {
                let age = age_in_days(start, today);
                Self {
                    slot,
                    stage: Stage::for_age(age),
                    age_days: Some(age),
                    hatch_date: Some(hatch_date(start)),
                }
            }
        }
    }
}

/// Views for every slot of `state`, in display order.
pub fn slot_views(state: &IncubatorState, today: NaiveDate) -> Vec<SlotView> {
    state
        .iter()
        .map(|(slot, start)| SlotView::new(slot, start, today))
        .collect()
}
