use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::IncubatorError;

/// Number of slots in the incubator.
pub const SLOT_COUNT: usize = 8;

/// A position in the incubator.
///
/// Internally zero-based (0–7); users address slots as 1–8, which is also what
/// `Display` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// Build from a user-facing slot number (1–8).
    pub fn from_number(number: usize) -> Result<Self, IncubatorError> {
        if (1..=SLOT_COUNT).contains(&number) {
            Ok(Self(number - 1))
        } else {
            Err(IncubatorError::InvalidSlot(number.to_string()))
        }
    }

    /// Build from a zero-based position.
    pub fn from_position(position: usize) -> Option<Self> {
        (position < SLOT_COUNT).then_some(Self(position))
    }

    /// Zero-based position.
    pub fn position(self) -> usize {
        self.0
    }

    /// One-based slot number, as shown to users.
    pub fn number(self) -> usize {
        self.0 + 1
    }

    /// All slots in display order.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..SLOT_COUNT).map(Self)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for SlotIndex {
    type Err = IncubatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number: usize = trimmed
            .parse()
            .map_err(|_| IncubatorError::InvalidSlot(trimmed.to_string()))?;
        Self::from_number(number)
    }
}

/// The full incubator: exactly eight slots, each empty or holding the date an
/// egg was placed.
///
/// Serializes as a JSON array of eight `"YYYY-MM-DD"` strings or `null`s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncubatorState {
    slots: [Option<NaiveDate>; SLOT_COUNT],
}

impl IncubatorState {
    pub fn new(slots: [Option<NaiveDate>; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    pub fn get(&self, slot: SlotIndex) -> Option<NaiveDate> {
        self.slots[slot.position()]
    }

    pub fn is_occupied(&self, slot: SlotIndex) -> bool {
        self.get(slot).is_some()
    }

    /// Place an egg. Returns `false` without changing anything if the slot is
    /// already occupied.
    pub fn place(&mut self, slot: SlotIndex, date: NaiveDate) -> bool {
        let entry = &mut self.slots[slot.position()];
        if entry.is_some() {
            return false;
        }
        *entry = Some(date);
        true
    }

    /// Empty a slot, returning the date it held.
    pub fn clear(&mut self, slot: SlotIndex) -> Option<NaiveDate> {
        self.slots[slot.position()].take()
    }

    /// Slots paired with their contents, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, Option<NaiveDate>)> + '_ {
        SlotIndex::all().map(move |slot| (slot, self.get(slot)))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn as_array(&self) -> &[Option<NaiveDate>; SLOT_COUNT] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn slot_numbers_map_to_positions() {
        let slot = SlotIndex::from_number(1).unwrap();
        assert_eq!(slot.position(), 0);
        assert_eq!(SlotIndex::from_number(8).unwrap().position(), 7);
        assert_eq!(slot.to_string(), "1");
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        assert!(matches!(
            SlotIndex::from_number(0),
            Err(IncubatorError::InvalidSlot(_))
        ));
        assert!(matches!(
            SlotIndex::from_number(9),
            Err(IncubatorError::InvalidSlot(_))
        ));
        assert!(SlotIndex::from_position(8).is_none());
    }

    #[test]
    fn parses_slot_from_text() {
        assert_eq!("3".parse::<SlotIndex>().unwrap().position(), 2);
        assert_eq!(" 8 ".parse::<SlotIndex>().unwrap().number(), 8);
        assert!("abc".parse::<SlotIndex>().is_err());
        assert!("-1".parse::<SlotIndex>().is_err());
        assert!("".parse::<SlotIndex>().is_err());
    }

    #[test]
    fn place_refuses_occupied_slot() {
        let slot = SlotIndex::from_number(2).unwrap();
        let mut state = IncubatorState::default();

        assert!(state.place(slot, date(2024, 3, 5)));
        assert!(!state.place(slot, date(2024, 3, 6)));
        assert_eq!(state.get(slot), Some(date(2024, 3, 5)));
    }

    #[test]
    fn clear_returns_previous_date() {
        let slot = SlotIndex::from_number(4).unwrap();
        let mut state = IncubatorState::default();
        state.place(slot, date(2024, 3, 5));

        assert_eq!(state.clear(slot), Some(date(2024, 3, 5)));
        assert_eq!(state.clear(slot), None);
        assert_eq!(state, IncubatorState::default());
    }

    #[test]
    fn serializes_as_eight_element_array() {
        let mut state = IncubatorState::default();
        state.place(SlotIndex::from_number(2).unwrap(), date(2024, 3, 5));

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"[null,"2024-03-05",null,null,null,null,null,null]"#);
    }

    #[test]
    fn rejects_wrong_length_array() {
        let result = serde_json::from_str::<IncubatorState>(r#"[null,null,null]"#);
        assert!(result.is_err());
    }
}
