//! Domain models for the incubator.
//!
//! # Core Concepts
//!
//! - [`IncubatorState`]: The eight slots, each empty or holding the day an egg
//!   was placed. Persisted as a whole on every mutation.
//! - [`SlotIndex`]: A validated position 0–7, shown to users as 1–8.
//! - [`Stage`]: How far along an egg is, derived from its age. Selects the
//!   display style of a slot.
//! - [`SlotView`]: Everything the renderer needs to draw one slot.

mod slot;
mod stage;

pub use slot::*;
pub use stage::*;
