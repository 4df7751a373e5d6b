//! Terminal front end for the egg incubator tracker.
//!
//! The slot rules and persistence live in [`incubator_core`]; this crate adds
//! configuration, the colored grid, auto-refresh and the interactive menu.

pub mod config;
pub mod menu;
pub mod refresh;
pub mod render;
pub mod session;
