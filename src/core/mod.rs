//! Core engine – content table, clamped interpolation, scroll signals,
//! active-stop tracking and per-stop animation.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Time is passed in by the caller; no timers live here.

pub mod animator;
pub mod interpolate;
pub mod signal;
pub mod tracker;
pub mod venues;
