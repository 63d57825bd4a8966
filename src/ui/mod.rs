//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the engine's signals and per-stop params and turns
//! them into cells on the terminal.  No animation math happens here beyond
//! mapping layout units onto rows and columns.

pub mod itinerary;
pub mod layout;
pub mod popup;
pub mod progress;
pub mod smooth_scroll;
pub mod theme;
