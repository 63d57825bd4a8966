//! Fixed tuning knobs for the itinerary animation and its terminal mapping.
//!
//! Everything here is in layout units (the scroll container's pixels)
//! unless the name says otherwise.

use std::time::Duration;

// Itinerary geometry
pub const ITEM_HEIGHT: f64 = 600.0;
pub const INTRO_HEIGHT: f64 = 350.0;
pub const FOOTER_HEIGHT: f64 = 300.0;

// Signal timing
pub const VERTICAL_DELAY: Duration = Duration::from_millis(500);
pub const INDEX_POLL_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_FRAME_TICK_MS: u64 = 16;

// Horizontal entrance (driven by the immediate signal)
pub const ENTRY_OFFSET_X: f64 = 300.0;
pub const OPACITY_STOPS: [f64; 3] = [0.0, 1.0, 0.3];

// Vertical drift (driven by the damped signal)
pub const DRIFT_STOPS: [f64; 3] = [0.0, -50.0, -150.0];

// Layout units → terminal cells
pub const UNITS_PER_ROW: f64 = 50.0;
pub const UNITS_PER_COL: f64 = 10.0;

// Chrome
pub const BADGE_COLUMN_WIDTH: u16 = 10;
pub const PROGRESS_COLUMN_WIDTH: u16 = 4;
pub const DEFAULT_COMPACT_WIDTH: u16 = 60;
pub const DEFAULT_SCROLL_STEP: f64 = 100.0;
