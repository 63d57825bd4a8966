//! Viewport glide with exponential ease-out.
//!
//! Input (keys, wheel, clicks) only moves the *target*.  Each frame the
//! position closes a fixed fraction of the remaining distance, so one key
//! press becomes a short stream of scroll samples, the way a touch scroll
//! view reports a fling.

use crate::constants::UNITS_PER_ROW;

/// Scroll position animator, in layout units.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    position: f64,
    target: f64,
    /// Largest reachable offset (content height − viewport height).
    max: f64,
    /// Fraction of the remaining distance covered per tick.
    /// Good range: 0.2–0.4 at 60 fps.
    speed: f64,
}

impl SmoothScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            position: 0.0,
            target: 0.0,
            max: 0.0,
            speed: speed.clamp(0.05, 1.0),
        }
    }

    /// Update the scrollable extent, pulling target and position back in.
    pub fn set_max(&mut self, max: f64) {
        self.max = max.max(0.0);
        self.target = self.target.clamp(0.0, self.max);
        if self.position > self.max {
            self.position = self.max;
        }
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.target + delta);
    }

    pub fn scroll_to(&mut self, target: f64) {
        self.target = target.clamp(0.0, self.max);
    }

    /// Advance one frame.  Returns the new position when it moved.
    pub fn tick(&mut self) -> Option<f64> {
        let remaining = self.target - self.position;
        if remaining == 0.0 {
            return None;
        }
        // Snap once we're within a fifth of a row.
        if remaining.abs() < UNITS_PER_ROW / 5.0 {
            self.position = self.target;
        } else {
            self.position += remaining * self.speed;
        }
        Some(self.position)
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}
