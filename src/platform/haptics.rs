//! Tactile feedback.  A terminal has no vibration motor, so the bell
//! stands in for the stronger intensity.

use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Light,
    Medium,
}

pub trait Haptics {
    fn vibrate(&mut self, intensity: Intensity);
}

/// Rings the bell on the given writer for `Medium` pulses.
pub struct TerminalBell<W: Write> {
    out: W,
    enabled: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }
}

impl<W: Write> Haptics for TerminalBell<W> {
    fn vibrate(&mut self, intensity: Intensity) {
        if !self.enabled || intensity == Intensity::Light {
            return;
        }
        // Best effort; a failed bell is not worth surfacing.
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            tracing::debug!("bell failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_rings_for_medium_only_when_enabled() {
        let mut bell = TerminalBell::new(Vec::new(), true);
        bell.vibrate(Intensity::Light);
        bell.vibrate(Intensity::Medium);
        assert_eq!(bell.out, b"\x07");

        let mut quiet = TerminalBell::new(Vec::new(), false);
        quiet.vibrate(Intensity::Medium);
        assert!(quiet.out.is_empty());
    }
}
