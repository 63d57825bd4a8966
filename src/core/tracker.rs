//! Active-stop tracking for the progress indicator.
//!
//! The tracker is ticked on a fixed cadence rather than on every scroll
//! sample.  It only publishes when the candidate index changes and lies
//! inside the table; out-of-range candidates leave the last valid index.

use tokio::sync::watch;

pub struct IndexTracker {
    item_height: f64,
    record_count: usize,
    tx: watch::Sender<usize>,
    stopped: bool,
}

impl IndexTracker {
    pub fn new(item_height: f64, record_count: usize) -> Self {
        let (tx, _) = watch::channel(0);
        Self {
            item_height,
            record_count,
            tx,
            stopped: false,
        }
    }

    /// A receiver that observes every published active index.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.tx.subscribe()
    }

    pub fn active(&self) -> usize {
        *self.tx.borrow()
    }

    /// One timer tick.  Returns the new index when it changed.
    pub fn tick(&mut self, immediate: f64) -> Option<usize> {
        if self.stopped || self.item_height <= 0.0 {
            return None;
        }
        let candidate = (immediate / self.item_height).floor();
        if !(candidate >= 0.0 && candidate < self.record_count as f64) {
            return None;
        }
        let candidate = candidate as usize;
        if candidate == self.active() {
            return None;
        }
        self.tx.send_replace(candidate);
        tracing::debug!(active = candidate, immediate, "active stop changed");
        Some(candidate)
    }

    /// Teardown: later ticks are ignored.
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_offset_into_index() {
        let mut t = IndexTracker::new(600.0, 13);
        assert_eq!(t.tick(650.0), Some(1));
        assert_eq!(t.tick(5999.0), Some(9));
        assert_eq!(t.active(), 9);
    }

    #[test]
    fn unchanged_candidate_is_a_noop() {
        let mut t = IndexTracker::new(600.0, 13);
        assert_eq!(t.tick(10.0), None);
        assert_eq!(t.tick(1250.0), Some(2));
        assert_eq!(t.tick(1300.0), None);
    }

    #[test]
    fn out_of_range_holds_last_valid_index() {
        let mut t = IndexTracker::new(600.0, 13);
        t.tick(7300.0);
        assert_eq!(t.active(), 12);
        assert_eq!(t.tick(50_000.0), None);
        assert_eq!(t.active(), 12);
        assert_eq!(t.tick(-700.0), None);
        assert_eq!(t.active(), 12);
    }

    #[test]
    fn subscribers_see_published_index() {
        let mut t = IndexTracker::new(600.0, 13);
        let mut rx = t.subscribe();
        assert_eq!(*rx.borrow(), 0);
        t.tick(2400.0);
        assert!(rx.has_changed().unwrap_or(false));
        assert_eq!(*rx.borrow_and_update(), 4);
    }

    #[test]
    fn stopped_tracker_ignores_ticks() {
        let mut t = IndexTracker::new(600.0, 13);
        t.stop();
        assert_eq!(t.tick(1200.0), None);
        assert_eq!(t.active(), 0);
    }

    #[test]
    fn linear_scan_visits_every_stop_in_order() {
        let mut t = IndexTracker::new(600.0, 13);
        let mut visited = vec![t.active()];
        // 50 ticks per item: ticks are far more frequent than item changes.
        let steps = 13 * 50;
        for step in 0..=steps {
            let offset = 7800.0 * step as f64 / steps as f64;
            if let Some(i) = t.tick(offset) {
                assert_eq!(i, visited[visited.len() - 1] + 1);
                visited.push(i);
            }
        }
        assert_eq!(visited, (0..13).collect::<Vec<_>>());
    }
}
