//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).
//! The scroll sampler is the only writer of the two scroll signals; the
//! tracker and the params cache only read them.

use std::time::Instant;

use ratatui::layout::Rect;
use tokio::sync::watch;

use crate::config::AppConfig;
use crate::constants::{ITEM_HEIGHT, VERTICAL_DELAY};
use crate::core::{
    animator::ParamsCache,
    signal::ScrollSampler,
    tracker::IndexTracker,
    venues::VenueRecord,
};
use crate::platform::{haptics::Haptics, link::LinkOpener};
use crate::ui::{itinerary::StopHitZone, layout, smooth_scroll::SmoothScroll};

/// Fraction of the remaining glide distance covered per frame.
const GLIDE_SPEED: f64 = 0.3;

/// Top-level application state.
pub struct AppState {
    /// The itinerary content.
    pub venues: &'static [VenueRecord],
    /// User-configurable keybindings and scroll feel.
    pub config: AppConfig,
    /// Viewport glide; its position is the raw scroll offset.
    pub scroll: SmoothScroll,
    /// Immediate and damped scroll signals.
    pub sampler: ScrollSampler,
    /// Publishes the active stop on a fixed cadence.
    pub tracker: IndexTracker,
    /// Progress indicator's view of the active stop.
    pub active_rx: watch::Receiver<usize>,
    /// Memoised per-stop visual params.
    pub params: ParamsCache,
    /// Itinerary viewport, in rows.
    pub viewport_rows: u16,
    /// Stack badges above cards and disable transforms.
    pub compact: bool,
    /// Show bundled image names instead of remote URLs.
    pub local_images: bool,
    /// Controls overlay visible.
    pub show_help: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Card rectangles from the last draw, for click handling.
    pub card_zones: Vec<StopHitZone>,
    /// Progress column from the last draw, if shown.
    pub progress_area: Option<Rect>,
    pub links: Box<dyn LinkOpener>,
    pub haptics: Box<dyn Haptics>,
}

impl AppState {
    pub fn new(
        venues: &'static [VenueRecord],
        config: AppConfig,
        links: Box<dyn LinkOpener>,
        haptics: Box<dyn Haptics>,
    ) -> Self {
        let tracker = IndexTracker::new(ITEM_HEIGHT, venues.len());
        let active_rx = tracker.subscribe();
        Self {
            venues,
            config,
            scroll: SmoothScroll::new(GLIDE_SPEED),
            sampler: ScrollSampler::new(VERTICAL_DELAY),
            tracker,
            active_rx,
            params: ParamsCache::new(),
            viewport_rows: 0,
            compact: false,
            local_images: false,
            show_help: false,
            status_message: None,
            should_quit: false,
            card_zones: Vec::new(),
            progress_area: None,
            links,
            haptics,
        }
    }

    /// Record the itinerary viewport size and the full terminal width.
    pub fn set_viewport(&mut self, rows: u16, terminal_width: u16) {
        self.viewport_rows = rows;
        self.compact = terminal_width < self.config.compact_width;
        self.scroll.set_max(layout::max_scroll(self.venues.len(), rows));
    }

    /// One animation frame: glide the viewport, feed the resulting offset
    /// to the sampler, then advance the damped signal.
    pub fn frame(&mut self, now: Instant) {
        if let Some(offset) = self.scroll.tick() {
            self.sampler.on_scroll_sample(offset, now);
        }
        self.sampler.advance(now);
    }

    /// One index-tracker tick.
    pub fn poll_index(&mut self) {
        self.tracker.tick(self.sampler.immediate());
    }

    /// Stop currently in focus, as last published by the tracker.
    pub fn active_index(&self) -> usize {
        *self.active_rx.borrow()
    }

    /// Screen teardown: cancel the in-flight damped transition and the tracker.
    pub fn unmount(&mut self) {
        self.sampler.teardown();
        self.tracker.stop();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::venues::MANCHESTER_PUB_CRAWL;
    use crate::platform::{haptics::Intensity, link::LinkError};
    use crate::ui::layout::stop_offset;

    /// Records every URL instead of launching anything.
    #[derive(Default)]
    pub struct RecordingOpener {
        pub opened: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
        pub fail: bool,
    }

    impl LinkOpener for RecordingOpener {
        fn open_url(&mut self, url: &str) -> Result<(), LinkError> {
            if self.fail {
                return Err(LinkError::UnsupportedScheme(url.to_string()));
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct CountingHaptics {
        pub pulses: std::rc::Rc<std::cell::Cell<u32>>,
    }

    impl Haptics for CountingHaptics {
        fn vibrate(&mut self, _intensity: Intensity) {
            self.pulses.set(self.pulses.get() + 1);
        }
    }

    pub fn test_state() -> AppState {
        let mut state = AppState::new(
            MANCHESTER_PUB_CRAWL,
            AppConfig::default(),
            Box::new(RecordingOpener::default()),
            Box::new(CountingHaptics::default()),
        );
        state.set_viewport(30, 120);
        state
    }

    /// Run frames until the viewport and damped signal both settle.
    pub fn settle(state: &mut AppState, start: Instant) -> Instant {
        let mut now = start;
        for _ in 0..200 {
            now += Duration::from_millis(16);
            state.frame(now);
        }
        now
    }

    #[test]
    fn frame_feeds_glide_into_signals() {
        let mut state = test_state();
        state.scroll.scroll_to(1200.0);
        let t0 = Instant::now();
        state.frame(t0);
        let first = state.sampler.immediate();
        assert!(first > 0.0 && first < 1200.0);
        // The damped signal has only just been retargeted.
        assert!(state.sampler.damped() < first);

        settle(&mut state, t0);
        assert_eq!(state.sampler.immediate(), 1200.0);
        assert_eq!(state.sampler.damped(), 1200.0);
    }

    #[test]
    fn poll_publishes_active_index() {
        let mut state = test_state();
        state.scroll.scroll_to(1900.0);
        settle(&mut state, Instant::now());
        state.poll_index();
        assert_eq!(state.active_index(), 3);
    }

    #[test]
    fn last_stop_becomes_active_on_any_viewport_height() {
        for rows in [20, 30, 46, 80] {
            let mut state = test_state();
            state.set_viewport(rows, 120);
            state.scroll.scroll_to(stop_offset(12));
            settle(&mut state, Instant::now());
            state.poll_index();
            assert_eq!(state.active_index(), 12, "rows={rows}");

            let immediate = state.sampler.immediate();
            let damped = state.sampler.damped();
            let last = state.params.get(immediate, damped, 12..13, false)[0];
            assert_eq!(last.detail.opacity, 1.0, "rows={rows}");
            assert_eq!(last.detail.translate_x, 0.0, "rows={rows}");
        }
    }

    #[test]
    fn scanning_the_itinerary_visits_every_stop_in_order() {
        for rows in [20, 46] {
            let mut state = test_state();
            state.set_viewport(rows, 120);
            let mut now = Instant::now();
            let mut visited = vec![state.active_index()];
            for step in 1..=78 {
                state.scroll.scroll_to(step as f64 * 100.0);
                now = settle(&mut state, now);
                state.poll_index();
                let active = state.active_index();
                if visited.last() != Some(&active) {
                    visited.push(active);
                }
            }
            assert_eq!(visited, (0..13).collect::<Vec<_>>(), "rows={rows}");
        }
    }

    #[test]
    fn narrow_terminal_is_compact() {
        let mut state = test_state();
        state.set_viewport(30, 40);
        assert!(state.compact);
        state.set_viewport(30, 100);
        assert!(!state.compact);
    }

    #[test]
    fn unmount_stops_tracker() {
        let mut state = test_state();
        state.unmount();
        state.scroll.scroll_to(3000.0);
        settle(&mut state, Instant::now());
        state.poll_index();
        assert_eq!(state.active_index(), 0);
    }
}
