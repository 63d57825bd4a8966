//! Layout helpers: split the terminal into regions and map the
//! itinerary's layout units onto rows.

use std::ops::Range;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{
    FOOTER_HEIGHT, INTRO_HEIGHT, ITEM_HEIGHT, PROGRESS_COLUMN_WIDTH, UNITS_PER_COL, UNITS_PER_ROW,
};

/// Primary screen layout: fixed header, scrolling itinerary, progress
/// column (hidden in compact mode) and a bottom status bar.
pub struct AppLayout {
    pub header_area: Rect,
    pub itinerary_area: Rect,
    pub progress_area: Option<Rect>,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect, compact: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(3),    // itinerary (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let (itinerary_area, progress_area) = if compact {
            (chunks[1], None)
        } else {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(10), Constraint::Length(PROGRESS_COLUMN_WIDTH)])
                .split(chunks[1]);
            (cols[0], Some(cols[1]))
        };

        Self {
            header_area: chunks[0],
            itinerary_area,
            progress_area,
            status_area: chunks[2],
        }
    }
}

// ───────────────────────────────────────── content geometry ──

/// Total scrollable height of the itinerary, in layout units.
pub fn content_height(stop_count: usize) -> f64 {
    INTRO_HEIGHT + stop_count as f64 * ITEM_HEIGHT + FOOTER_HEIGHT
}

/// Top edge of stop `index` in content coordinates.
pub fn stop_top(index: usize) -> f64 {
    INTRO_HEIGHT + index as f64 * ITEM_HEIGHT
}

/// Scroll offset at which stop `index` is centred: fully opaque, no slide.
pub fn stop_offset(index: usize) -> f64 {
    index as f64 * ITEM_HEIGHT
}

/// Largest scroll offset for a viewport of `rows` rows.
///
/// Never less than the last stop's centred offset: on tall viewports the
/// itinerary scrolls past the footer into blank space so the last stop
/// can still become active.
pub fn max_scroll(stop_count: usize, rows: u16) -> f64 {
    let last = stop_offset(stop_count.saturating_sub(1));
    (content_height(stop_count) - rows_to_units(rows)).max(last)
}

pub fn rows_to_units(rows: u16) -> f64 {
    rows as f64 * UNITS_PER_ROW
}

/// Layout units → whole rows (rounded toward the nearest row).
pub fn units_to_rows(units: f64) -> i32 {
    (units / UNITS_PER_ROW).round() as i32
}

/// Layout units → whole columns.
pub fn units_to_cols(units: f64) -> i32 {
    (units / UNITS_PER_COL).round() as i32
}

/// Stops worth animating for a viewport at `offset`: everything that
/// intersects the viewport, with one item of slack on each side for the
/// vertical drift.
pub fn eligible_stops(offset: f64, viewport_rows: u16, stop_count: usize) -> Range<usize> {
    let lo = offset - ITEM_HEIGHT - INTRO_HEIGHT;
    let hi = offset + rows_to_units(viewport_rows) + ITEM_HEIGHT - INTRO_HEIGHT;
    let first = (lo / ITEM_HEIGHT).floor().max(0.0) as usize;
    let last = ((hi / ITEM_HEIGHT).ceil().max(0.0) as usize).min(stop_count);
    first.min(last)..last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_scroll_never_negative() {
        assert_eq!(max_scroll(0, 500), 0.0);
        assert_eq!(max_scroll(13, 10), content_height(13) - 500.0);
    }

    #[test]
    fn max_scroll_reaches_last_stop_on_tall_viewports() {
        for rows in [10, 20, 23, 30, 46, 80, 200] {
            assert!(max_scroll(13, rows) >= stop_offset(12), "rows={rows}");
        }
        assert_eq!(max_scroll(13, 200), stop_offset(12));
    }

    #[test]
    fn eligible_covers_viewport_with_slack() {
        // 20 rows = 1000 units.  At offset 0 stops 0 and 1 are on screen.
        let r = eligible_stops(0.0, 20, 13);
        assert_eq!(r.start, 0);
        assert!(r.end >= 2 && r.end <= 4);

        let r = eligible_stops(stop_offset(6), 20, 13);
        assert!(r.contains(&5) && r.contains(&6) && r.contains(&7));
        assert!(!r.contains(&0));

        let r = eligible_stops(1e6, 20, 13);
        assert!(r.is_empty());
    }

    #[test]
    fn compact_layout_drops_progress_column() {
        let area = Rect::new(0, 0, 40, 30);
        assert!(AppLayout::from_area(area, true).progress_area.is_none());
        let wide = AppLayout::from_area(Rect::new(0, 0, 120, 30), false);
        assert_eq!(wide.progress_area.map(|r| r.width), Some(PROGRESS_COLUMN_WIDTH));
        assert_eq!(wide.header_area.height, 3);
        assert_eq!(wide.status_area.height, 1);
    }
}
