//! Input handling: maps key/mouse events to state mutations.
//!
//! Input never touches the scroll signals directly: it only moves the
//! viewport's glide target, and the frame loop turns that into samples.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;
use crate::constants::ITEM_HEIGHT;
use crate::platform::haptics::Intensity;
use crate::ui::layout::{rows_to_units, stop_offset};
use crate::ui::progress::dot_rects;

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of overlay.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    // While the controls overlay is open, any bound key just closes it.
    if state.show_help {
        state.show_help = false;
        if matches!(action, Action::Quit | Action::ToggleHelp) {
            return;
        }
    }

    state.status_message = None;
    let step = state.config.scroll_step;
    let page = (rows_to_units(state.viewport_rows) - step).max(step);

    match action {
        Action::Quit => state.should_quit = true,
        Action::ToggleHelp => state.show_help = true,
        Action::ScrollUp => state.scroll.scroll_by(-step),
        Action::ScrollDown => state.scroll.scroll_by(step),
        Action::PageUp => state.scroll.scroll_by(-page),
        Action::PageDown => state.scroll.scroll_by(page),
        Action::Top => state.scroll.scroll_to(0.0),
        Action::Bottom => {
            let max = state.scroll.max();
            state.scroll.scroll_to(max);
        }
        Action::NextStop => {
            let next = next_stop(state.scroll.target(), state.venues.len());
            state.scroll.scroll_to(stop_offset(next));
        }
        Action::PrevStop => {
            let prev = prev_stop(state.scroll.target());
            state.scroll.scroll_to(stop_offset(prev));
        }
        Action::OpenLink => {
            let active = state.active_index();
            open_link(state, active);
        }
    }
}

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let step = state.config.scroll_step;
    match mouse.kind {
        MouseEventKind::ScrollDown => state.scroll.scroll_by(step),
        MouseEventKind::ScrollUp => state.scroll.scroll_by(-step),
        MouseEventKind::Down(MouseButton::Left) => {
            if state.show_help {
                state.show_help = false;
                return;
            }
            let (col, row) = (mouse.column, mouse.row);

            if let Some(area) = state.progress_area {
                let hit = dot_rects(area, state.venues.len())
                    .iter()
                    .position(|r| point_in_rect(*r, col, row));
                if let Some(index) = hit {
                    state.haptics.vibrate(Intensity::Light);
                    state.scroll.scroll_to(stop_offset(index));
                    return;
                }
            }

            let hit = state
                .card_zones
                .iter()
                .find(|z| point_in_rect(z.rect, col, row))
                .map(|z| z.index);
            if let Some(index) = hit {
                open_link(state, index);
            }
        }
        _ => {}
    }
}

/// Hand a stop's link to the system opener, with a haptic pulse first.
/// Failures end up in the status bar and the log, nowhere else.
fn open_link(state: &mut AppState, index: usize) {
    let Some(venue) = state.venues.get(index) else {
        return;
    };
    state.haptics.vibrate(Intensity::Medium);
    match state.links.open_url(venue.link_url) {
        Ok(()) => {
            tracing::debug!(venue = venue.name, url = venue.link_url, "opened link");
            state.status_message = Some(format!("Opening {} in your browser…", venue.name));
        }
        Err(e) => {
            tracing::warn!(venue = venue.name, "could not open link: {e}");
            state.status_message = Some(format!("Could not open {}: {e}", venue.name));
        }
    }
}

/// Stop after the one `offset` is on or inside.
fn next_stop(offset: f64, count: usize) -> usize {
    let current = (offset / ITEM_HEIGHT).floor().max(0.0) as usize;
    (current + 1).min(count.saturating_sub(1))
}

/// The stop `offset` is inside, or the one before if already centred on it.
fn prev_stop(offset: f64) -> usize {
    let current = (offset / ITEM_HEIGHT).floor().max(0.0);
    if offset - current * ITEM_HEIGHT > 1.0 {
        current as usize
    } else {
        (current as usize).saturating_sub(1)
    }
}

fn point_in_rect(area: ratatui::layout::Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}
