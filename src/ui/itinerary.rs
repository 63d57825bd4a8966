//! The scrolling itinerary: intro, one row per stop (number badge + venue
//! card), and the closing footer.
//!
//! Each element is drawn into its own scratch buffer and then copied onto
//! the frame at its translated position, clipped to the itinerary area and
//! faded by its opacity.  That keeps partially off-screen and sliding
//! elements cheap and correct.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap},
};

use crate::constants::{
    BADGE_COLUMN_WIDTH, FOOTER_HEIGHT, INTRO_HEIGHT, ITEM_HEIGHT, UNITS_PER_ROW,
};
use crate::core::animator::StopParams;
use crate::core::venues::{VenueRecord, FOOTER_TEXT, FOOTER_TITLE, INTRO};

use super::layout::{stop_top, units_to_cols, units_to_rows};
use super::theme::{fade, Theme};

/// Rows per stop, including the one-row gap below the card.
const STOP_ROWS: u16 = (ITEM_HEIGHT / UNITS_PER_ROW) as u16;
const BADGE_WIDTH: u16 = 8;
const BADGE_HEIGHT: u16 = 3;

/// Where a stop's card ended up on screen, for click handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopHitZone {
    pub index: usize,
    pub rect: Rect,
}

/// The itinerary widget — created fresh each frame.
pub struct ItineraryWidget<'a> {
    venues: &'a [VenueRecord],
    stops: &'a [StopParams],
    offset: f64,
    compact: bool,
    local_images: bool,
}

impl<'a> ItineraryWidget<'a> {
    /// `stops` holds the params for the stops eligible this frame;
    /// `offset` is the immediate scroll offset.
    pub fn new(venues: &'a [VenueRecord], stops: &'a [StopParams], offset: f64) -> Self {
        Self {
            venues,
            stops,
            offset,
            compact: false,
            local_images: false,
        }
    }

    /// Stack badge above card instead of side by side.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn local_images(mut self, local: bool) -> Self {
        self.local_images = local;
        self
    }

    /// Render and return the on-screen card rectangles.
    pub fn render_and_hit(self, area: Rect, buf: &mut Buffer) -> Vec<StopHitZone> {
        Block::default().style(Theme::page_style()).render(area, buf);
        if area.width < 4 || area.height == 0 {
            return Vec::new();
        }

        let row_of = |units: f64| area.y as i32 + units_to_rows(units - self.offset);

        // ── intro ──────────────────────────────────────────────
        let intro_rows = (INTRO_HEIGHT / UNITS_PER_ROW) as u16 - 1;
        let intro = render_blurb(None, INTRO, area.width - 2, intro_rows, Theme::intro_style());
        blit(&intro, buf, area.x as i32 + 1, row_of(0.0), area, 1.0);

        // ── stops ──────────────────────────────────────────────
        let mut zones = Vec::new();
        for stop in self.stops {
            let Some(venue) = self.venues.get(stop.index) else {
                continue;
            };
            let top = row_of(stop_top(stop.index));

            let (badge, badge_x, badge_y, card_x, card_y, card_w, card_h) = if self.compact {
                let w = area.width - 2;
                (
                    render_compact_badge(venue.id, w),
                    area.x as i32 + 1,
                    top,
                    area.x as i32 + 1,
                    top + 1,
                    w,
                    STOP_ROWS - 2,
                )
            } else {
                let w = area.width.saturating_sub(BADGE_COLUMN_WIDTH + 1).max(1);
                (
                    render_badge(venue.id),
                    area.x as i32 + 1,
                    top + 1,
                    (area.x + BADGE_COLUMN_WIDTH) as i32,
                    top,
                    w,
                    STOP_ROWS - 1,
                )
            };

            let label = stop.label;
            blit(
                &badge,
                buf,
                badge_x + units_to_cols(label.translate_x),
                badge_y + units_to_rows(label.translate_y),
                area,
                label.opacity,
            );

            let detail = stop.detail;
            let card = render_card(venue, card_w, card_h, self.local_images);
            let shown = blit(
                &card,
                buf,
                card_x + units_to_cols(detail.translate_x),
                card_y + units_to_rows(detail.translate_y),
                area,
                detail.opacity,
            );
            if let Some(rect) = shown {
                zones.push(StopHitZone {
                    index: stop.index,
                    rect,
                });
            }
        }

        // ── footer ─────────────────────────────────────────────
        let footer_rows = (FOOTER_HEIGHT / UNITS_PER_ROW) as u16 - 1;
        let footer = render_blurb(
            Some(FOOTER_TITLE),
            FOOTER_TEXT,
            area.width - 2,
            footer_rows,
            Theme::footer_style(),
        );
        blit(
            &footer,
            buf,
            area.x as i32 + 1,
            row_of(stop_top(self.venues.len())),
            area,
            1.0,
        );

        zones
    }
}

impl Widget for ItineraryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_and_hit(area, buf);
    }
}

// ───────────────────────────────────────── elements ──────────

fn render_badge(id: u32) -> Buffer {
    let mut scratch = Buffer::empty(Rect::new(0, 0, BADGE_WIDTH, BADGE_HEIGHT));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::card_border_style())
        .style(Theme::badge_style());
    Paragraph::new(id.to_string())
        .alignment(Alignment::Center)
        .block(block)
        .render(scratch.area, &mut scratch);
    scratch
}

fn render_compact_badge(id: u32, width: u16) -> Buffer {
    let mut scratch = Buffer::empty(Rect::new(0, 0, width, 1));
    Paragraph::new(format!(" Stop {id} "))
        .style(Theme::badge_style())
        .render(scratch.area, &mut scratch);
    scratch
}

fn render_card(venue: &VenueRecord, width: u16, height: u16, local_images: bool) -> Buffer {
    let mut scratch = Buffer::empty(Rect::new(0, 0, width, height));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::card_border_style())
        .style(Theme::card_style())
        .padding(Padding::horizontal(1));
    let inner = block.inner(scratch.area);
    block.render(scratch.area, &mut scratch);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    let mut lines = vec![
        Line::styled(venue.name, Theme::venue_name_style()),
        Line::styled(venue.description, Theme::card_style()),
    ];
    if let Some(feature) = venue.highlighted_feature {
        lines.push(Line::styled(format!("✨ {feature}"), Theme::feature_style()));
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(parts[0], &mut scratch);

    let image = venue.image_ref(local_images).label();
    let footer = vec![
        Line::styled(
            ellipsize(&format!("▣ {image}"), parts[1].width as usize),
            Theme::image_ref_style(),
        ),
        Line::styled("↗ Visit Website", Theme::link_style()),
    ];
    Paragraph::new(footer).render(parts[1], &mut scratch);
    scratch
}

fn render_blurb(title: Option<&str>, text: &str, width: u16, height: u16, style: Style) -> Buffer {
    let mut scratch = Buffer::empty(Rect::new(0, 0, width, height));
    let mut lines = Vec::new();
    if let Some(title) = title {
        lines.push(Line::styled(title.to_string(), Theme::title_style().bg(Theme::FOOTER_SURFACE)));
    }
    lines.push(Line::raw(text.to_string()));
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(style)
        .block(Block::default().padding(Padding::uniform(1)).style(style))
        .render(scratch.area, &mut scratch);
    scratch
}

/// Copy `src` onto `dst` with its top-left corner at `(x, y)`, keeping
/// only cells inside `clip` and fading colours by `opacity`.
///
/// Returns the visible part of the copy, if any.
fn blit(src: &Buffer, dst: &mut Buffer, x: i32, y: i32, clip: Rect, opacity: f64) -> Option<Rect> {
    if opacity <= 0.0 {
        return None;
    }
    let left = x.max(clip.left() as i32);
    let top = y.max(clip.top() as i32);
    let right = (x + src.area.width as i32).min(clip.right() as i32);
    let bottom = (y + src.area.height as i32).min(clip.bottom() as i32);
    if left >= right || top >= bottom {
        return None;
    }

    for ty in top..bottom {
        for tx in left..right {
            let sx = (tx - x) as u16;
            let sy = (ty - y) as u16;
            let Some(cell) = dst.cell_mut((tx as u16, ty as u16)) else {
                continue;
            };
            *cell = src[(sx, sy)].clone();
            cell.fg = fade(cell.fg, opacity);
            cell.bg = fade(cell.bg, opacity);
        }
    }

    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

fn ellipsize(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animator::ParamsCache;
    use crate::core::venues::MANCHESTER_PUB_CRAWL;
    use crate::ui::layout::{eligible_stops, stop_offset};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn render_at(offset: f64, damped: f64, compact: bool) -> (Buffer, Vec<StopHitZone>) {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        let mut cache = ParamsCache::new();
        let stops = cache.get(offset, damped, eligible_stops(offset, area.height, 13), compact);
        let zones = ItineraryWidget::new(MANCHESTER_PUB_CRAWL, stops, offset)
            .compact(compact)
            .render_and_hit(area, &mut buf);
        (buf, zones)
    }

    #[test]
    fn centred_stop_is_drawn_in_place() {
        let offset = stop_offset(2);
        let (buf, zones) = render_at(offset, offset, false);
        let zone = zones.iter().find(|z| z.index == 2).copied();
        let zone = zone.expect("stop 2 visible");
        assert_eq!(zone.rect.x, BADGE_COLUMN_WIDTH);
        assert!(row_text(&buf, zone.rect.y + 1).contains("The Refuge"));
    }

    #[test]
    fn upcoming_stop_is_not_drawn_before_it_enters() {
        let offset = stop_offset(2);
        let (_, zones) = render_at(offset, offset, false);
        assert!(zones.iter().all(|z| z.index != 3));
    }

    #[test]
    fn intro_shows_at_top() {
        let (buf, _) = render_at(0.0, 0.0, false);
        let top: String = (0..4).map(|y| row_text(&buf, y)).collect();
        assert!(top.contains("Embark on an adventure"));
    }

    #[test]
    fn compact_mode_labels_stops_inline() {
        let (buf, _) = render_at(stop_offset(0), 0.0, true);
        let all: String = (0..30).map(|y| row_text(&buf, y)).collect();
        assert!(all.contains("Stop 1"));
    }

    #[test]
    fn blit_clips_and_reports_visible_rect() {
        let src = Buffer::empty(Rect::new(0, 0, 10, 4));
        let mut dst = Buffer::empty(Rect::new(0, 0, 20, 10));
        let clip = dst.area;
        assert_eq!(blit(&src, &mut dst, -3, 8, clip, 1.0), Some(Rect::new(0, 8, 7, 2)));
        assert_eq!(blit(&src, &mut dst, 25, 0, clip, 1.0), None);
        assert_eq!(blit(&src, &mut dst, 0, 0, clip, 0.0), None);
    }

    #[test]
    fn ellipsize_keeps_short_strings() {
        assert_eq!(ellipsize("wharf.jpeg", 20), "wharf.jpeg");
        assert_eq!(ellipsize("abcdefgh", 5), "abcd…");
    }
}
