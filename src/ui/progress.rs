//! Progress dots, one per stop, the active one highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Widget},
};

use super::theme::Theme;

pub struct ProgressDots {
    pub count: usize,
    pub active: usize,
}

impl Widget for ProgressDots {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default().style(Theme::page_style()).render(area, buf);
        for (i, rect) in dot_rects(area, self.count).into_iter().enumerate() {
            let span = if i == self.active {
                Span::styled("●", Theme::active_dot_style())
            } else {
                Span::styled("•", Theme::dot_style())
            };
            let line = Line::from(span).centered();
            line.render(rect, buf);
        }
    }
}

/// One-row rectangle per dot, centred vertically in `area`.  Dots that
/// don't fit are dropped from the end.
pub fn dot_rects(area: Rect, count: usize) -> Vec<Rect> {
    let shown = count.min(area.height as usize) as u16;
    let top = area.y + (area.height - shown) / 2;
    (0..shown)
        .map(|i| Rect::new(area.x, top + i, area.width, 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_are_centred() {
        let rects = dot_rects(Rect::new(70, 3, 4, 23), 13);
        assert_eq!(rects.len(), 13);
        assert_eq!(rects[0].y, 3 + 5);
        assert_eq!(rects[12].y, 3 + 5 + 12);
    }

    #[test]
    fn short_area_drops_trailing_dots() {
        assert_eq!(dot_rects(Rect::new(0, 0, 4, 5), 13).len(), 5);
    }

    #[test]
    fn active_dot_is_highlighted() {
        let area = Rect::new(0, 0, 3, 13);
        let mut buf = Buffer::empty(area);
        ProgressDots { count: 13, active: 4 }.render(area, &mut buf);
        assert_eq!(buf[(1, 4)].symbol(), "●");
        assert_eq!(buf[(1, 5)].symbol(), "•");
    }
}
