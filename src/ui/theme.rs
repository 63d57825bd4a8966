//! Colour palette and text styles used across the UI.
//!
//! Every colour is RGB so [`fade`] can blend it toward the background.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    pub const BACKGROUND: Color = Color::Rgb(0, 0, 0);
    pub const TEXT: Color = Color::Rgb(255, 255, 255);
    pub const MUTED: Color = Color::Rgb(179, 179, 179);
    pub const SURFACE: Color = Color::Rgb(26, 26, 26);
    pub const INTRO_SURFACE: Color = Color::Rgb(13, 13, 13);
    pub const GOLD: Color = Color::Rgb(212, 175, 55);
    pub const GOLD_SURFACE: Color = Color::Rgb(38, 32, 0);
    pub const LINK: Color = Color::Rgb(10, 126, 164);
    pub const FOOTER_SURFACE: Color = Color::Rgb(8, 23, 8);
    pub const DOT: Color = Color::Rgb(77, 77, 77);

    // ── header ─────────────────────────────────────────────────
    pub fn title_style() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::BACKGROUND)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle_style() -> Style {
        Style::default().fg(Self::MUTED).bg(Self::BACKGROUND)
    }

    // ── itinerary ──────────────────────────────────────────────
    pub fn page_style() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    pub fn intro_style() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::INTRO_SURFACE)
    }

    pub fn badge_style() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::SURFACE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_style() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::SURFACE)
    }

    pub fn card_border_style() -> Style {
        Style::default().fg(Self::DOT).bg(Self::SURFACE)
    }

    pub fn venue_name_style() -> Style {
        Self::card_style().add_modifier(Modifier::BOLD)
    }

    pub fn feature_style() -> Style {
        Style::default()
            .fg(Self::GOLD)
            .bg(Self::GOLD_SURFACE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn image_ref_style() -> Style {
        Style::default().fg(Self::MUTED).bg(Self::SURFACE)
    }

    pub fn link_style() -> Style {
        Style::default()
            .fg(Self::LINK)
            .bg(Self::SURFACE)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn footer_style() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::FOOTER_SURFACE)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn dot_style() -> Style {
        Style::default().fg(Self::DOT).bg(Self::BACKGROUND)
    }

    pub fn active_dot_style() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::BACKGROUND)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}

/// Blend `color` toward the page background by `1 - opacity`.
/// Non-RGB colours are returned unchanged.
pub fn fade(color: Color, opacity: f64) -> Color {
    let Color::Rgb(r, g, b) = color else {
        return color;
    };
    let Color::Rgb(br, bg, bb) = Theme::BACKGROUND else {
        return color;
    };
    let a = opacity.clamp(0.0, 1.0);
    let mix = |c: u8, base: u8| (base as f64 + (c as f64 - base as f64) * a).round() as u8;
    Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_blends_toward_background() {
        assert_eq!(fade(Theme::TEXT, 1.0), Theme::TEXT);
        assert_eq!(fade(Theme::TEXT, 0.0), Theme::BACKGROUND);
        assert_eq!(fade(Color::Rgb(200, 100, 0), 0.5), Color::Rgb(100, 50, 0));
        assert_eq!(fade(Color::Reset, 0.3), Color::Reset);
    }
}
