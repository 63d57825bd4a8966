//! User configuration — keybindings, scroll feel and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/pub-crawl/config.toml` (default `~/.config/pub-crawl/config.toml`).
//! Animation curves are deliberately absent: they live in [`crate::constants`].

use std::collections::HashMap;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::constants::{DEFAULT_COMPACT_WIDTH, DEFAULT_SCROLL_STEP};

// ───────────────────────────────────────── errors ────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not write config to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions on the itinerary screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    PrevStop,
    NextStop,
    Top,
    Bottom,
    OpenLink,
    ToggleHelp,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the help popup).
    pub const ALL: &[Action] = &[
        Action::ScrollUp,
        Action::ScrollDown,
        Action::PageUp,
        Action::PageDown,
        Action::PrevStop,
        Action::NextStop,
        Action::Top,
        Action::Bottom,
        Action::OpenLink,
        Action::ToggleHelp,
        Action::Quit,
    ];

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::ScrollUp => "Scroll Up",
            Action::ScrollDown => "Scroll Down",
            Action::PageUp => "Page Up",
            Action::PageDown => "Page Down",
            Action::PrevStop => "Previous Stop",
            Action::NextStop => "Next Stop",
            Action::Top => "Back to Start",
            Action::Bottom => "Skip to End",
            Action::OpenLink => "Visit Website",
            Action::ToggleHelp => "Show Controls",
            Action::Quit => "Quit",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::PageUp => "page_up",
            Action::PageDown => "page_down",
            Action::PrevStop => "prev_stop",
            Action::NextStop => "next_stop",
            Action::Top => "top",
            Action::Bottom => "bottom",
            Action::OpenLink => "open_link",
            Action::ToggleHelp => "toggle_help",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding: key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    fn modifier_prefix(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s
    }

    /// User-friendly display string (e.g. `"↓"`, `"Ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::PageUp => "PgUp".into(),
            KeyCode::PageDown => "PgDn".into(),
            _ => self.key_name(),
        };
        format!("{}{key}", self.modifier_prefix())
    }

    /// Serialise to config-file format (e.g. `"Down"`, `"Ctrl+c"`, `"q"`).
    fn to_config_string(&self) -> String {
        format!("{}{}", self.modifier_prefix(), self.key_name())
    }

    fn key_name(&self) -> String {
        match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Left => "Left".into(),
            KeyCode::Right => "Right".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        }
    }

    /// Parse a key string like `"Ctrl+c"`, `"Shift+Down"`, `"q"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => {
                let n: u8 = k[1..].parse().ok()?;
                KeyCode::F(n)
            }
            // Single characters keep their case (`G` vs `g`).
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration: keybindings and scroll feel.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Layout units moved per scroll key press or wheel notch.
    pub scroll_step: f64,
    /// Ring the terminal bell as tactile feedback when opening a link.
    pub haptics: bool,
    /// Terminal width (columns) below which the compact, static layout is used.
    pub compact_width: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            scroll_step: DEFAULT_SCROLL_STEP,
            haptics: true,
            compact_width: DEFAULT_COMPACT_WIDTH,
        }
    }
}

impl AppConfig {
    /// Hard-coded default keybindings.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;
        let mut m = HashMap::new();

        m.insert(ScrollUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(ScrollDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(Action::PageUp, vec![KeyBind::new(KeyCode::PageUp, n)]);
        m.insert(
            Action::PageDown,
            vec![KeyBind::new(KeyCode::PageDown, n), KeyBind::new(Char(' '), n)],
        );
        m.insert(PrevStop, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(NextStop, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(Top, vec![KeyBind::new(Home, n), KeyBind::new(Char('g'), n)]);
        m.insert(
            Bottom,
            vec![KeyBind::new(End, n), KeyBind::new(Char('G'), shift)],
        );
        m.insert(OpenLink, vec![KeyBind::new(Enter, n), KeyBind::new(Char('o'), n)]);
        m.insert(ToggleHelp, vec![KeyBind::new(Char('?'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Format the binding list for a given action (e.g. `"↓/j"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(|b| b.display()).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: scroll | {}/{}: stops | {}: visit website | {}: controls | {}: quit",
            self.short_binding(Action::ScrollUp),
            self.short_binding(Action::ScrollDown),
            self.short_binding(Action::PrevStop),
            self.short_binding(Action::NextStop),
            self.short_binding(Action::OpenLink),
            self.short_binding(Action::ToggleHelp),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Self::parse(&contents)
            }
            Err(_) => Self::default(),
        }
    }

    /// Persist current config to disk, returning where it was written.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = config_path();
        let write = |path: &PathBuf| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, self.serialise())
        };
        write(&path).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Lenient line-by-line parse.  Bad lines are logged and skipped.
    fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                tracing::warn!(line, "ignoring config line without '='");
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "scroll_step" => {
                    match value.parse::<f64>() {
                        Ok(v) if v.is_finite() && v > 0.0 => config.scroll_step = v.min(1200.0),
                        _ => tracing::warn!(value, "invalid scroll_step"),
                    }
                    continue;
                }
                "haptics" => {
                    config.haptics = value == "true";
                    continue;
                }
                "compact_width" => {
                    match value.parse::<u16>() {
                        Ok(v) => config.compact_width = v.clamp(20, 400),
                        Err(_) => tracing::warn!(value, "invalid compact_width"),
                    }
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::warn!(key, "unknown config key");
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# pub-crawl configuration".to_string(),
            String::new(),
            "# Scroll feel".to_string(),
            format!("scroll_step = {}", self.scroll_step),
            format!("haptics = {}", self.haptics),
            format!("compact_width = {}", self.compact_width),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab,".to_string(),
            "#   Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/pub-crawl/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join(env!("CARGO_PKG_NAME")).join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(c: &AppConfig, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        c.match_key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn defaults_match_expected_actions() {
        let c = AppConfig::default();
        let none = KeyModifiers::NONE;
        assert_eq!(hit(&c, KeyCode::Char('j'), none), Some(Action::ScrollDown));
        assert_eq!(hit(&c, KeyCode::Enter, none), Some(Action::OpenLink));
        assert_eq!(hit(&c, KeyCode::PageUp, none), Some(Action::PageUp));
        assert_eq!(hit(&c, KeyCode::PageDown, none), Some(Action::PageDown));
        assert_eq!(hit(&c, KeyCode::Char(' '), none), Some(Action::PageDown));
        assert_eq!(hit(&c, KeyCode::Char('G'), KeyModifiers::SHIFT), Some(Action::Bottom));
        assert_eq!(hit(&c, KeyCode::Char('x'), none), None);
    }

    #[test]
    fn parse_overrides_and_ignores_garbage() {
        let c = AppConfig::parse(
            "# comment\n\
             scroll_step = 250\n\
             haptics = false\n\
             compact_width = 5\n\
             next_stop = n, Ctrl+Right\n\
             nonsense = q\n\
             no equals sign here\n",
        );
        assert_eq!(c.scroll_step, 250.0);
        assert!(!c.haptics);
        assert_eq!(c.compact_width, 20);
        let none = KeyModifiers::NONE;
        assert_eq!(hit(&c, KeyCode::Char('n'), none), Some(Action::NextStop));
        assert_eq!(hit(&c, KeyCode::Right, KeyModifiers::CONTROL), Some(Action::NextStop));
        // Untouched actions keep their defaults.
        assert_eq!(hit(&c, KeyCode::Char('q'), none), Some(Action::Quit));
    }

    #[test]
    fn bad_scroll_step_keeps_default() {
        let c = AppConfig::parse("scroll_step = -3\n");
        assert_eq!(c.scroll_step, DEFAULT_SCROLL_STEP);
    }

    #[test]
    fn serialised_config_parses_back_to_same_bindings() {
        let mut c = AppConfig::default();
        c.scroll_step = 75.0;
        c.haptics = false;
        let back = AppConfig::parse(&c.serialise());
        assert_eq!(back.scroll_step, 75.0);
        assert!(!back.haptics);
        for action in Action::ALL {
            assert_eq!(back.bindings.get(action), c.bindings.get(action), "{action:?}");
        }
    }

    #[test]
    fn display_uses_arrows() {
        let c = AppConfig::default();
        assert_eq!(c.display_bindings(Action::ScrollDown), "↓/j");
    }
}
