pub mod colors;

pub use colors::{from_hex, parse_color};

use ratatui::style::Color;
use tailplot_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// Both palettes are pre-parsed at startup; the `b` keystroke flips between
/// them without touching the config. Calling [`Theme::from_config`] is
/// infallible — invalid colour strings fall back to the built-in palette.
#[derive(Debug, Clone)]
pub struct Theme {
    dark: bool,
    dark_raw: Color,
    dark_avg: Color,
    light_raw: Color,
    light_avg: Color,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            dark: cfg.dark,
            dark_raw:  parse_color(&cfg.dark_raw).unwrap_or(Color::Cyan),
            dark_avg:  parse_color(&cfg.dark_avg).unwrap_or(Color::Yellow),
            light_raw: parse_color(&cfg.light_raw).unwrap_or(Color::Blue),
            light_avg: parse_color(&cfg.light_avg).unwrap_or(Color::Red),
        }
    }

    /// Flip between the dark and light palettes.
    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Raw series colour for the active palette.
    pub fn raw(&self) -> Color {
        if self.dark { self.dark_raw } else { self.light_raw }
    }

    /// Average series colour for the active palette.
    pub fn avg(&self) -> Color {
        if self.dark { self.dark_avg } else { self.light_avg }
    }

    /// Chart background for the active palette.
    pub fn background(&self) -> Color {
        if self.dark { Color::Black } else { Color::White }
    }

    /// Text and axis colour for the active palette.
    pub fn text(&self) -> Color {
        if self.dark { Color::White } else { Color::Black }
    }

    pub fn mode_label(&self) -> &'static str {
        if self.dark { "dark" } else { "light" }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
