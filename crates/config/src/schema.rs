use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure parsed from `tailplot.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlotConfig {
    /// Initial view window sizes.
    pub view: ViewConfig,
    /// Where the data comes from.
    pub source: SourceConfig,
    /// Refresh timing.
    pub refresh: RefreshConfig,
    /// Chart colours.
    pub theme: ThemeConfig,
}

/// Initial window sizes for the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Number of samples shown at once.
    pub window_size: usize,
    /// Trailing-average window length.
    pub avg_window: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            window_size: 10,
            avg_window: 5,
        }
    }
}

/// Data source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Path to the one-value-per-line data file.
    pub path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data.txt"),
        }
    }
}

/// Refresh timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Seconds between ticks. Also bounds the keystroke poll.
    pub interval_secs: f64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { interval_secs: 2.0 }
    }
}

/// Chart colour configuration.
///
/// Colours accept CSS-style hex (`"#RRGGBB"`) or the common terminal colour
/// names (`"cyan"`, `"yellow"`, ...). There is one pair per background mode
/// so both palettes stay readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Start in dark-background mode.
    pub dark: bool,
    /// Raw series colour on a dark background.
    pub dark_raw: String,
    /// Average series colour on a dark background.
    pub dark_avg: String,
    /// Raw series colour on a light background.
    pub light_raw: String,
    /// Average series colour on a light background.
    pub light_avg: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            dark: true,
            dark_raw:  "cyan".to_string(),
            dark_avg:  "yellow".to_string(),
            light_raw: "blue".to_string(),
            light_avg: "red".to_string(),
        }
    }
}
