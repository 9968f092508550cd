pub mod schema;

pub use schema::{PlotConfig, RefreshConfig, SourceConfig, ThemeConfig, ViewConfig};

use std::path::{Path, PathBuf};
use tailplot_core::{PlotError, Result};

/// Load configuration from a TOML file.  Returns `PlotConfig::default()` if
/// the file doesn't exist so the viewer always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<PlotConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(PlotConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| PlotError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| PlotError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("tailplot").join("tailplot.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load("/nonexistent/tailplot.toml").unwrap();
        assert_eq!(cfg.view.window_size, 10);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tailplot.toml");
        std::fs::write(&path, "view = not toml").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, PlotError::Config(_)));
    }

    #[test]
    fn valid_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tailplot.toml");
        std::fs::write(&path, "[refresh]\ninterval_secs = 1.0\n").unwrap();
        let cfg = load(&path).unwrap();
        assert_eq!(cfg.refresh.interval_secs, 1.0);
    }
}
