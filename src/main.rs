//! tailplot — live terminal chart for a growing numeric data file.
//!
//! Run with:  `tailplot -f data.txt`

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "tailplot",
    version,
    about = "Plot a moving window of a growing data file with a running average"
)]
struct Cli {
    /// Initial number of points in the moving window
    #[arg(short = 'w', long)]
    window: Option<usize>,

    /// Window size for the running average
    #[arg(short = 'a', long)]
    avg_window: Option<usize>,

    /// Refresh interval in seconds
    #[arg(short = 'i', long)]
    interval: Option<f64>,

    /// Path to the data file
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Config file path (default: $XDG_CONFIG_HOME/tailplot/tailplot.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(tailplot_config::default_path);
    let mut config = tailplot_config::load(config_path)?;

    // CLI flags override the config file.
    if let Some(window) = cli.window {
        config.view.window_size = window;
    }
    if let Some(avg) = cli.avg_window {
        config.view.avg_window = avg;
    }
    if let Some(interval) = cli.interval {
        config.refresh.interval_secs = interval;
    }
    if let Some(file) = cli.file {
        config.source.path = file;
    }

    tracing::info!("tailplot v{} starting", env!("CARGO_PKG_VERSION"));

    tailplot_app::run(config).map_err(Into::into)
}

/// Structured logging — `RUST_LOG` controls verbosity. Output goes to
/// `tailplot.log` because stdout belongs to the chart; with `RUST_LOG` unset
/// logging stays off entirely.
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = std::fs::File::create("tailplot.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
