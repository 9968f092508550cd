//! The refresh loop — wires every collaborator together and owns the
//! terminal for the life of the process.
//!
//! Each tick: ingest new samples from the data file, poll for at most one
//! keystroke (bounded by the refresh interval), dispatch it, recompute the
//! visible slice and its trailing average, render, then sleep out whatever
//! is left of the tick.

pub mod input;
pub mod terminal;

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use tracing::{debug, info};

use tailplot_config::PlotConfig;
use tailplot_core::{trailing_average, Command, PlotError, Reservoir, Result, ViewState};
use tailplot_render::FrameView;
use tailplot_source::DataSource;
use tailplot_theme::Theme;

use terminal::{TerminalGuard, Tui};

/// Floor for the refresh interval; protects against a zero or negative
/// config value, which would turn the loop into a busy spin.
const MIN_INTERVAL_SECS: f64 = 0.05;

/// Start the viewer. Returns when the user quits or on a fatal terminal or
/// render failure — with the terminal restored either way.
pub fn run(config: PlotConfig) -> Result<()> {
    terminal::install_panic_hook();
    let mut guard = TerminalGuard::acquire()?;
    let mut app = App::new(config);
    app.run_loop(guard.terminal_mut())
}

struct App {
    reservoir: Reservoir,
    view: ViewState,
    source: DataSource,
    theme: Theme,
    interval: Duration,
}

impl App {
    fn new(config: PlotConfig) -> Self {
        let interval = Duration::from_secs_f64(
            config.refresh.interval_secs.max(MIN_INTERVAL_SECS),
        );
        Self {
            reservoir: Reservoir::new(),
            view: ViewState::new(config.view.window_size, config.view.avg_window),
            source: DataSource::new(config.source.path),
            theme: Theme::from_config(&config.theme),
            interval,
        }
    }

    fn run_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        info!(
            "watching '{}' at {:.2}s intervals",
            self.source.path().display(),
            self.interval.as_secs_f64()
        );

        loop {
            let tick_start = Instant::now();

            // 1. Ingest.
            let ingest = self.source.poll();
            if ingest.truncated {
                self.reservoir.clear();
            }
            if !ingest.values.is_empty() {
                debug!("ingested {} new samples", ingest.values.len());
            }
            self.reservoir.append(ingest.values);

            // 2–3. One keystroke, bounded by the tick interval.
            if let Some(key) = input::poll_key(self.interval)? {
                if let Some(command) = command_for(key) {
                    match command {
                        Command::Quit => {
                            info!("quit");
                            return Ok(());
                        }
                        Command::ToggleTheme => self.theme.toggle(),
                        other => self.view.apply(other, self.reservoir.len()),
                    }
                }
            }

            // 4. Recompute the visible slice.
            self.view.follow_tick(self.reservoir.len());
            let (start, end) = self.view.visible_range(self.reservoir.len());
            let raw = self.reservoir.slice(start, end - start);
            let avg = trailing_average(raw, self.view.avg_window);
            let legend = legend(&self.view, self.reservoir.len(), &self.theme);

            // 5. Render.
            let frame = FrameView {
                start_index: start,
                raw,
                avg: &avg,
                show_raw: self.view.show_raw,
                show_avg: self.view.show_avg,
                legend: &legend,
            };
            terminal
                .draw(|f| tailplot_render::draw(f, &frame, &self.theme))
                .map_err(|e| PlotError::Render(e.to_string()))?;

            // 6. Sleep out the rest of the tick if the key poll returned
            // early.
            if let Some(rest) = self.interval.checked_sub(tick_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }
}

/// Map a terminal key event to a command. Esc quits like `q`; everything
/// else goes through the single-character table.
fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char(c) => Command::from_key(c),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Status line shown under the chart.
fn legend(view: &ViewState, sample_count: usize, theme: &Theme) -> String {
    format!(
        "TW length: {}  Avg window: {}  Follow: {}  Samples: {}  [{}]",
        view.window_size,
        view.avg_window,
        if view.is_following() { "on" } else { "off" },
        sample_count,
        theme.mode_label()
    )
}
