use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tailplot_core::{PlotError, Result};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Scoped ownership of the raw-mode terminal.
///
/// Raw mode and the alternate screen are acquired together; dropping the
/// guard restores both, so every exit path — quit, error return, panic (via
/// [`install_panic_hook`]) — leaves the terminal usable.
pub struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode().map_err(|e| PlotError::Terminal(format!("raw mode: {e}")))?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            // Partially acquired: raw mode is on but the screen never
            // switched. Undo before reporting.
            let _ = disable_raw_mode();
            return Err(PlotError::Terminal(format!("alternate screen: {e}")));
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                Err(PlotError::Terminal(format!("backend: {e}")))
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        );
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic, so the message is readable instead of landing on the alternate
/// screen in raw mode.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        original_hook(info);
    }));
}
