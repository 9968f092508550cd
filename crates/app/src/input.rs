use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tailplot_core::{PlotError, Result};

/// Poll for at most one pending keystroke, waiting up to `timeout`.
///
/// This bounded wait is also the refresh loop's tick sleep: with no input it
/// returns `None` after `timeout`, so the loop always makes progress at the
/// configured interval. Key releases and non-key events are swallowed.
pub fn poll_key(timeout: Duration) -> Result<Option<KeyCode>> {
    let ready = event::poll(timeout)
        .map_err(|e| PlotError::Terminal(format!("input poll: {e}")))?;
    if !ready {
        return Ok(None);
    }

    let event = event::read().map_err(|e| PlotError::Terminal(format!("input read: {e}")))?;
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key.code)),
        _ => Ok(None),
    }
}
