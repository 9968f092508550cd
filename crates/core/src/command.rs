use crate::state::ViewState;

/// Small/large step magnitudes for the window-size keys.
pub const WINDOW_STEP: usize = 1;
pub const WINDOW_LEAP: usize = 100;
/// Small/large step magnitudes for the average-window keys.
pub const AVG_STEP: usize = 1;
pub const AVG_LEAP: usize = 10;
/// Large scroll magnitude; the small scroll step is the current window size.
pub const SCROLL_LEAP: usize = 100;

/// How far a scroll command moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One full window length (whatever it currently is).
    Window,
    /// A fixed number of samples.
    Fixed(usize),
}

/// All commands a single keystroke can trigger.
///
/// `Quit` and `ToggleTheme` are consumed by the refresh loop; everything else
/// is a view mutation applied through [`ViewState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GrowWindow(usize),
    ShrinkWindow(usize),
    ScrollBack(Step),
    ScrollForward(Step),
    GrowAvgWindow(usize),
    ShrinkAvgWindow(usize),
    ToggleRaw,
    ToggleAvg,
    /// Flip between the dark and light palettes.
    ToggleTheme,
    Quit,
}

impl Command {
    /// Map one keystroke to a command. Unrecognized keys map to `None` —
    /// no error, no state change.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'k' => Some(Self::GrowWindow(WINDOW_STEP)),
            'K' => Some(Self::GrowWindow(WINDOW_LEAP)),
            'j' => Some(Self::ShrinkWindow(WINDOW_STEP)),
            'J' => Some(Self::ShrinkWindow(WINDOW_LEAP)),
            'h' => Some(Self::ScrollBack(Step::Window)),
            'H' => Some(Self::ScrollBack(Step::Fixed(SCROLL_LEAP))),
            'l' => Some(Self::ScrollForward(Step::Window)),
            'L' => Some(Self::ScrollForward(Step::Fixed(SCROLL_LEAP))),
            'r' => Some(Self::GrowAvgWindow(AVG_STEP)),
            'R' => Some(Self::GrowAvgWindow(AVG_LEAP)),
            'f' => Some(Self::ShrinkAvgWindow(AVG_STEP)),
            'F' => Some(Self::ShrinkAvgWindow(AVG_LEAP)),
            'd' => Some(Self::ToggleRaw),
            'a' => Some(Self::ToggleAvg),
            'b' => Some(Self::ToggleTheme),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

impl ViewState {
    /// Apply one view-mutating command. `reservoir_len` is needed to decide
    /// whether a forward scroll reached the live edge. `Quit` and
    /// `ToggleTheme` are no-ops here.
    pub fn apply(&mut self, command: Command, reservoir_len: usize) {
        match command {
            Command::GrowWindow(by) => self.grow_window(by),
            Command::ShrinkWindow(by) => self.shrink_window(by),
            Command::ScrollBack(step) => {
                let by = self.step_len(step);
                self.scroll_back(by);
            }
            Command::ScrollForward(step) => {
                let by = self.step_len(step);
                self.scroll_forward(by, reservoir_len);
            }
            Command::GrowAvgWindow(by) => self.grow_avg_window(by),
            Command::ShrinkAvgWindow(by) => self.shrink_avg_window(by),
            Command::ToggleRaw => self.toggle_raw(),
            Command::ToggleAvg => self.toggle_avg(),
            Command::ToggleTheme | Command::Quit => {}
        }
    }

    fn step_len(&self, step: Step) -> usize {
        match step {
            Step::Window => self.window_size,
            Step::Fixed(n) => n,
        }
    }
}
