/// Whether the visible window tracks the newest data or stays put.
///
/// An explicit tag rather than a value inferred from offset arithmetic, so
/// there is no ambiguity at the exact boundary where the offset equals the
/// live edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Follow {
    /// The window is pinned to the newest data; the offset is recomputed
    /// every tick.
    #[default]
    Following,
    /// The user scrolled back; the offset holds until they scroll forward
    /// past the live edge again.
    Pinned,
}

/// The current view over the reservoir — all keystrokes mutate this.
///
/// Invariants are enforced by clamping inside the mutation operations, never
/// surfaced as errors: `window_size` and `avg_window` never drop below 1, and
/// after the per-tick [`follow_tick`](ViewState::follow_tick) the offset
/// satisfies `offset <= max(0, reservoir_len - window_size)`.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Number of samples shown at once.
    pub window_size: usize,
    /// Start index of the visible window, relative to the reservoir start.
    pub offset: usize,
    /// Trailing-average window length.
    pub avg_window: usize,
    /// Whether the raw series is drawn.
    pub show_raw: bool,
    /// Whether the averaged series is drawn.
    pub show_avg: bool,
    /// Auto-follow mode.
    pub follow: Follow,
}

impl ViewState {
    /// Build the initial view from configured window sizes. Out-of-range
    /// values (zero) are clamped rather than rejected.
    pub fn new(window_size: usize, avg_window: usize) -> Self {
        Self {
            window_size: window_size.max(1),
            offset: 0,
            avg_window: avg_window.max(1),
            show_raw: true,
            show_avg: true,
            follow: Follow::Following,
        }
    }

    // ── Window size ───────────────────────────────────────────────────────────

    /// Resizing never moves the offset; only scrolls and the follow
    /// recompute do.
    pub fn grow_window(&mut self, by: usize) {
        self.window_size = self.window_size.saturating_add(by);
    }

    pub fn shrink_window(&mut self, by: usize) {
        self.window_size = self.window_size.saturating_sub(by).max(1);
    }

    // ── Scrolling ─────────────────────────────────────────────────────────────

    /// Scroll toward older data. This is the only operation that disengages
    /// auto-follow.
    pub fn scroll_back(&mut self, by: usize) {
        self.follow = Follow::Pinned;
        self.offset = self.offset.saturating_sub(by);
    }

    /// Scroll toward newer data. Reaching or passing the live edge
    /// re-attaches the window to the stream instead of overshooting into
    /// empty space.
    pub fn scroll_forward(&mut self, by: usize, reservoir_len: usize) {
        self.offset = self.offset.saturating_add(by);
        if self.offset.saturating_add(self.window_size) >= reservoir_len {
            self.follow = Follow::Following;
        }
    }

    // ── Average window ────────────────────────────────────────────────────────

    pub fn grow_avg_window(&mut self, by: usize) {
        self.avg_window = self.avg_window.saturating_add(by);
    }

    pub fn shrink_avg_window(&mut self, by: usize) {
        self.avg_window = self.avg_window.saturating_sub(by).max(1);
    }

    // ── Visibility ────────────────────────────────────────────────────────────

    /// Both flags off at once is a valid state — the renderer then draws a
    /// legend-only frame.
    pub fn toggle_raw(&mut self) {
        self.show_raw = !self.show_raw;
    }

    pub fn toggle_avg(&mut self) {
        self.show_avg = !self.show_avg;
    }

    // ── Per-tick recompute ────────────────────────────────────────────────────

    /// Run once per tick, before deriving the visible slice: while following,
    /// pin the window to the newest data.
    pub fn follow_tick(&mut self, reservoir_len: usize) {
        if self.follow == Follow::Following {
            self.offset = reservoir_len.saturating_sub(self.window_size);
        }
    }

    /// The clamped `[start, end)` bounds of the visible window.
    pub fn visible_range(&self, reservoir_len: usize) -> (usize, usize) {
        let start = self.offset.min(reservoir_len);
        let end = start.saturating_add(self.window_size).min(reservoir_len);
        (start, end)
    }

    pub fn is_following(&self) -> bool {
        self.follow == Follow::Following
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservoir::Reservoir;

    #[test]
    fn new_clamps_zero_windows_to_one() {
        let state = ViewState::new(0, 0);
        assert_eq!(state.window_size, 1);
        assert_eq!(state.avg_window, 1);
    }

    #[test]
    fn shrink_window_never_drops_below_one() {
        let mut state = ViewState::new(10, 5);
        state.shrink_window(100);
        assert_eq!(state.window_size, 1);
        state.shrink_window(usize::MAX);
        assert_eq!(state.window_size, 1);
    }

    #[test]
    fn shrink_avg_window_never_drops_below_one() {
        let mut state = ViewState::new(10, 5);
        state.shrink_avg_window(100);
        assert_eq!(state.avg_window, 1);
    }

    #[test]
    fn resizing_does_not_move_offset() {
        let mut state = ViewState::new(10, 5);
        state.scroll_back(3);
        let offset = state.offset;
        state.grow_window(5);
        state.shrink_window(2);
        state.grow_avg_window(7);
        state.shrink_avg_window(1);
        assert_eq!(state.offset, offset);
    }

    #[test]
    fn scroll_back_disengages_follow() {
        let mut state = ViewState::new(10, 5);
        assert!(state.is_following());
        state.follow_tick(150);
        state.scroll_back(10);
        assert!(!state.is_following());

        // Follow recomputes are now no-ops.
        let pinned = state.offset;
        state.follow_tick(500);
        assert_eq!(state.offset, pinned);
    }

    #[test]
    fn toggles_are_self_inverse() {
        let mut state = ViewState::new(10, 5);
        let (raw, avg) = (state.show_raw, state.show_avg);
        state.toggle_raw();
        state.toggle_raw();
        state.toggle_avg();
        state.toggle_avg();
        assert_eq!(state.show_raw, raw);
        assert_eq!(state.show_avg, avg);
    }

    #[test]
    fn both_series_hidden_is_valid() {
        let mut state = ViewState::new(10, 5);
        state.toggle_raw();
        state.toggle_avg();
        assert!(!state.show_raw);
        assert!(!state.show_avg);
    }

    #[test]
    fn window_larger_than_data_shows_everything() {
        // Scenario: empty reservoir, window 10, five samples arrive.
        let mut reservoir = Reservoir::new();
        let mut state = ViewState::new(10, 5);

        reservoir.append([1.0, 2.0, 3.0, 4.0, 5.0]);
        state.follow_tick(reservoir.len());

        assert_eq!(state.offset, 0);
        assert!(state.is_following());
        let (start, end) = state.visible_range(reservoir.len());
        assert_eq!(reservoir.slice(start, end - start), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn scrolled_back_window_ignores_new_data() {
        // Scenario: 150 samples, window 10, follow engaged.
        let mut reservoir = Reservoir::new();
        reservoir.append((0..150).map(|i| i as f64));
        let mut state = ViewState::new(10, 5);

        state.follow_tick(reservoir.len());
        assert_eq!(state.offset, 140);

        // Scroll back by one window length.
        state.scroll_back(state.window_size);
        assert_eq!(state.offset, 130);
        assert!(!state.is_following());

        // New data must not move the pinned window.
        reservoir.append((150..170).map(|i| i as f64));
        state.follow_tick(reservoir.len());
        assert_eq!(state.offset, 130);
    }

    #[test]
    fn scrolling_past_live_edge_reattaches() {
        // Scenario: pinned at 130 out of 170 samples, scroll forward by 100.
        let mut state = ViewState::new(10, 5);
        state.scroll_back(0); // pin
        state.offset = 130;

        state.scroll_forward(100, 170);
        assert_eq!(state.offset, 230);
        assert!(state.is_following());

        // Next tick recomputes the offset back onto the live edge.
        state.follow_tick(170);
        assert_eq!(state.offset, 160);
    }

    #[test]
    fn scroll_forward_short_of_edge_stays_pinned() {
        let mut state = ViewState::new(10, 5);
        state.scroll_back(0);
        state.offset = 20;

        state.scroll_forward(10, 200);
        assert_eq!(state.offset, 30);
        assert!(!state.is_following());
    }

    #[test]
    fn follow_tick_with_short_reservoir_keeps_offset_zero() {
        let mut state = ViewState::new(10, 5);
        state.follow_tick(3);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn visible_range_clamps_to_reservoir() {
        let mut state = ViewState::new(10, 5);
        state.scroll_back(0);
        state.offset = 95;
        assert_eq!(state.visible_range(100), (95, 100));
        assert_eq!(state.visible_range(50), (50, 50));
    }
}
