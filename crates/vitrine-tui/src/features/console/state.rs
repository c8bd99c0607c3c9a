//! Console state: active tab, line-reveal progress, copy feedback.

use std::time::{Duration, Instant};

/// Transient "copied" indicator for one snippet index.
///
/// At most one index is marked at a time. A new mark supersedes the old
/// one and opens a fresh window; it never extends the previous one. The
/// tick handler clears the mark once its deadline passes.
#[derive(Debug)]
pub struct CopyFeedback {
    ttl: Duration,
    copied: Option<Copied>,
}

#[derive(Debug)]
struct Copied {
    index: usize,
    deadline: Instant,
}

impl CopyFeedback {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, copied: None }
    }

    /// Marks `index` as just-copied, superseding any previous mark.
    ///
    /// A zero TTL disables the indicator entirely.
    pub fn mark(&mut self, index: usize, now: Instant) {
        if self.ttl.is_zero() {
            self.copied = None;
            return;
        }
        self.copied = Some(Copied {
            index,
            deadline: now + self.ttl,
        });
    }

    /// Clears the mark once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(copied) = &self.copied
            && now >= copied.deadline
        {
            self.copied = None;
        }
    }

    /// The currently marked index, if any.
    pub fn index(&self) -> Option<usize> {
        self.copied.as_ref().map(|c| c.index)
    }

    /// True while a clear is pending (the runtime polls fast while so).
    pub fn is_pending(&self) -> bool {
        self.copied.is_some()
    }
}

/// State for the tabbed console.
#[derive(Debug)]
pub struct ConsoleState {
    /// Index of the selected snippet. Single source of truth for which
    /// snippet is displayed; always in range.
    active: usize,
    /// When the current reveal animation started (reset on tab switch).
    reveal_started: Instant,
    /// Number of body lines currently revealed, updated each tick.
    revealed: usize,
    /// Copy-to-clipboard indicator.
    pub copy: CopyFeedback,
}

impl ConsoleState {
    pub fn new(copy_ttl: Duration, now: Instant) -> Self {
        Self {
            active: 0,
            reveal_started: now,
            revealed: 1,
            copy: CopyFeedback::new(copy_ttl),
        }
    }

    /// The selected snippet index.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Selects a tab. Out-of-range indices are rejected without touching
    /// the selection; reselecting the active tab is a no-op. Returns
    /// whether the selection changed.
    pub fn select_tab(&mut self, index: usize, tab_count: usize, now: Instant) -> bool {
        if index >= tab_count || index == self.active {
            return false;
        }
        self.active = index;
        self.reveal_started = now;
        self.revealed = 1;
        true
    }

    /// Advances the reveal animation. The revealed count is a pure
    /// function of elapsed time, so a slow frame can never stall it.
    pub fn on_tick(&mut self, now: Instant, reveal_step: Duration, total_lines: usize) {
        self.revealed = if reveal_step.is_zero() {
            total_lines
        } else {
            let elapsed = now.saturating_duration_since(self.reveal_started);
            let steps = (elapsed.as_millis() / reveal_step.as_millis().max(1)) as usize;
            (steps + 1).min(total_lines)
        };
        self.copy.tick(now);
    }

    /// Lines of the active snippet currently revealed.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// True while the reveal animation is still running.
    pub fn is_revealing(&self, total_lines: usize) -> bool {
        self.revealed < total_lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_millis(2_000);

    fn t0() -> Instant {
        Instant::now()
    }

    #[test]
    fn select_tab_changes_and_resets_reveal() {
        let start = t0();
        let mut console = ConsoleState::new(TTL, start);
        console.on_tick(start + Duration::from_millis(400), Duration::from_millis(40), 8);
        assert!(console.revealed() > 1);

        assert!(console.select_tab(2, 3, start + Duration::from_millis(400)));
        assert_eq!(console.active(), 2);
        assert_eq!(console.revealed(), 1);
    }

    #[test]
    fn reselecting_active_tab_is_a_noop() {
        let start = t0();
        let mut console = ConsoleState::new(TTL, start);
        console.on_tick(start + Duration::from_millis(400), Duration::from_millis(40), 8);
        let revealed = console.revealed();

        assert!(!console.select_tab(0, 3, start + Duration::from_millis(400)));
        assert_eq!(console.active(), 0);
        // No reveal restart on a no-op selection.
        assert_eq!(console.revealed(), revealed);
    }

    #[test]
    fn out_of_range_select_is_rejected() {
        let start = t0();
        let mut console = ConsoleState::new(TTL, start);
        assert!(!console.select_tab(7, 3, start));
        assert_eq!(console.active(), 0);
    }

    #[test]
    fn reveal_advances_with_elapsed_time() {
        let start = t0();
        let mut console = ConsoleState::new(TTL, start);
        let step = Duration::from_millis(40);

        console.on_tick(start, step, 10);
        assert_eq!(console.revealed(), 1);

        console.on_tick(start + Duration::from_millis(85), step, 10);
        assert_eq!(console.revealed(), 3);

        console.on_tick(start + Duration::from_secs(5), step, 10);
        assert_eq!(console.revealed(), 10);
        assert!(!console.is_revealing(10));
    }

    #[test]
    fn zero_reveal_step_shows_everything() {
        let start = t0();
        let mut console = ConsoleState::new(TTL, start);
        console.on_tick(start, Duration::ZERO, 12);
        assert_eq!(console.revealed(), 12);
    }

    #[test]
    fn copy_feedback_expires_at_deadline() {
        let start = t0();
        let mut copy = CopyFeedback::new(TTL);
        copy.mark(1, start);
        assert_eq!(copy.index(), Some(1));

        copy.tick(start + Duration::from_millis(1_999));
        assert_eq!(copy.index(), Some(1));

        copy.tick(start + Duration::from_millis(2_000));
        assert_eq!(copy.index(), None);
        assert!(!copy.is_pending());
    }

    #[test]
    fn new_copy_supersedes_without_stacking() {
        let start = t0();
        let mut copy = CopyFeedback::new(TTL);
        copy.mark(0, start);
        // Second copy 500ms later replaces the mark and its window.
        copy.mark(2, start + Duration::from_millis(500));
        assert_eq!(copy.index(), Some(2));

        // The first window's deadline passes; the new mark stays.
        copy.tick(start + Duration::from_millis(2_100));
        assert_eq!(copy.index(), Some(2));

        // The new window expires exactly 2000ms after its own mark.
        copy.tick(start + Duration::from_millis(2_500));
        assert_eq!(copy.index(), None);
    }

    #[test]
    fn zero_ttl_never_shows_feedback() {
        let start = t0();
        let mut copy = CopyFeedback::new(Duration::ZERO);
        copy.mark(0, start);
        assert_eq!(copy.index(), None);
    }
}
