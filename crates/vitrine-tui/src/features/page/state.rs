//! Vertical scroll state for the page viewport.

/// Scroll position over the flattened page lines.
///
/// The extent (total lines, viewport height) is refreshed from layout on
/// every Frame event; the offset is clamped whenever the extent changes,
/// so a resize can never leave the viewport past the end of the page.
#[derive(Debug, Default)]
pub struct ScrollState {
    offset: usize,
    total_lines: usize,
    viewport_height: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the layout extent and re-clamps the offset.
    pub fn set_extent(&mut self, total_lines: usize, viewport_height: usize) {
        self.total_lines = total_lines;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport_height)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = (self.offset + lines).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.saturating_sub(1).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.saturating_sub(1).max(1));
    }

    pub fn home(&mut self) {
        self.offset = 0;
    }

    pub fn end(&mut self) {
        self.offset = self.max_offset();
    }

    /// True if the line range `[start, end)` intersects the viewport by
    /// any nonzero amount.
    pub fn intersects(&self, start: usize, end: usize) -> bool {
        start < self.offset + self.viewport_height && end > self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled(total: usize, viewport: usize, offset: usize) -> ScrollState {
        let mut s = ScrollState::new();
        s.set_extent(total, viewport);
        s.scroll_down(offset);
        s
    }

    #[test]
    fn scroll_clamps_to_extent() {
        let mut s = scrolled(100, 20, 0);
        s.scroll_down(500);
        assert_eq!(s.offset(), 80);
        s.scroll_up(500);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn shrinking_extent_reclamps_offset() {
        let mut s = scrolled(100, 20, 80);
        s.set_extent(50, 20);
        assert_eq!(s.offset(), 30);
    }

    #[test]
    fn intersects_by_any_nonzero_fraction() {
        let s = scrolled(200, 20, 50);
        // Viewport covers [50, 70).
        assert!(s.intersects(69, 90)); // one line overlaps
        assert!(s.intersects(40, 51));
        assert!(!s.intersects(70, 90)); // just below
        assert!(!s.intersects(10, 50)); // just above
    }

    #[test]
    fn home_and_end() {
        let mut s = scrolled(100, 20, 40);
        s.home();
        assert_eq!(s.offset(), 0);
        s.end();
        assert_eq!(s.offset(), 80);
    }
}
