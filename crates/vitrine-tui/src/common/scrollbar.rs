//! Scrollbar widget with a stable thumb size.
//!
//! ratatui's built-in scrollbar rounds the thumb ends separately, which
//! makes the thumb grow and shrink while scrolling. This one computes a
//! fixed thumb length and positions it so it reaches the bottom exactly
//! at max scroll.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

const THUMB_SYMBOL: &str = "█";
const TRACK_SYMBOL: &str = "│";

/// Vertical scrollbar rendered on the right edge of its area.
#[derive(Debug, Clone)]
pub struct Scrollbar {
    total_lines: usize,
    viewport_height: usize,
    scroll_offset: usize,
}

impl Scrollbar {
    pub fn new(total_lines: usize, viewport_height: usize, scroll_offset: usize) -> Self {
        Self {
            total_lines,
            viewport_height,
            scroll_offset,
        }
    }

    /// Only shown when there is something to scroll.
    fn should_display(&self) -> bool {
        self.total_lines > self.viewport_height
    }
}

impl Widget for Scrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.should_display() {
            return;
        }

        let max_scroll = self.total_lines.saturating_sub(self.viewport_height);
        let track_len = area.height as usize;
        let viewport_len = self.viewport_height.min(track_len);
        if track_len == 0 || max_scroll == 0 {
            return;
        }

        // Fixed thumb length: round(track * viewport / (total - 1 + viewport)).
        let denom = self
            .total_lines
            .saturating_sub(1)
            .saturating_add(viewport_len);
        let thumb_len = if denom > 0 {
            let numerator = track_len as u64 * viewport_len as u64;
            let rounded = (numerator + (denom as u64 / 2)) / denom as u64;
            (rounded as usize).clamp(1, track_len)
        } else {
            track_len
        };

        // Thumb position scales so it bottoms out exactly at max scroll.
        let available = track_len.saturating_sub(thumb_len);
        let thumb_start =
            ((self.scroll_offset as u64 * available as u64) / max_scroll as u64) as usize;

        let x = area.x + area.width.saturating_sub(1);
        for (idx, y) in (area.y..area.y + area.height).enumerate() {
            let symbol = if idx >= thumb_start && idx < thumb_start + thumb_len {
                THUMB_SYMBOL
            } else {
                TRACK_SYMBOL
            };
            buf.set_string(x, y, symbol, ratatui::style::Style::default());
        }
    }
}
