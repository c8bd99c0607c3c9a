//! Pure view functions.
//!
//! Functions here take `&AppState`, draw to a ratatui frame, and never
//! mutate state or return effects. Layout is derived from the same
//! section builders the reducer measures with, so scrolling and
//! visibility always agree with what is on screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::common::Scrollbar;
use crate::features::page::build_page;
use crate::state::AppState;
use crate::update::STATUS_HEIGHT;

/// Width reserved for the scrollbar on the right edge.
const SCROLLBAR_WIDTH: u16 = 1;

/// Renders the whole page to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(area);
    let page_area = chunks[0];
    let status_area = chunks[1];

    let sections = build_page(app, area.width);
    let all_lines: Vec<Line<'static>> = sections.into_iter().flat_map(|s| s.lines).collect();
    let total = all_lines.len();

    let offset = app.scroll.offset().min(total);
    let visible: Vec<Line<'static>> = all_lines
        .into_iter()
        .skip(offset)
        .take(page_area.height as usize)
        .collect();

    let content_area = Rect {
        width: page_area.width.saturating_sub(SCROLLBAR_WIDTH),
        ..page_area
    };
    frame.render_widget(Paragraph::new(Text::from(visible)), content_area);

    frame.render_widget(
        Scrollbar::new(total, page_area.height as usize, offset),
        page_area,
    );

    frame.render_widget(status_line(), status_area);
}

/// One-line key hint bar.
fn status_line() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(
            " q quit · ↑↓ scroll · ⇥/1-9 tabs · c copy",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}
