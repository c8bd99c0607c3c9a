//! Console section rendering: tab bar, terminal chrome, classified
//! snippet body and quick stats.
//!
//! Pure functions from state to lines; no mutation, no side effects.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;
use vitrine_core::classify::{Category, classify, split_command};
use vitrine_core::content::PageContent;

use super::state::ConsoleState;
use crate::common::text::truncate_with_ellipsis;

/// Widest a tab title may render before truncation.
const MAX_TAB_TITLE: usize = 24;

/// Builds the console section as display lines.
///
/// Unrevealed body lines render as blanks so the section height stays
/// constant while the reveal animation runs.
pub fn build_section(
    content: &PageContent,
    console: &ConsoleState,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.push(Line::default());
    lines.push(heading(&content.console_heading));
    lines.push(subheading(&content.console_subheading));
    lines.push(Line::default());
    lines.push(tab_bar(content, console.active()));

    let snippet = &content.snippets[console.active().min(content.snippets.len() - 1)];
    lines.push(chrome_header(
        &snippet.title,
        &snippet.dialect,
        console.copy.index() == Some(console.active()),
        width,
    ));

    let revealed = console.revealed();
    for (idx, text) in snippet.lines().enumerate() {
        if idx < revealed {
            lines.push(body_line(text));
        } else {
            lines.push(Line::default());
        }
    }

    lines.push(Line::default());
    lines.push(stat_row(&content.quick_stats));
    lines.push(Line::default());
    lines
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {text}"),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn subheading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {text}"),
        Style::default().fg(Color::DarkGray),
    ))
}

/// One line of tab titles; the active tab is highlighted.
fn tab_bar(content: &PageContent, active: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (idx, snippet) in content.snippets.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if idx == active {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title = truncate_with_ellipsis(&snippet.title, MAX_TAB_TITLE);
        spans.push(Span::styled(format!("{} {}", idx + 1, title), style));
    }
    Line::from(spans)
}

/// Terminal-style header: title, dialect tag and the copy hint, with the
/// copied indicator replacing the hint while active.
fn chrome_header(title: &str, dialect: &str, copied: bool, width: u16) -> Line<'static> {
    let hint = if copied { "✓ copied" } else { "c copy" };
    let left = format!("  ┌─ {title} · {dialect} ");
    let right = format!(" {hint} ─┐");
    let used = left.width() + right.width();
    let fill = "─".repeat((width as usize).saturating_sub(used + 2));

    let hint_style = if copied {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(left, Style::default().fg(Color::DarkGray)),
        Span::styled(fill, Style::default().fg(Color::DarkGray)),
        Span::styled(right, hint_style),
    ])
}

/// Styles one snippet line by its classification.
fn body_line(text: &str) -> Line<'static> {
    const INDENT: &str = "    ";
    match classify(text) {
        Category::Comment => Line::from(Span::styled(
            format!("{INDENT}{text}"),
            Style::default().fg(Color::DarkGray),
        )),
        Category::Command => {
            let (name, rest) = split_command(text);
            Line::from(vec![
                Span::styled(format!("{INDENT}$ "), Style::default().fg(Color::Green)),
                Span::styled(name.to_string(), Style::default().fg(Color::Blue)),
                Span::raw(rest.to_string()),
            ])
        }
        Category::Declaration => Line::from(Span::styled(
            format!("{INDENT}{text}"),
            Style::default().fg(Color::Blue),
        )),
        Category::Keyword => Line::from(Span::styled(
            format!("{INDENT}{text}"),
            Style::default().fg(Color::Yellow),
        )),
        Category::Plain => Line::from(Span::raw(format!("{INDENT}{text}"))),
    }
}

fn stat_row(stats: &[vitrine_core::content::Stat]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (idx, stat) in stats.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("    "));
        }
        spans.push(Span::styled(
            stat.value.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", stat.label),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    fn console() -> ConsoleState {
        ConsoleState::new(Duration::from_millis(2_000), Instant::now())
    }

    #[test]
    fn section_height_is_stable_during_reveal() {
        let content = PageContent::default();
        let fresh = console();
        let mut settled = console();
        settled.on_tick(
            Instant::now() + Duration::from_secs(10),
            Duration::from_millis(40),
            content.snippets[0].lines().count(),
        );

        let a = build_section(&content, &fresh, 80);
        let b = build_section(&content, &settled, 80);
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn copied_indicator_appears_for_active_snippet_only() {
        let content = PageContent::default();
        let mut console = console();
        console.copy.mark(0, Instant::now());

        let lines = build_section(&content, &console, 80);
        let header: String = lines[5]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(header.contains("✓ copied"));

        // Feedback is scoped to the snippet index, not the selection:
        // copying tab 0 then viewing tab 1 shows no indicator.
        console.select_tab(1, content.snippets.len(), Instant::now());
        let lines = build_section(&content, &console, 80);
        let header: String = lines[5]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(header.contains("c copy"));
    }
}
