//! Metrics section rendering: animated counter cards and the static
//! before/after comparison bars.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use vitrine_core::content::PageContent;

use super::state::MetricsState;

/// Horizontal budget for a comparison bar.
const BAR_WIDTH: usize = 28;

/// Builds the metrics section as display lines.
pub fn build_section(
    content: &PageContent,
    metrics: &MetricsState,
    _width: u16,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("  {}", content.metrics_heading),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("  {}", content.metrics_subheading),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::default());

    for (metric, counter) in content.metrics.iter().zip(metrics.counters()) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:>3}", counter.displayed()),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(metric.suffix.clone(), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("  {}", metric.label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        if !metric.description.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("        {}", metric.description),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    if !content.comparison.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "  Performance comparison".to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for row in &content.comparison {
            let scale = row.baseline.max(row.optimized).max(f64::EPSILON);
            lines.push(Line::from(vec![
                Span::raw(format!("  {}", row.label)),
                Span::styled(
                    format!(
                        "  {}{} → {}{}",
                        row.baseline, row.unit, row.optimized, row.unit
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(bar(row.baseline / scale, Color::DarkGray));
            lines.push(bar(row.optimized / scale, Color::Green));
        }
    }

    lines.push(Line::default());
    lines
}

/// A single proportional bar; `fraction` is in [0, 1].
fn bar(fraction: f64, color: Color) -> Line<'static> {
    let filled = ((fraction.clamp(0.0, 1.0)) * BAR_WIDTH as f64).round() as usize;
    Line::from(vec![
        Span::raw("  "),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(BAR_WIDTH - filled),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    #[test]
    fn counters_render_their_displayed_values() {
        let content = PageContent::default();
        let mut state = MetricsState::new(&content.metrics, Duration::from_millis(100));
        let t0 = Instant::now();
        state.gate.observe(true);
        state.on_tick(t0);
        state.on_tick(t0 + Duration::from_millis(200));

        let lines = build_section(&content, &state, 80);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        // All four targets completed.
        assert!(text.contains(" 37"));
        assert!(text.contains(" 70"));
    }

    #[test]
    fn section_height_does_not_depend_on_counter_progress() {
        let content = PageContent::default();
        let idle = MetricsState::new(&content.metrics, Duration::from_millis(100));
        let mut done = MetricsState::new(&content.metrics, Duration::from_millis(100));
        done.gate.observe(true);
        done.on_tick(Instant::now());
        done.on_tick(Instant::now() + Duration::from_millis(200));

        assert_eq!(
            build_section(&content, &idle, 80).len(),
            build_section(&content, &done, 80).len()
        );
    }
}
