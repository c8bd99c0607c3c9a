//! Page assembly and the static sections.
//!
//! Every section builder is a pure function from content (and, for the
//! two live sections, their state) to display lines. The reducer uses the
//! same builders to measure layout on Frame events, so what the gate sees
//! and what the screen shows can never disagree.

use std::ops::Range;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use vitrine_core::content::PageContent;

use crate::features::{console, metrics};
use crate::state::AppState;

/// Which block of the page a run of lines belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Announcement,
    Hero,
    SocialProof,
    Features,
    Console,
    Metrics,
    GettingStarted,
    Footer,
}

/// One vertical block of the page.
pub struct Section {
    pub kind: SectionKind,
    pub lines: Vec<Line<'static>>,
}

/// Builds the whole page, top to bottom, for the given width.
pub fn build_page(app: &AppState, width: u16) -> Vec<Section> {
    let content = &app.content;
    vec![
        Section {
            kind: SectionKind::Announcement,
            lines: announcement(content),
        },
        Section {
            kind: SectionKind::Hero,
            lines: hero(content, width),
        },
        Section {
            kind: SectionKind::SocialProof,
            lines: social_proof(content),
        },
        Section {
            kind: SectionKind::Features,
            lines: features(content),
        },
        Section {
            kind: SectionKind::Console,
            lines: console::build_section(content, &app.console, width),
        },
        Section {
            kind: SectionKind::Metrics,
            lines: metrics::build_section(content, &app.metrics, width),
        },
        Section {
            kind: SectionKind::GettingStarted,
            lines: getting_started(content),
        },
        Section {
            kind: SectionKind::Footer,
            lines: footer(content),
        },
    ]
}

/// Total page height in lines.
pub fn page_height(sections: &[Section]) -> usize {
    sections.iter().map(|s| s.lines.len()).sum()
}

/// Line range `[start, end)` occupied by a section.
pub fn section_range(sections: &[Section], kind: SectionKind) -> Option<Range<usize>> {
    let mut offset = 0;
    for section in sections {
        let end = offset + section.lines.len();
        if section.kind == kind {
            return Some(offset..end);
        }
        offset = end;
    }
    None
}

fn announcement(content: &PageContent) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        format!("  ▸ {}", content.announcement),
        Style::default().fg(Color::Magenta),
    ))]
}

fn hero(content: &PageContent, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("  {}", content.hero.headline),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(wrapped(&content.hero.tagline, width, Style::default()));
    if !content.hero.actions.is_empty() {
        lines.push(Line::default());
        let mut spans = vec![Span::raw("  ")];
        for (idx, action) in content.hero.actions.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(
                format!("[ {action} ]"),
                Style::default().fg(Color::Magenta),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());
    lines
}

fn social_proof(content: &PageContent) -> Vec<Line<'static>> {
    let mut spans = vec![Span::raw("  ")];
    for (idx, stat) in content.social_proof.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            stat.value.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", stat.label),
            Style::default().fg(Color::DarkGray),
        ));
    }
    vec![Line::from(spans), Line::default()]
}

fn features(content: &PageContent) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!("  {}", content.features_heading),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for feature in &content.features {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  • {}", feature.title),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(
                format!(" — {}", feature.description),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    if !content.capabilities.is_empty() {
        lines.push(Line::default());
        for capability in &content.capabilities {
            lines.push(Line::from(vec![
                Span::raw(format!("    {}", capability.title)),
                Span::styled(
                    format!(": {}", capability.description),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
    }
    lines.push(Line::default());
    lines
}

fn getting_started(content: &PageContent) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!("  {}", content.steps_heading),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (idx, step) in content.steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}. {}", idx + 1, step.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" — {}", step.description),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        if !step.command.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("     $ ", Style::default().fg(Color::Green)),
                Span::styled(step.command.clone(), Style::default().fg(Color::Blue)),
            ]));
        }
    }
    lines.push(Line::default());
    lines
}

fn footer(content: &PageContent) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for group in &content.footer {
        let links = group.links.join("  ·  ");
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<12}", group.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(links, Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("  {}", content.footer_note),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::default());
    lines
}

/// Greedy word wrap with a two-column indent.
fn wrapped(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    let budget = (width as usize).saturating_sub(4).max(16);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > budget {
            lines.push(Line::from(Span::styled(format!("  {current}"), style)));
            current = String::new();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(Line::from(Span::styled(format!("  {current}"), style)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use vitrine_core::config::AnimationConfig;

    #[test]
    fn sections_cover_the_page_contiguously() {
        let app = AppState::new(PageContent::default(), AnimationConfig::default());
        let sections = build_page(&app, 80);
        let total = page_height(&sections);

        let mut covered = 0;
        for section in &sections {
            let range = section_range(&sections, section.kind).unwrap();
            assert_eq!(range.start, covered);
            covered = range.end;
        }
        assert_eq!(covered, total);
    }

    #[test]
    fn metrics_section_has_a_range() {
        let app = AppState::new(PageContent::default(), AnimationConfig::default());
        let sections = build_page(&app, 80);
        let range = section_range(&sections, SectionKind::Metrics).unwrap();
        assert!(!range.is_empty());
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrapped(
            "one two three four five six seven eight nine ten",
            24,
            Style::default(),
        );
        assert!(lines.len() > 1);
        for line in &lines {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            assert!(text.len() <= 24);
        }
    }
}
