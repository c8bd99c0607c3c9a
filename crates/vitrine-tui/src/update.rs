//! The reducer (update function).
//!
//! All state mutations happen here. The runtime calls
//! `update(app, event)` and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::console;
use crate::features::page::{SectionKind, build_page, page_height, section_range};
use crate::state::AppState;

/// Lines scrolled per mouse wheel notch.
const WHEEL_SCROLL_LINES: usize = 3;

/// Rows reserved below the page for the key-hint bar.
pub const STATUS_HEIGHT: u16 = 1;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            let now = Instant::now();
            handle_tick(app, now);
            Vec::new()
        }
        UiEvent::Frame { width, height } => {
            handle_frame(app, width, height);
            Vec::new()
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::CopyFinished { index } => {
            app.console.copy.mark(index, Instant::now());
            Vec::new()
        }
    }
}

/// Advances every timer-driven state slice. Ticks are the only place
/// time moves; a timer that was superseded or completed simply has
/// nothing left to do here.
fn handle_tick(app: &mut AppState, now: Instant) {
    let total_lines = app.active_snippet_lines();
    let reveal = app.animation.reveal();
    app.console.on_tick(now, reveal, total_lines);
    app.metrics.on_tick(now);
}

/// Refreshes layout-derived state: scroll extent and the metrics
/// section's visibility observation. Runs before other events each loop
/// iteration so they see current layout.
fn handle_frame(app: &mut AppState, width: u16, height: u16) {
    let sections = build_page(app, width);
    let total = page_height(&sections);
    let viewport = height.saturating_sub(STATUS_HEIGHT) as usize;
    app.scroll.set_extent(total, viewport);

    if let Some(range) = section_range(&sections, SectionKind::Metrics) {
        let visible = app.scroll.intersects(range.start, range.end);
        app.metrics.gate.observe(visible);
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            // Quit bindings first.
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    app.should_quit = true;
                    return Vec::new();
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                    return Vec::new();
                }
                _ => {}
            }

            // Page scrolling.
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => app.scroll.scroll_up(1),
                KeyCode::Down | KeyCode::Char('j') => app.scroll.scroll_down(1),
                KeyCode::PageUp => app.scroll.page_up(),
                KeyCode::PageDown => app.scroll.page_down(),
                KeyCode::Home | KeyCode::Char('g') => app.scroll.home(),
                KeyCode::End | KeyCode::Char('G') => app.scroll.end(),
                _ => {
                    return console::handle_key(
                        &mut app.console,
                        &app.content,
                        &key,
                        Instant::now(),
                    );
                }
            }
            Vec::new()
        }
        Event::Mouse(mouse) => {
            match mouse.kind {
                MouseEventKind::ScrollUp => app.scroll.scroll_up(WHEEL_SCROLL_LINES),
                MouseEventKind::ScrollDown => app.scroll.scroll_down(WHEEL_SCROLL_LINES),
                _ => {}
            }
            Vec::new()
        }
        // Resize is handled by the next Frame event.
        _ => Vec::new(),
    }
}

/// Whether any animation wants the fast tick cadence.
pub fn needs_fast_tick(app: &AppState) -> bool {
    app.metrics.any_running()
        || app.console.copy.is_pending()
        || app.console.is_revealing(app.active_snippet_lines())
}
