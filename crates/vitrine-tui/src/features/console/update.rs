//! Console event handling: tab switching and copy requests.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use vitrine_core::content::PageContent;

use super::state::ConsoleState;
use crate::effects::UiEffect;

/// Handles a key aimed at the console. Returns the effects to execute.
///
/// Keys that don't concern the console are ignored here and fall through
/// to the page-level bindings.
pub fn handle_key(
    console: &mut ConsoleState,
    content: &PageContent,
    key: &KeyEvent,
    now: Instant,
) -> Vec<UiEffect> {
    let tab_count = content.snippets.len();
    match key.code {
        KeyCode::Tab => {
            let next = (console.active() + 1) % tab_count.max(1);
            select(console, next, tab_count, now);
        }
        KeyCode::BackTab => {
            let prev = console
                .active()
                .checked_sub(1)
                .unwrap_or(tab_count.saturating_sub(1));
            select(console, prev, tab_count, now);
        }
        KeyCode::Char(ch @ '1'..='9') => {
            // Digits address tabs directly; out-of-range digits are ignored
            // so a bad index can never move the selection.
            let index = (ch as usize) - ('1' as usize);
            if index < tab_count {
                select(console, index, tab_count, now);
            }
        }
        KeyCode::Char('c') => {
            if let Some(snippet) = content.snippets.get(console.active()) {
                tracing::debug!(index = console.active(), "copy requested");
                return vec![UiEffect::CopyToClipboard {
                    index: console.active(),
                    text: snippet.body.clone(),
                }];
            }
        }
        _ => {}
    }
    Vec::new()
}

fn select(console: &mut ConsoleState, index: usize, tab_count: usize, now: Instant) {
    if console.select_tab(index, tab_count, now) {
        tracing::debug!(index, "tab selected");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn console() -> ConsoleState {
        ConsoleState::new(Duration::from_millis(2_000), Instant::now())
    }

    #[test]
    fn tab_cycles_forward_and_wraps() {
        let content = PageContent::default();
        let mut console = console();
        let now = Instant::now();

        handle_key(&mut console, &content, &key(KeyCode::Tab), now);
        assert_eq!(console.active(), 1);
        handle_key(&mut console, &content, &key(KeyCode::Tab), now);
        handle_key(&mut console, &content, &key(KeyCode::Tab), now);
        assert_eq!(console.active(), 0);
    }

    #[test]
    fn back_tab_wraps_to_last() {
        let content = PageContent::default();
        let mut console = console();
        handle_key(&mut console, &content, &key(KeyCode::BackTab), Instant::now());
        assert_eq!(console.active(), content.snippets.len() - 1);
    }

    #[test]
    fn digits_select_directly_and_ignore_out_of_range() {
        let content = PageContent::default();
        let mut console = console();
        let now = Instant::now();

        handle_key(&mut console, &content, &key(KeyCode::Char('3')), now);
        assert_eq!(console.active(), 2);

        handle_key(&mut console, &content, &key(KeyCode::Char('9')), now);
        assert_eq!(console.active(), 2);
    }

    #[test]
    fn copy_returns_effect_with_verbatim_body() {
        let content = PageContent::default();
        let mut console = console();
        let now = Instant::now();
        handle_key(&mut console, &content, &key(KeyCode::Char('2')), now);

        let effects = handle_key(&mut console, &content, &key(KeyCode::Char('c')), now);
        assert_eq!(
            effects,
            vec![UiEffect::CopyToClipboard {
                index: 1,
                text: content.snippets[1].body.clone(),
            }]
        );
    }

    #[test]
    fn unrelated_keys_produce_no_effects() {
        let content = PageContent::default();
        let mut console = console();
        let effects = handle_key(&mut console, &content, &key(KeyCode::Char('x')), Instant::now());
        assert!(effects.is_empty());
        assert_eq!(console.active(), 0);
    }
}
