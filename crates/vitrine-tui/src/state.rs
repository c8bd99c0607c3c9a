//! Application state composition.
//!
//! One [`AppState`] per page session, created when the runtime starts and
//! dropped when it exits; nothing outlives the session and nothing is
//! process-global. Each live section owns its own state slice:
//!
//! ```text
//! AppState
//! ├── content: PageContent   (immutable page data)
//! ├── scroll:  ScrollState   (viewport position, layout extent)
//! ├── console: ConsoleState  (active tab, reveal, copy feedback)
//! └── metrics: MetricsState  (visibility gate, counters)
//! ```

use std::time::Instant;

use vitrine_core::config::AnimationConfig;
use vitrine_core::content::{PageContent, Snippet};

use crate::features::console::ConsoleState;
use crate::features::metrics::MetricsState;
use crate::features::page::ScrollState;

/// Combined state for the showcase page.
pub struct AppState {
    /// Immutable page data, supplied once at construction.
    pub content: PageContent,
    /// Animation timings from config.
    pub animation: AnimationConfig,
    /// Page scroll position.
    pub scroll: ScrollState,
    /// Tabbed console.
    pub console: ConsoleState,
    /// Metric counters and their visibility gate.
    pub metrics: MetricsState,
    /// Set by the reducer; the runtime exits its loop when true.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(content: PageContent, animation: AnimationConfig) -> Self {
        let console = ConsoleState::new(animation.copy_feedback(), Instant::now());
        let metrics = MetricsState::new(&content.metrics, animation.count_up());
        Self {
            content,
            animation,
            scroll: ScrollState::new(),
            console,
            metrics,
            should_quit: false,
        }
    }

    /// The snippet at the console's active index.
    pub fn active_snippet(&self) -> Option<&Snippet> {
        self.content.snippets.get(self.console.active())
    }

    /// Line count of the active snippet's body.
    pub fn active_snippet_lines(&self) -> usize {
        self.active_snippet().map_or(0, |s| s.lines().count())
    }
}
