//! Showcase runtime - owns the terminal, runs the event loop, executes
//! effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox pattern
//!
//! Effect handlers send follow-up `UiEvent`s to `inbox_tx`; the runtime
//! drains `inbox_rx` each iteration. Today the only producer is the
//! clipboard handler on this same thread.

use std::io::Stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use vitrine_core::config::AnimationConfig;
use vitrine_core::content::PageContent;

use crate::common::Clipboard;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence while animations are live (60fps = ~16ms per tick).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage when
/// nothing is animating.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen showcase runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop,
/// panic, and the quit path.
pub struct ShowcaseRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    inbox_tx: mpsc::Sender<UiEvent>,
    inbox_rx: mpsc::Receiver<UiEvent>,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
    /// Last time a terminal event was received (fast tick while the user
    /// is interacting, so scrolling feels immediate).
    last_terminal_event: Instant,
}

impl ShowcaseRuntime {
    /// Creates the runtime: panic hook first, then raw mode and the
    /// alternate screen, then initial state.
    pub fn new(content: PageContent, animation: AnimationConfig) -> Result<Self> {
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let state = AppState::new(content, animation);
        let (inbox_tx, inbox_rx) = mpsc::channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        let result = self.event_loop();
        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // initial render

        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            // Prepend a Frame event with the current terminal size so
            // layout-derived state is current before other events run.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Everything except the layout refresh can change what is
                // on screen: input, ticks, clipboard results.
                if !matches!(&event, UiEvent::Frame { .. }) {
                    dirty = true;
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event collection
    // ========================================================================

    /// Collects events from the terminal and the inbox, and emits Tick
    /// events at the current cadence.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast cadence while something animates or the user interacts;
        // otherwise idle polling to save CPU.
        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if update::needs_fast_tick(&self.state) || recent_terminal_activity {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox (clipboard results and any future async producers).
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick is due, unless events are already
        // waiting to be processed.
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered input without blocking.
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::CopyToClipboard { index, text } => {
                match Clipboard::copy(&text) {
                    Ok(()) => {
                        // Feedback only on success; the reducer handles it
                        // on the next iteration.
                        let _ = self.inbox_tx.send(UiEvent::CopyFinished { index });
                    }
                    Err(err) => {
                        // Silent degrade: no indicator, no crash, and the
                        // copy stays retryable.
                        tracing::warn!(%err, index, "clipboard write failed");
                    }
                }
            }
        }
    }
}

impl Drop for ShowcaseRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
