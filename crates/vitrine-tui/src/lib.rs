//! Full-screen terminal showcase page.
//!
//! The page is a vertical stack of sections rendered into a scrollable
//! viewport. Most sections are static; the command console and the metric
//! counters are live state machines driven by the event loop in
//! [`runtime`].

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use features::{console, metrics, page};
pub use runtime::ShowcaseRuntime;
use vitrine_core::config::AnimationConfig;
use vitrine_core::content::PageContent;

/// Runs the showcase page until the user quits.
pub fn run_showcase(content: PageContent, animation: AnimationConfig) -> Result<()> {
    // The page requires a terminal to render into.
    if !stderr().is_terminal() {
        anyhow::bail!(
            "vitrine requires a terminal.\n\
             Use `vitrine content check` for non-interactive validation."
        );
    }

    let mut runtime = ShowcaseRuntime::new(content, animation)?;
    runtime.run()
}
