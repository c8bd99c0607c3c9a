//! Runtime execution modes.
//!
//! The showcase TUI is the only interactive mode; it sits behind the
//! `tui` feature so headless builds keep the validation subcommands.

use anyhow::Result;
use vitrine_core::config::AnimationConfig;
use vitrine_core::content::PageContent;

#[cfg(feature = "tui")]
pub fn run_showcase(content: PageContent, animation: AnimationConfig) -> Result<()> {
    vitrine_tui::run_showcase(content, animation)
}

#[cfg(not(feature = "tui"))]
pub fn run_showcase(_content: PageContent, _animation: AnimationConfig) -> Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
