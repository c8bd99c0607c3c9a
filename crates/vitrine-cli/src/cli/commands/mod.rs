//! Non-interactive subcommands.

use std::path::Path;

use anyhow::{Context, Result};
use vitrine_core::config::{Config, paths};
use vitrine_core::content::PageContent;

/// `vitrine config path` - print the resolved config file location.
pub fn config_path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}

/// `vitrine config init` - write the default config template.
pub fn config_init(force: bool) -> Result<()> {
    let path = Config::init(force)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// `vitrine content check <path>` - validate a content file headlessly.
pub fn content_check(path: &Path) -> Result<()> {
    let content =
        PageContent::load(path).with_context(|| format!("Invalid content file {}", path.display()))?;
    println!(
        "{}: ok ({} snippets, {} metrics, {} steps)",
        path.display(),
        content.snippets.len(),
        content.metrics.len(),
        content.steps.len(),
    );
    Ok(())
}
