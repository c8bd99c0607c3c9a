//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use vitrine_core::config::{Config, paths};
use vitrine_core::content::PageContent;
use vitrine_core::logging;

use crate::modes;

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(version)]
#[command(about = "Terminal product showcase page")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page content TOML file (default: the built-in page)
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Work with page content files
    Content {
        #[command(subcommand)]
        command: ContentCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the resolved config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(clap::Subcommand)]
enum ContentCommands {
    /// Parse and validate a content file without opening the TUI
    Check {
        /// Content TOML file to validate
        path: PathBuf,
    },
}

/// Parses arguments and dispatches.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => commands::config_path(),
            ConfigCommands::Init { force } => commands::config_init(force),
        },
        Some(Commands::Content { command }) => match command {
            ContentCommands::Check { path } => commands::content_check(&path),
        },
        None => run_page(cli.content),
    }
}

/// Default mode: load config and content, set up logging, run the page.
fn run_page(content_override: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;

    // Logs go to a file; the TUI owns the terminal. The guard flushes
    // buffered lines when it drops at the end of this function.
    let _guard = logging::init(&paths::log_dir(), config.log_filter.as_deref())?;

    // `load` validates; the built-in page is always valid.
    let content = match content_override.or_else(|| config.content.clone()) {
        Some(path) => PageContent::load(&path)?,
        None => PageContent::default(),
    };

    tracing::debug!(
        snippets = content.snippets.len(),
        metrics = content.metrics.len(),
        "starting showcase"
    );
    modes::run_showcase(content, config.animation)
}
