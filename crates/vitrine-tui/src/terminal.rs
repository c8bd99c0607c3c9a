//! Terminal lifecycle management.
//!
//! Terminal state is guaranteed to be restored on normal exit, panic and
//! Ctrl+C (which arrives as a key event in raw mode and goes through the
//! normal quit path).

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Sets up the terminal: raw mode plus alternate screen.
///
/// Call `install_panic_hook()` before this so a panic during setup still
/// restores the terminal.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Enables mouse capture for wheel scrolling.
pub fn enable_input_features() -> Result<()> {
    execute!(io::stdout(), EnableMouseCapture).context("Failed to enable mouse capture")?;
    Ok(())
}

/// Disables mouse capture. Call before `restore_terminal()` on normal
/// exit paths; `restore_terminal()` also disables it for the panic case.
pub fn disable_input_features() -> Result<()> {
    execute!(io::stdout(), DisableMouseCapture).context("Failed to disable mouse capture")?;
    Ok(())
}

/// Restores terminal state. Idempotent and safe to call multiple times.
pub fn restore_terminal() -> Result<()> {
    let mut stdout = io::stdout();
    // Mouse capture may or may not be enabled; disabling twice is fine.
    let _ = execute!(stdout, DisableMouseCapture);
    execute!(stdout, LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before the default
/// hook prints the panic, so the message is readable.
pub fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            default_panic(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_panic_hook_is_idempotent() {
        // Installing twice must not stack hooks (Once guards it).
        install_panic_hook();
        install_panic_hook();
    }
}
