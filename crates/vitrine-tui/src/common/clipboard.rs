//! Clipboard access with transport fallbacks.
//!
//! The clipboard is a shared, best-effort external resource: a rejected
//! write is reported to the caller and must never take the page down.
//! Transports, in order:
//! 1. OSC 52 - terminal clipboard escape sequence (works over SSH)
//! 2. System clipboard via the `arboard` crate

use std::io::Write;

/// Clipboard interface.
pub struct Clipboard;

impl Clipboard {
    /// Copies text to the clipboard. Returns `Ok(())` if any transport
    /// succeeded.
    pub fn copy(text: &str) -> Result<(), ClipboardError> {
        if Self::copy_osc52(text).is_ok() {
            return Ok(());
        }
        Self::copy_system(text)
    }

    /// OSC 52: written to stdout, intercepted by the terminal.
    fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
        use base64::Engine;

        let encoded = base64::engine::general_purpose::STANDARD.encode(text);

        // OSC 52 format: ESC ] 52 ; c ; <base64-data> ESC \
        let mut stdout = std::io::stdout();
        write!(stdout, "\x1b]52;c;{encoded}\x1b\\").map_err(|e| ClipboardError::Osc52(e.to_string()))?;
        stdout
            .flush()
            .map_err(|e| ClipboardError::Osc52(e.to_string()))?;

        Ok(())
    }

    fn copy_system(text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::System(e.to_string()))?;

        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::System(e.to_string()))?;

        Ok(())
    }
}

/// Clipboard operation errors.
#[derive(Debug)]
pub enum ClipboardError {
    /// OSC 52 write failed.
    Osc52(String),
    /// System clipboard operation failed.
    System(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Osc52(msg) => write!(f, "OSC 52 clipboard failed: {msg}"),
            ClipboardError::System(msg) => write!(f, "System clipboard failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}
