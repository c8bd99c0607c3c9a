//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer itself never performs I/O: it mutates state and describes
//! the side effects it wants.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Write a snippet body to the system clipboard.
    ///
    /// On success the runtime dispatches [`crate::events::UiEvent::CopyFinished`]
    /// back into the reducer; on failure it logs and drops the request.
    CopyToClipboard { index: usize, text: String },
}
