//! UI event types.
//!
//! Everything the reducer reacts to arrives as a [`UiEvent`], delivered
//! sequentially on the single UI thread by the runtime.

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Fixed-cadence animation tick. The only event that advances timers.
    Tick,

    /// Emitted once per loop iteration with the current terminal size,
    /// before other events, so layout-derived state (scroll clamping,
    /// section visibility) is current when they are handled.
    Frame { width: u16, height: u16 },

    /// Raw terminal input.
    Terminal(crossterm::event::Event),

    /// A clipboard write for snippet `index` succeeded.
    ///
    /// Failures never produce an event: the copy degrades silently and
    /// stays retryable.
    CopyFinished { index: usize },
}
