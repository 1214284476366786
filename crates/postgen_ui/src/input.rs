//! Terminal input polling.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use postgen_error::{PostgenResult, UiError, UiErrorKind};
use std::time::Duration;

/// Input events for the terminal host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Tick for periodic work (alert expiry, completions)
    Tick,
    /// Key press
    Key(KeyEvent),
}

/// Polls the terminal for input.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a handler that ticks every `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait up to one tick for input.
    ///
    /// Returns `Ok(None)` for events the UI ignores (resize, mouse, key release).
    pub fn next(&self) -> PostgenResult<Option<InputEvent>> {
        let ready = event::poll(self.tick_rate)
            .map_err(|e| UiError::new(UiErrorKind::EventPoll(e.to_string())))?;
        if !ready {
            return Ok(Some(InputEvent::Tick));
        }
        match event::read().map_err(|e| UiError::new(UiErrorKind::EventRead(e.to_string())))? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(Some(InputEvent::Key(key)))
            }
            _ => Ok(None),
        }
    }
}
