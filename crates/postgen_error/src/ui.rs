//! Terminal host error types.

/// UI error kind variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UiErrorKind {
    /// Failed to set up terminal (enable raw mode, alternate screen, etc.)
    #[display("Failed to set up terminal: {}", _0)]
    TerminalSetup(String),
    /// Failed to restore terminal to original state
    #[display("Failed to restore terminal: {}", _0)]
    TerminalRestore(String),
    /// Failed to poll for terminal events
    #[display("Failed to poll for events: {}", _0)]
    EventPoll(String),
    /// Failed to read terminal event
    #[display("Failed to read event: {}", _0)]
    EventRead(String),
    /// Failed to render a frame
    #[display("Failed to render: {}", _0)]
    Rendering(String),
    /// Failed to write rendered output (HTML snapshot)
    #[display("Failed to write output: {}", _0)]
    Output(String),
}

/// UI error with source location tracking.
///
/// # Examples
///
/// ```
/// use postgen_error::{UiError, UiErrorKind};
///
/// let err = UiError::new(UiErrorKind::TerminalSetup("Raw mode failed".to_string()));
/// assert!(format!("{}", err).contains("terminal"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("UI Error: {} at line {} in {}", kind, line, file)]
pub struct UiError {
    /// Error kind
    pub kind: UiErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl UiError {
    /// Create a new UiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
