//! In-memory session context for the generator panel.

/// Identifiers of the most recent generation, kept until the app restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    /// Post created by the last successful generation
    pub current_post_id: Option<i64>,
    /// Event used by the last generation attempt
    pub current_event_id: Option<i64>,
}
