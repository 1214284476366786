//! Request bodies sent to the backend.

use crate::{Platform, PostStatus, Tone};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate-post`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Event to write about
    pub event_id: i64,
    /// Target platform
    pub platform: Platform,
    /// Voice to write in
    pub tone: Tone,
}

/// Body of `PUT /api/posts/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// New status
    pub status: PostStatus,
}
