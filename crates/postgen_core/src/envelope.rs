//! The `{success, ...}` response envelope.
//!
//! Every endpoint answers with a JSON object carrying `success`. On failure it
//! also carries `error`; on success the remaining fields are the payload.

use crate::{Event, Post};
use postgen_error::{ApiError, JsonError, PostgenResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct Header {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Parse an envelope body into its payload.
///
/// `success: false` becomes an [`ApiError`] carrying the server message; a body
/// that is not an envelope, or whose payload does not match `T`, becomes a
/// [`JsonError`].
///
/// # Examples
///
/// ```
/// use postgen_core::{EventList, parse_envelope};
///
/// let events: EventList = parse_envelope(r#"{"success": true, "events": []}"#).unwrap();
/// assert!(events.events.is_empty());
///
/// let err = parse_envelope::<EventList>(r#"{"success": false, "error": "db down"}"#).unwrap_err();
/// assert!(err.is_api());
/// assert_eq!(err.message(), "db down");
/// ```
pub fn parse_envelope<T: DeserializeOwned>(body: &str) -> PostgenResult<T> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| JsonError::new(e.to_string()))?;
    let header: Header =
        serde_json::from_value(value.clone()).map_err(|e| JsonError::new(e.to_string()))?;

    if !header.success {
        let message = header
            .error
            .unwrap_or_else(|| "Unknown error".to_string());
        tracing::debug!(%message, "Backend reported failure");
        return Err(ApiError::new(message).into());
    }

    serde_json::from_value(value).map_err(|e| JsonError::new(e.to_string()).into())
}

/// Payload of `GET /api/events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventList {
    /// Events, newest date first
    pub events: Vec<Event>,
}

/// Payload of `GET /api/posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostList {
    /// Posts, newest first
    pub posts: Vec<Post>,
}

/// Payload of `POST /api/events`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCreated {
    /// Identifier of the created event, when the server reports it
    #[serde(default)]
    pub event_id: Option<i64>,
}

/// Payload of `POST /api/generate-post`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPost {
    /// Identifier of the stored draft
    pub post_id: i64,
    /// Generated body
    pub content: String,
    /// Generated hashtags
    #[serde(default)]
    pub hashtags: Option<String>,
}

/// Payload of endpoints that only report success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Ack {}
