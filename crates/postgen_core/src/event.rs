//! Event types.

use postgen_error::BuilderError;
use serde::{Deserialize, Serialize};

/// An occasion a post can be generated about.
///
/// Optional fields arrive as `null`, missing, or empty strings depending on
/// how the event was created; the accessor methods treat all three as absent.
///
/// # Examples
///
/// ```
/// use postgen_core::EventBuilder;
///
/// let event = EventBuilder::default()
///     .id(7)
///     .title("Rust Meetup")
///     .date("2025-03-14")
///     .location("")
///     .build()
///     .unwrap();
///
/// assert_eq!(event.location(), None);
/// assert_eq!(event.select_label(), "Rust Meetup - 2025-03-14");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Event {
    /// Server-assigned identifier
    pub id: i64,
    /// Event title
    pub title: String,
    /// Display-formatted date (`YYYY-MM-DD`)
    pub date: String,
    /// Where the event takes place
    #[serde(default)]
    #[builder(setter(strip_option), default)]
    pub location: Option<String>,
    /// Free-form event type (conference, webinar, ...)
    #[serde(default, rename = "type")]
    #[builder(setter(strip_option), default)]
    pub kind: Option<String>,
    /// Longer description
    #[serde(default)]
    #[builder(setter(strip_option), default)]
    pub description: Option<String>,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    #[builder(setter(strip_option), default)]
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601)
    #[serde(default)]
    #[builder(setter(strip_option), default)]
    pub updated_at: Option<String>,
}

impl Event {
    /// Location, if present and non-empty.
    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    /// Event type, if present and non-empty.
    pub fn kind(&self) -> Option<&str> {
        non_empty(&self.kind)
    }

    /// Description, if present and non-empty.
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    /// Label used by the generator's event select: `title - date`.
    pub fn select_label(&self) -> String {
        format!("{} - {}", self.title, self.date)
    }

    /// Label used by the post filter select: the title alone.
    pub fn filter_label(&self) -> &str {
        &self.title
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Body of `POST /api/events`.
///
/// Title and date are required; blank optional fields are sent as empty strings.
///
/// # Examples
///
/// ```
/// use postgen_core::NewEventBuilder;
///
/// let event = NewEventBuilder::default()
///     .title("Launch Party")
///     .date("2025-06-01")
///     .build()
///     .unwrap();
/// assert_eq!(event.location(), "");
///
/// let missing = NewEventBuilder::default().title("  ").date("2025-06-01").build();
/// assert!(missing.is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into), build_fn(validate = "Self::validate", error = "BuilderError"))]
pub struct NewEvent {
    /// Event title
    title: String,
    /// Event date
    date: String,
    /// Location
    #[builder(default)]
    location: String,
    /// Event type
    #[serde(rename = "type")]
    #[builder(default)]
    kind: String,
    /// Description
    #[builder(default)]
    description: String,
}

impl NewEventBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err("Event title is required".to_string());
        }
        if self.date.as_deref().is_some_and(|d| d.trim().is_empty()) {
            return Err("Event date is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_event_serializes_type_field() {
        let event = NewEventBuilder::default()
            .title("Expo")
            .date("2025-09-09")
            .kind("conference")
            .build()
            .unwrap();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "conference");
        assert_eq!(json["location"], "");
        assert_eq!(json["description"], "");
    }

    #[test]
    fn test_new_event_requires_date() {
        let err = NewEventBuilder::default().title("Expo").build().unwrap_err();
        assert!(err.to_string().contains("date"));
    }

    #[test]
    fn test_event_accepts_null_optionals() {
        let event: Event = serde_json::from_str(
            r#"{"id": 3, "title": "Expo", "date": "2025-09-09", "location": null, "type": "", "description": "Big"}"#,
        )
        .unwrap();
        assert_eq!(event.location(), None);
        assert_eq!(event.kind(), None);
        assert_eq!(event.description(), Some("Big"));
    }
}
