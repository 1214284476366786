//! Tests for parsing backend envelopes into typed payloads.

use postgen_core::{
    Ack, EventCreated, EventList, GeneratedPost, PostAction, PostList, PostStatus, parse_envelope,
};
use postgen_error::PostgenErrorKind;

#[test]
fn test_event_list_with_server_fields() {
    let body = r#"{
        "success": true,
        "events": [
            {
                "id": 2,
                "title": "Product Launch",
                "date": "2025-05-20",
                "location": "Berlin",
                "type": "launch",
                "description": "New release",
                "created_at": "2025-01-02T10:00:00",
                "updated_at": "2025-01-02T10:00:00"
            },
            {
                "id": 1,
                "title": "Webinar",
                "date": "2025-04-01",
                "location": "",
                "type": null,
                "description": ""
            }
        ]
    }"#;

    let list: EventList = parse_envelope(body).unwrap();
    assert_eq!(list.events.len(), 2);
    assert_eq!(list.events[0].location(), Some("Berlin"));
    assert_eq!(list.events[0].kind(), Some("launch"));
    assert_eq!(list.events[1].location(), None);
    assert_eq!(list.events[1].kind(), None);
    assert_eq!(list.events[1].description(), None);
}

#[test]
fn test_post_list_statuses() {
    let body = r##"{
        "success": true,
        "posts": [
            {"id": 5, "event_id": 2, "event_title": "Product Launch", "platform": "twitter",
             "tone": "friendly", "content": "We launch!", "hashtags": null, "status": "draft"},
            {"id": 4, "event_id": 2, "event_title": "Product Launch", "platform": "linkedin",
             "tone": "formal", "content": "Announcing", "hashtags": "#Event", "status": "posted"}
        ]
    }"##;

    let list: PostList = parse_envelope(body).unwrap();
    assert_eq!(list.posts[0].status, PostStatus::Draft);
    assert_eq!(list.posts[0].hashtags(), None);
    assert_eq!(list.posts[0].status.action(), Some(PostAction::Approve));
    assert_eq!(list.posts[1].hashtags(), Some("#Event"));
    assert_eq!(list.posts[1].status.action(), None);
}

#[test]
fn test_generated_post_payload() {
    let body = r##"{"success": true, "post_id": 42, "content": "Hello", "hashtags": "#Event #Community"}"##;
    let generated: GeneratedPost = parse_envelope(body).unwrap();
    assert_eq!(generated.post_id, 42);
    assert_eq!(generated.hashtags.as_deref(), Some("#Event #Community"));
}

#[test]
fn test_created_event_id_is_optional() {
    let with_id: EventCreated = parse_envelope(r#"{"success": true, "event_id": 9}"#).unwrap();
    assert_eq!(with_id.event_id, Some(9));

    let without_id: EventCreated = parse_envelope(r#"{"success": true}"#).unwrap();
    assert_eq!(without_id.event_id, None);
}

#[test]
fn test_ack_ignores_extra_fields() {
    let ack: Ack = parse_envelope(r#"{"success": true, "extra": 1}"#).unwrap();
    assert_eq!(ack, Ack {});
}

#[test]
fn test_failure_without_message() {
    let err = parse_envelope::<Ack>(r#"{"success": false}"#).unwrap_err();
    assert!(err.is_api());
    assert_eq!(err.message(), "Unknown error");
}

#[test]
fn test_malformed_body_is_json_error() {
    let err = parse_envelope::<Ack>("<html>Internal Server Error</html>").unwrap_err();
    assert!(matches!(err.kind(), PostgenErrorKind::Json(_)));
    assert!(!err.is_api());
}

#[test]
fn test_payload_mismatch_is_json_error() {
    let err = parse_envelope::<EventList>(r#"{"success": true, "posts": []}"#).unwrap_err();
    assert!(matches!(err.kind(), PostgenErrorKind::Json(_)));
}

#[test]
fn test_unknown_status_is_rejected() {
    let body = r#"{"success": true, "posts": [
        {"id": 1, "event_title": "E", "platform": "x", "tone": "y", "content": "c", "status": "archived"}
    ]}"#;
    assert!(parse_envelope::<PostList>(body).is_err());
}
