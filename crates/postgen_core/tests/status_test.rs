//! Tests for the post status lifecycle.

use postgen_core::{Platform, PostAction, PostStatus, StatusUpdate, Tone};
use strum::IntoEnumIterator;

#[test]
fn test_statuses_only_move_forward() {
    for status in PostStatus::iter() {
        if let Some(next) = status.next() {
            assert!(next > status, "{} must advance, got {}", status, next);
        }
    }
}

#[test]
fn test_action_targets_match_next() {
    assert_eq!(PostAction::Approve.target(), PostStatus::Approved);
    assert_eq!(PostAction::MarkPosted.target(), PostStatus::Posted);
    assert_eq!(PostStatus::Approved.next(), Some(PostStatus::Posted));
    assert_eq!(PostStatus::Posted.next(), None);
}

#[test]
fn test_status_update_wire_format() {
    let body = serde_json::to_string(&StatusUpdate {
        status: PostStatus::Approved,
    })
    .unwrap();
    assert_eq!(body, r#"{"status":"approved"}"#);
    assert_eq!(PostStatus::Posted.as_str(), "posted");
}

#[test]
fn test_generator_choices() {
    let platforms: Vec<String> = Platform::iter().map(|p| p.to_string()).collect();
    assert_eq!(platforms, ["linkedin", "instagram", "facebook", "twitter"]);
    assert_eq!(Tone::iter().count(), 4);
    assert_eq!(Tone::default(), Tone::Professional);
}
