//! Generated post types and the post status lifecycle.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a generated post.
///
/// Transitions only move forward: draft → approved → posted. The client
/// enforces this by offering at most one [`PostAction`] per status.
///
/// # Examples
///
/// ```
/// use postgen_core::{PostAction, PostStatus};
///
/// assert_eq!(PostStatus::Draft.action(), Some(PostAction::Approve));
/// assert_eq!(PostStatus::Draft.next(), Some(PostStatus::Approved));
/// assert_eq!(PostStatus::Posted.action(), None);
/// assert_eq!(PostStatus::Approved.badge(), "APPROVED");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PostStatus {
    /// Freshly generated, awaiting review
    Draft,
    /// Reviewed and ready to publish
    Approved,
    /// Published on the platform
    Posted,
}

impl PostStatus {
    /// The single action offered for a post in this status.
    pub fn action(self) -> Option<PostAction> {
        match self {
            PostStatus::Draft => Some(PostAction::Approve),
            PostStatus::Approved => Some(PostAction::MarkPosted),
            PostStatus::Posted => None,
        }
    }

    /// The status the offered action moves the post to.
    pub fn next(self) -> Option<PostStatus> {
        self.action().map(PostAction::target)
    }

    /// Wire name (`draft`, `approved`, `posted`).
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Upper-cased badge text.
    pub fn badge(self) -> &'static str {
        match self {
            PostStatus::Draft => "DRAFT",
            PostStatus::Approved => "APPROVED",
            PostStatus::Posted => "POSTED",
        }
    }
}

/// Status-advancing action offered on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum PostAction {
    /// draft → approved
    #[display("Approve")]
    Approve,
    /// approved → posted
    #[display("Mark as Posted")]
    MarkPosted,
}

impl PostAction {
    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            PostAction::Approve => "Approve",
            PostAction::MarkPosted => "Mark as Posted",
        }
    }

    /// Status the post moves to when the action is taken.
    pub fn target(self) -> PostStatus {
        match self {
            PostAction::Approve => PostStatus::Approved,
            PostAction::MarkPosted => PostStatus::Posted,
        }
    }
}

/// A generated social-media post as listed by the backend.
///
/// `platform` and `tone` stay plain strings: the server is the source of truth
/// and may know values this client does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Post {
    /// Server-assigned identifier
    pub id: i64,
    /// Event the post was generated for
    #[serde(default)]
    #[builder(setter(strip_option), default)]
    pub event_id: Option<i64>,
    /// Denormalized title of that event
    pub event_title: String,
    /// Target platform
    pub platform: String,
    /// Tone used for generation
    pub tone: String,
    /// Post body
    pub content: String,
    /// Space-separated hashtags
    #[serde(default)]
    #[builder(setter(strip_option), default)]
    pub hashtags: Option<String>,
    /// Lifecycle status
    pub status: PostStatus,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    #[builder(setter(strip_option), default)]
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601)
    #[serde(default)]
    #[builder(setter(strip_option), default)]
    pub updated_at: Option<String>,
}

impl Post {
    /// Hashtags, if present and non-empty.
    pub fn hashtags(&self) -> Option<&str> {
        self.hashtags.as_deref().filter(|s| !s.is_empty())
    }
}
