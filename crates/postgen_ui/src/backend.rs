//! Backend trait for UI data operations.
//!
//! This module defines the trait that lets the UI talk to the post generator
//! backend over HTTP, or to mock data in tests, without coupling panels to a
//! transport.

use async_trait::async_trait;
use postgen_core::{
    Event, EventCreated, GenerateRequest, GeneratedPost, NewEvent, Post, PostStatus,
};
use postgen_error::PostgenResult;

/// The REST endpoints the UI consumes.
///
/// Implementations report `success: false` envelopes as
/// [`postgen_error::ApiError`] and every transport or parse problem as some
/// other error kind, so callers can word alerts accordingly.
#[async_trait]
pub trait PostgenApi: Send + Sync {
    /// `GET /api/events`
    async fn list_events(&self) -> PostgenResult<Vec<Event>>;

    /// `POST /api/events`
    async fn create_event(&self, event: &NewEvent) -> PostgenResult<EventCreated>;

    /// `DELETE /api/events/{id}`
    async fn delete_event(&self, id: i64) -> PostgenResult<()>;

    /// `GET /api/posts[?event_id=]`
    async fn list_posts(&self, event_id: Option<i64>) -> PostgenResult<Vec<Post>>;

    /// `POST /api/generate-post`
    async fn generate_post(&self, request: &GenerateRequest) -> PostgenResult<GeneratedPost>;

    /// `PUT /api/posts/{id}`
    async fn update_post_status(&self, id: i64, status: PostStatus) -> PostgenResult<()>;

    /// `DELETE /api/posts/{id}`
    async fn delete_post(&self, id: i64) -> PostgenResult<()>;
}

/// One backend call, as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    /// List all events
    ListEvents,
    /// Create an event from the form
    CreateEvent(NewEvent),
    /// Delete an event
    DeleteEvent(i64),
    /// List posts, optionally for one event
    ListPosts {
        /// Filter, `None` lists every post
        event_id: Option<i64>,
    },
    /// Generate a post
    GeneratePost(GenerateRequest),
    /// Change a post's status
    UpdatePostStatus {
        /// Post to update
        post_id: i64,
        /// New status
        status: PostStatus,
    },
    /// Delete a post
    DeletePost(i64),
}

impl ApiCall {
    /// Gerund used in transport error alerts: `Error <activity>: ...`.
    pub fn activity(&self) -> &'static str {
        match self {
            ApiCall::ListEvents => "loading events",
            ApiCall::CreateEvent(_) => "creating event",
            ApiCall::DeleteEvent(_) => "deleting event",
            ApiCall::ListPosts { .. } => "loading posts",
            ApiCall::GeneratePost(_) => "generating post",
            ApiCall::UpdatePostStatus { .. } => "updating status",
            ApiCall::DeletePost(_) => "deleting post",
        }
    }
}

/// Successful result of an [`ApiCall`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// From [`ApiCall::ListEvents`]
    Events(Vec<Event>),
    /// From [`ApiCall::ListPosts`]
    Posts(Vec<Post>),
    /// From [`ApiCall::CreateEvent`]
    EventCreated(EventCreated),
    /// From [`ApiCall::GeneratePost`]
    Generated(GeneratedPost),
    /// From deletes and status updates
    Done,
}

/// Run one call against a backend.
#[tracing::instrument(skip(api), fields(activity = call.activity()))]
pub async fn execute(api: &dyn PostgenApi, call: &ApiCall) -> PostgenResult<Reply> {
    let reply = match call {
        ApiCall::ListEvents => Reply::Events(api.list_events().await?),
        ApiCall::CreateEvent(event) => Reply::EventCreated(api.create_event(event).await?),
        ApiCall::DeleteEvent(id) => {
            api.delete_event(*id).await?;
            Reply::Done
        }
        ApiCall::ListPosts { event_id } => Reply::Posts(api.list_posts(*event_id).await?),
        ApiCall::GeneratePost(request) => Reply::Generated(api.generate_post(request).await?),
        ApiCall::UpdatePostStatus { post_id, status } => {
            api.update_post_status(*post_id, *status).await?;
            Reply::Done
        }
        ApiCall::DeletePost(id) => {
            api.delete_post(*id).await?;
            Reply::Done
        }
    };
    Ok(reply)
}
