//! Core data types for postgen.
//!
//! Events and generated posts as the backend returns them, the request bodies
//! the client sends, and the `{success, ...}` envelope every endpoint answers with.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod envelope;
mod event;
mod platform;
mod post;
mod request;

pub use envelope::{Ack, EventCreated, EventList, GeneratedPost, PostList, parse_envelope};
pub use event::{Event, EventBuilder, NewEvent, NewEventBuilder};
pub use platform::{Platform, Tone};
pub use post::{Post, PostAction, PostBuilder, PostStatus};
pub use request::{GenerateRequest, StatusUpdate};
