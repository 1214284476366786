//! Error types for postgen.
//!
//! This crate provides the error types shared by every postgen crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind (or a message) with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Two classes matter to the UI: application-level failures ([`ApiError`],
//! the backend answered `success: false`) and everything else (transport,
//! parse, local infrastructure).
//!
//! # Examples
//!
//! ```
//! use postgen_error::{ApiError, PostgenResult};
//!
//! fn delete_event() -> PostgenResult<()> {
//!     Err(ApiError::new("Event not found"))?
//! }
//!
//! let err = delete_event().unwrap_err();
//! assert!(err.is_api());
//! assert_eq!(err.message(), "Event not found");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod error;
mod message;
mod storage;
#[cfg(feature = "ui")]
mod ui;

pub use builder::{BuilderError, BuilderErrorKind};
pub use error::{PostgenError, PostgenErrorKind, PostgenResult};
pub use message::{ApiError, ConfigError, HttpError, JsonError};
pub use storage::{StorageError, StorageErrorKind};
#[cfg(feature = "ui")]
pub use ui::{UiError, UiErrorKind};
