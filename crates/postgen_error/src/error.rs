//! Top-level error wrapper types.

#[cfg(feature = "ui")]
use crate::UiError;
use crate::{ApiError, BuilderError, ConfigError, HttpError, JsonError, StorageError};

/// Every error a postgen crate can produce.
///
/// # Examples
///
/// ```
/// use postgen_error::{PostgenError, HttpError};
///
/// let err: PostgenError = HttpError::new("Connection failed").into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PostgenErrorKind {
    /// Transport failure
    #[from(HttpError)]
    Http(HttpError),
    /// Malformed response body
    #[from(JsonError)]
    Json(JsonError),
    /// Backend reported `success: false`
    #[from(ApiError)]
    Api(ApiError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Preference storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Builder validation error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Terminal host error
    #[cfg(feature = "ui")]
    #[from(UiError)]
    Ui(UiError),
}

/// Postgen error with kind discrimination.
///
/// # Examples
///
/// ```
/// use postgen_error::{PostgenError, PostgenResult, ConfigError};
///
/// fn might_fail() -> PostgenResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Postgen Error: {}", _0)]
pub struct PostgenError(Box<PostgenErrorKind>);

impl PostgenError {
    /// Create a new error from a kind.
    pub fn new(kind: PostgenErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PostgenErrorKind {
        &self.0
    }

    /// Whether the backend itself rejected the request (`success: false`).
    pub fn is_api(&self) -> bool {
        matches!(self.kind(), PostgenErrorKind::Api(_))
    }

    /// The human-readable message, without source location.
    ///
    /// This is what alerts show after their `Error ...:` prefix.
    pub fn message(&self) -> String {
        match self.kind() {
            PostgenErrorKind::Http(e) => e.message.clone(),
            PostgenErrorKind::Json(e) => e.message.clone(),
            PostgenErrorKind::Api(e) => e.message.clone(),
            PostgenErrorKind::Config(e) => e.message.clone(),
            PostgenErrorKind::Storage(e) => e.kind().to_string(),
            PostgenErrorKind::Builder(e) => e.kind().to_string(),
            #[cfg(feature = "ui")]
            PostgenErrorKind::Ui(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to PostgenErrorKind
impl<T> From<T> for PostgenError
where
    T: Into<PostgenErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for postgen operations.
pub type PostgenResult<T> = std::result::Result<T, PostgenError>;
