//! Errors that carry a single message.
//!
//! Each type records where it was created through `#[track_caller]`; the
//! message alone is what ends up in user-facing alerts.

macro_rules! message_error {
    ($(#[$doc:meta])* $name:ident, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
        #[display("{}: {} at line {} in {}", $label, message, line, file)]
        pub struct $name {
            /// Human-readable message
            pub message: String,
            /// Line number where the error occurred
            pub line: u32,
            /// File where the error occurred
            pub file: &'static str,
        }

        impl $name {
            #[doc = concat!("Create a new `", stringify!($name), "` at the caller's location.")]
            #[track_caller]
            pub fn new(message: impl Into<String>) -> Self {
                let location = std::panic::Location::caller();
                Self {
                    message: message.into(),
                    line: location.line(),
                    file: location.file(),
                }
            }
        }
    };
}

message_error!(
    /// Transport failure talking to the backend (connection refused, DNS, TLS).
    ///
    /// ```
    /// use postgen_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(err.to_string().starts_with("HTTP Error: Connection refused"));
    /// ```
    HttpError,
    "HTTP Error"
);

message_error!(
    /// A response body that is not the expected JSON.
    JsonError,
    "JSON Error"
);

message_error!(
    /// The backend answered with `success: false`.
    ///
    /// `message` is the server-provided `error` field, shown to the user verbatim.
    ///
    /// ```
    /// use postgen_error::ApiError;
    ///
    /// let err = ApiError::new("Missing required field: title");
    /// assert_eq!(err.message, "Missing required field: title");
    /// ```
    ApiError,
    "API Error"
);

message_error!(
    /// Configuration could not be loaded or parsed.
    ConfigError,
    "Configuration Error"
);
