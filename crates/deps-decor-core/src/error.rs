use thiserror::Error;

/// Error types for deps-decor.
///
/// Classification and rendering never fail: a malformed requirement or an
/// upstream lookup failure is reported as data on the rendered decoration.
/// These errors only cover the edges where opaque payloads and configuration
/// come back in from the host.
///
/// # Examples
///
/// ```
/// use deps_decor_core::error::{DecorError, Result};
///
/// fn command_target(uri: &str) -> Result<&str> {
///     uri.strip_prefix("command:")
///         .ok_or_else(|| DecorError::InvalidCommand(uri.into()))
/// }
///
/// assert!(command_target("https://docs.rs").is_err());
/// ```
#[derive(Error, Debug)]
pub enum DecorError {
    #[error("invalid command reference: {0}")]
    InvalidCommand(String),

    #[error("invalid percent-encoding in command payload: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, DecorError>`.
pub type Result<T> = std::result::Result<T, DecorError>;
