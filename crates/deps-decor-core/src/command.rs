//! Replace payloads embedded in hover markdown.
//!
//! A [`ReplaceRequest`] is serialized to JSON and percent-encoded into a
//! `command:<id>?<payload>` reference. The core never executes it; the host's
//! command layer decodes it and replaces `[start, end)` with `new_value`.

use crate::error::{DecorError, Result};
use serde::{Deserialize, Serialize};

const COMMAND_SCHEME: &str = "command:";

/// Text replacement the host can execute on user action.
///
/// # Examples
///
/// ```
/// use deps_decor_core::ReplaceRequest;
///
/// let request = ReplaceRequest::for_version("1.0.214", 8, 15);
/// assert_eq!(request.new_value, "\"1.0.214\"");
///
/// let uri = request.to_command_uri("crates.replaceVersion").unwrap();
/// let decoded = ReplaceRequest::from_command_uri(&uri, "crates.replaceVersion").unwrap();
/// assert_eq!(decoded, request);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceRequest {
    pub new_value: String,
    pub start: usize,
    pub end: usize,
}

impl ReplaceRequest {
    /// Builds a request that writes `version` as a quoted literal.
    pub fn for_version(version: &str, start: usize, end: usize) -> Self {
        Self {
            new_value: format!("\"{}\"", version),
            start,
            end,
        }
    }

    /// Encodes the request as an opaque command reference.
    pub fn to_command_uri(&self, command: &str) -> Result<String> {
        let payload = serde_json::to_string(self)?;
        Ok(format!(
            "{}{}?{}",
            COMMAND_SCHEME,
            command,
            urlencoding::encode(&payload)
        ))
    }

    /// Decodes a command reference produced by [`Self::to_command_uri`].
    ///
    /// Fails if the reference targets a different command or carries a
    /// malformed payload.
    pub fn from_command_uri(uri: &str, command: &str) -> Result<Self> {
        let payload = uri
            .strip_prefix(COMMAND_SCHEME)
            .and_then(|rest| rest.strip_prefix(command))
            .and_then(|rest| rest.strip_prefix('?'))
            .ok_or_else(|| DecorError::InvalidCommand(uri.to_string()))?;

        let decoded = urlencoding::decode(payload)?;
        Ok(serde_json::from_str(&decoded)?)
    }
}
