//! stdin/stdout protocol of the harness.
//!
//! The host sends one [`DecorateRequest`] describing a buffer, the
//! dependency occurrences found in it and the versions it resolved for each.
//! The harness answers with one rendered decoration per item, in order.
//!
//! # Examples
//!
//! ```
//! let input = r#"{
//!     "text": "[dependencies]\nserde = \"1.0\"\n",
//!     "items": [
//!         { "key": "serde", "value": "1.0", "start": 23, "end": 28, "versions": ["1.0.219"] }
//!     ]
//! }"#;
//!
//! let output = deps_decor::protocol::run(input).unwrap();
//! assert!(output.contains("\"classification\":\"up_to_date\""));
//! ```

use deps_decor_core::{DecorConfig, DecorationComposer, Item, LineIndex, RenderedDecoration, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct DecorateRequest {
    pub text: String,
    #[serde(default)]
    pub config: DecorConfig,
    #[serde(default)]
    pub items: Vec<ItemRequest>,
}

/// One dependency occurrence plus what the host resolved for it.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    #[serde(flatten)]
    pub item: Item,
    /// Published versions, newest first.
    #[serde(default)]
    pub versions: Vec<String>,
    /// Upstream lookup failure, if any.
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DecorateResponse {
    pub decorations: Vec<RenderedDecoration>,
}

/// Renders every item of a request.
pub fn decorate(request: &DecorateRequest) -> DecorateResponse {
    let index = LineIndex::new(&request.text);
    let composer = DecorationComposer::new(request.config.clone());

    let decorations = request
        .items
        .iter()
        .map(|entry| {
            let item = &entry.item;
            if item.start > item.end || item.end > request.text.len() {
                tracing::warn!(
                    "span {}..{} of {} is outside the buffer ({} bytes), clamping",
                    item.start,
                    item.end,
                    item.key,
                    request.text.len()
                );
            }
            composer.compose(&index, item, &entry.versions, entry.error.as_deref())
        })
        .collect();

    DecorateResponse { decorations }
}

/// Parses a JSON request and returns the JSON response.
pub fn run(input: &str) -> Result<String> {
    let request: DecorateRequest = serde_json::from_str(input)?;
    tracing::debug!(
        "decorating {} items in a {} byte buffer",
        request.items.len(),
        request.text.len()
    );

    let response = decorate(&request);
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deps_decor_core::{Classification, DecorError};

    const TEXT: &str = "[dependencies]\nserde = \"1.0\"\nrand = \"0.7\"\n";

    #[test]
    fn test_decorate_preserves_item_order() {
        let request: DecorateRequest = serde_json::from_value(serde_json::json!({
            "text": TEXT,
            "items": [
                { "key": "rand", "value": "0.7", "start": 36, "end": 41, "versions": ["0.9.0", "0.8.5"] },
                { "key": "serde", "value": "1.0", "start": 23, "end": 28, "versions": ["1.0.219"] }
            ]
        }))
        .unwrap();

        let response = decorate(&request);
        let classifications: Vec<_> = response
            .decorations
            .iter()
            .map(|d| d.classification)
            .collect();

        assert_eq!(
            classifications,
            vec![Classification::Incompatible, Classification::UpToDate]
        );
    }

    #[test]
    fn test_decorate_passes_upstream_error() {
        let request: DecorateRequest = serde_json::from_value(serde_json::json!({
            "text": TEXT,
            "items": [
                { "key": "serde", "value": "1.0", "start": 23, "end": 28, "error": "crate not found" }
            ]
        }))
        .unwrap();

        let response = decorate(&request);
        let decoration = &response.decorations[0];

        assert_eq!(decoration.classification, Classification::LookupFailed);
        assert_eq!(decoration.hover.header, "**crate not found**");
        assert_eq!(decoration.quick_replace, None);
    }

    #[test]
    fn test_decorate_uses_request_config() {
        let request: DecorateRequest = serde_json::from_value(serde_json::json!({
            "text": TEXT,
            "config": { "templates": { "incompatible": "upgrade to ${version}" } },
            "items": [
                { "key": "rand", "value": "0.7", "start": 36, "end": 41, "versions": ["0.9.0"] }
            ]
        }))
        .unwrap();

        let response = decorate(&request);
        assert_eq!(
            response.decorations[0].annotation_text.as_deref(),
            Some("upgrade to 0.9.0")
        );
    }

    #[test]
    fn test_out_of_bounds_span_does_not_panic() {
        let request: DecorateRequest = serde_json::from_value(serde_json::json!({
            "text": "x",
            "items": [
                { "key": "serde", "value": "1.0", "start": 40, "end": 10, "versions": ["1.0.0"] }
            ]
        }))
        .unwrap();

        let response = decorate(&request);
        assert_eq!(response.decorations.len(), 1);
    }

    #[test]
    fn test_run_rejects_malformed_json() {
        let result = run("{ not json");
        assert!(matches!(result, Err(DecorError::Json(_))));
    }

    #[test]
    fn test_run_without_items() {
        let output = run(r#"{ "text": "" }"#).unwrap();
        insta::assert_snapshot!(output, @r#"{"decorations":[]}"#);
    }
}
