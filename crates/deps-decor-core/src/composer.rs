//! Decoration rendering.
//!
//! Turns one dependency occurrence and its published versions into a
//! [`RenderedDecoration`]: end-of-line annotation text, hover markdown with a
//! replace link per version, and the default quick-replace request for the
//! latest version.
//!
//! Composition is pure. The same inputs always produce the same output, and
//! a composer can be shared across threads to render many items at once.

use crate::buffer::TextBuffer;
use crate::command::ReplaceRequest;
use crate::config::DecorConfig;
use crate::links::{docs_url, review_url};
use crate::resolver::{SemverResolver, VersionResolver};
use crate::types::{Classification, Item};
use serde::Serialize;
use tower_lsp_server::ls_types::Range;

/// Hover heading used when no upstream error is reported.
pub const VERSIONS_HEADER: &str = "#### Versions";

/// Structured hover content.
///
/// `entries` holds one markdown line per published version, in the order the
/// versions were supplied. Command links are only actionable when the host
/// honours `is_trusted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverContent {
    pub header: String,
    pub review_link: String,
    pub entries: Vec<String>,
    pub is_trusted: bool,
}

impl HoverContent {
    /// Renders the hover as a single markdown document.
    pub fn to_markdown(&self) -> String {
        let mut markdown = format!("{}{}", self.header, self.review_link);
        for entry in &self.entries {
            markdown.push_str("\n * ");
            markdown.push_str(entry);
        }
        markdown
    }
}

/// Everything the host needs to attach one decoration to its buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDecoration {
    /// From the requirement's start to the end of the line containing its end.
    pub range: Range,
    /// `None` when no "after" content should be attached.
    pub annotation_text: Option<String>,
    pub hover: HoverContent,
    /// Replacement with the latest version, if any version is published.
    pub quick_replace: Option<ReplaceRequest>,
    pub classification: Classification,
    pub best_match: Option<String>,
}

/// Renders decorations for dependency occurrences.
///
/// # Examples
///
/// ```
/// use deps_decor_core::{Classification, DecorConfig, DecorationComposer, Item, LineIndex};
///
/// let text = "[dependencies]\nserde = \"^1.0.0\"\n";
/// let index = LineIndex::new(text);
/// let item = Item::new("serde", "^1.0.0", 23, 31);
/// let versions = vec!["2.0.0".to_string(), "1.5.0".to_string()];
///
/// let composer = DecorationComposer::new(DecorConfig::default());
/// let decoration = composer.compose(&index, &item, &versions, None);
///
/// assert_eq!(decoration.classification, Classification::Compatible);
/// assert_eq!(decoration.best_match.as_deref(), Some("1.5.0"));
/// assert_eq!(decoration.annotation_text.as_deref(), Some("👍"));
/// ```
#[derive(Debug, Clone)]
pub struct DecorationComposer<R = SemverResolver> {
    config: DecorConfig,
    resolver: R,
}

impl DecorationComposer {
    /// Creates a composer using semver matching.
    pub fn new(config: DecorConfig) -> Self {
        Self::with_resolver(config, SemverResolver)
    }
}

impl<R: VersionResolver> DecorationComposer<R> {
    pub fn with_resolver(config: DecorConfig, resolver: R) -> Self {
        Self { config, resolver }
    }

    /// Composes the decoration for one dependency occurrence.
    ///
    /// `versions` must be ordered newest-first. `error` is an upstream
    /// failure reported by the host (for example a registry lookup error)
    /// and forces the error rendering.
    pub fn compose(
        &self,
        buffer: &dyn TextBuffer,
        item: &Item,
        versions: &[String],
        error: Option<&str>,
    ) -> RenderedDecoration {
        let (classification, resolution) = self.resolver.classify(&item.value, versions, error);
        let latest = versions.first().map(String::as_str);

        tracing::debug!(
            "{} {:?}: {:?} (best match {:?}, latest {:?})",
            item.name(),
            item.value,
            classification,
            resolution.best_match,
            latest
        );

        let text = self.annotation_text(classification, latest.unwrap_or_default());

        let header = match error {
            Some(message) => format!("**{}**", message),
            None => VERSIONS_HEADER.to_string(),
        };

        let entries = versions
            .iter()
            .enumerate()
            .map(|(i, version)| {
                let is_current = resolution.best_match == Some(version.as_str());
                self.hover_entry(item, version, i == 0, is_current)
            })
            .collect();

        let hover = HoverContent {
            header,
            review_link: format!(
                " _( [Check Reviews]({}) )_",
                review_url(&self.config.links, &item.key)
            ),
            entries,
            is_trusted: true,
        };

        let quick_replace =
            latest.map(|version| ReplaceRequest::for_version(version, item.start, item.end));

        let line_end = buffer.line_end_offset(item.end);
        let range = Range::new(buffer.position_at(item.start), buffer.position_at(line_end));

        RenderedDecoration {
            range,
            annotation_text: (!text.is_empty()).then_some(text),
            hover,
            quick_replace,
            classification,
            best_match: resolution.best_match.map(str::to_string),
        }
    }

    fn annotation_text(&self, classification: Classification, latest: &str) -> String {
        let templates = &self.config.templates;
        match classification {
            Classification::LookupFailed | Classification::Invalid => templates.error.render(latest),
            Classification::UpToDate => templates.compatible.render(""),
            Classification::Compatible => templates.compatible.render(latest),
            Classification::Incompatible => templates.incompatible.render(latest),
        }
    }

    fn hover_entry(&self, item: &Item, version: &str, is_latest: bool, is_current: bool) -> String {
        let request = ReplaceRequest::for_version(version, item.start, item.end);
        let link = match request.to_command_uri(&self.config.replace_command) {
            Ok(uri) => format!("[{}]({})", version, uri),
            Err(e) => {
                tracing::warn!("failed to encode replace command for {}: {}", version, e);
                version.to_string()
            }
        };

        let docs = if is_latest || is_current {
            format!(
                "[(docs)]({})",
                docs_url(&self.config.links, &item.key, version)
            )
        } else {
            String::new()
        };

        if is_current {
            format!("**{}{}**", link, docs)
        } else {
            format!("{}{}", link, docs)
        }
    }
}
