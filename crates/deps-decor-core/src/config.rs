use crate::template::Template;
use serde::{Deserialize, Serialize};

/// Root configuration for decoration rendering.
///
/// Can be supplied by the host as JSON (editor settings, initialization
/// options). All fields fall back to defaults when omitted.
///
/// # Examples
///
/// ```
/// use deps_decor_core::config::DecorConfig;
///
/// let json = r#"{
///     "templates": {
///         "incompatible": "⚠ ${version}"
///     }
/// }"#;
///
/// let config: DecorConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.templates.incompatible.render("2.0.0"), "⚠ 2.0.0");
/// assert_eq!(config.replace_command, "crates.replaceVersion");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DecorConfig {
    #[serde(default)]
    pub templates: TemplateConfig,
    #[serde(default)]
    pub links: LinkConfig,
    #[serde(default = "default_replace_command")]
    pub replace_command: String,
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            templates: TemplateConfig::default(),
            links: LinkConfig::default(),
            replace_command: default_replace_command(),
        }
    }
}

/// Annotation templates for each outcome.
///
/// # Defaults
///
/// - `compatible`: `"👍"`
/// - `incompatible`: `"❗ ${version}"`
/// - `error`: `"❗❗❗ ${version}"`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TemplateConfig {
    #[serde(default = "default_compatible")]
    pub compatible: Template,
    #[serde(default = "default_incompatible")]
    pub incompatible: Template,
    #[serde(default = "default_error")]
    pub error: Template,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            compatible: default_compatible(),
            incompatible: default_incompatible(),
            error: default_error(),
        }
    }
}

/// External link bases used in hover content.
///
/// # Defaults
///
/// - `review_base`: `"https://web.crev.dev/rust-reviews/crate"`
/// - `docs_base`: `"https://docs.rs/crate"`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LinkConfig {
    #[serde(default = "default_review_base")]
    pub review_base: String,
    #[serde(default = "default_docs_base")]
    pub docs_base: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            review_base: default_review_base(),
            docs_base: default_docs_base(),
        }
    }
}

fn default_replace_command() -> String {
    "crates.replaceVersion".to_string()
}

fn default_compatible() -> Template {
    Template::new("👍")
}

fn default_incompatible() -> Template {
    Template::new("❗ ${version}")
}

fn default_error() -> Template {
    Template::new("❗❗❗ ${version}")
}

fn default_review_base() -> String {
    "https://web.crev.dev/rust-reviews/crate".to_string()
}

fn default_docs_base() -> String {
    "https://docs.rs/crate".to_string()
}
