use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder substituted with a version string.
pub const VERSION_PLACEHOLDER: &str = "${version}";

/// Maximum template length (security limit)
const MAX_TEMPLATE_LENGTH: usize = 100;

/// Annotation format with a single `${version}` placeholder.
///
/// # Examples
///
/// ```
/// use deps_decor_core::Template;
///
/// let template = Template::new("❗ ${version}");
/// assert_eq!(template.render("2.0.0"), "❗ 2.0.0");
/// assert_eq!(template.render(""), "❗ ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Template(String);

impl Template {
    pub fn new(format: impl Into<String>) -> Self {
        Self(format.into())
    }

    /// Substitutes the first placeholder occurrence with `version`.
    pub fn render(&self, version: &str) -> String {
        self.0.replacen(VERSION_PLACEHOLDER, version, 1)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(Self(validate_template(text)))
    }
}

/// Truncates overlong templates to keep annotations readable
fn validate_template(text: String) -> String {
    let len = text.chars().count();
    if len > MAX_TEMPLATE_LENGTH {
        tracing::warn!(
            "decoration template exceeded max length of {} chars, truncating from {} to {}",
            MAX_TEMPLATE_LENGTH,
            len,
            MAX_TEMPLATE_LENGTH
        );
        text.chars().take(MAX_TEMPLATE_LENGTH).collect()
    } else {
        text
    }
}
