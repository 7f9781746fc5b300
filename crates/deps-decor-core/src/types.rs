use serde::{Deserialize, Serialize};

/// One dependency occurrence in a manifest buffer.
///
/// `start` and `end` are byte offsets of the requirement's text span,
/// including any surrounding quotes, as produced by the manifest parser.
///
/// # Examples
///
/// ```
/// use deps_decor_core::Item;
///
/// let item = Item::new("\"serde\"", "1.0", 8, 13);
/// assert_eq!(item.name(), "serde");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub key: String,
    pub value: String,
    pub start: usize,
    pub end: usize,
}

impl Item {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            start,
            end,
        }
    }

    /// Dependency name with quote characters stripped.
    pub fn name(&self) -> String {
        self.key.replace('"', "")
    }
}

/// Outcome of checking one requirement against its published versions.
///
/// Derived fresh on every pass; nothing is retained between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// The host reported an upstream failure for this dependency.
    LookupFailed,
    /// The requirement is not a valid version range.
    Invalid,
    /// The latest published version is the best match.
    UpToDate,
    /// A newer version exists and an older one still satisfies the requirement.
    Compatible,
    /// A newer version exists and nothing published satisfies the requirement.
    Incompatible,
}
