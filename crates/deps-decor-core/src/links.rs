use crate::config::LinkConfig;

/// Returns the review page URL for a dependency.
///
/// Quotes are stripped from `key` before it is percent-encoded.
///
/// # Examples
///
/// ```
/// use deps_decor_core::config::LinkConfig;
/// use deps_decor_core::links::review_url;
///
/// let links = LinkConfig::default();
/// assert_eq!(
///     review_url(&links, "\"serde\""),
///     "https://web.crev.dev/rust-reviews/crate/serde"
/// );
/// ```
pub fn review_url(links: &LinkConfig, key: &str) -> String {
    format!(
        "{}/{}",
        links.review_base,
        urlencoding::encode(&key.replace('"', ""))
    )
}

/// Returns the documentation URL for one version of a dependency.
pub fn docs_url(links: &LinkConfig, key: &str, version: &str) -> String {
    format!(
        "{}/{}/{}",
        links.docs_base,
        urlencoding::encode(&key.replace('"', "")),
        urlencoding::encode(version)
    )
}
