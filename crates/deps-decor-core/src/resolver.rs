//! Requirement-to-candidate matching.
//!
//! Picks the best published version for a declared requirement and derives
//! the [`Classification`] the composer renders. Nothing here fails: a
//! requirement that does not parse is reported as [`Classification::Invalid`].

use crate::types::Classification;
use semver::{Version, VersionReq};

/// Best match for a requirement within a version list.
///
/// `best_match` borrows the original string from the version list so it can
/// be compared verbatim against other entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution<'a> {
    pub satisfies: bool,
    pub best_match: Option<&'a str>,
}

/// Ecosystem-specific requirement matching.
pub trait VersionResolver: Send + Sync {
    /// Check if a requirement string is a syntactically valid version range.
    fn is_valid_requirement(&self, requirement: &str) -> bool;

    /// Find the highest entry of `versions` satisfying `requirement`.
    ///
    /// Invalid requirements and empty lists both yield an empty resolution.
    fn resolve<'a>(&self, requirement: &str, versions: &'a [String]) -> Resolution<'a>;

    /// Classify a requirement against versions listed newest-first.
    ///
    /// An upstream `error` takes precedence over everything the resolver
    /// finds. The pair is up to date only when a latest version exists and
    /// equals the best match.
    fn classify<'a>(
        &self,
        requirement: &str,
        versions: &'a [String],
        error: Option<&str>,
    ) -> (Classification, Resolution<'a>) {
        let resolution = self.resolve(requirement, versions);
        let latest = versions.first().map(String::as_str);

        let classification = if error.is_some() {
            Classification::LookupFailed
        } else if !self.is_valid_requirement(requirement) {
            Classification::Invalid
        } else if latest.is_some() && latest == resolution.best_match {
            Classification::UpToDate
        } else if resolution.satisfies {
            Classification::Compatible
        } else {
            Classification::Incompatible
        };

        (classification, resolution)
    }
}

/// Cargo-flavoured semver matching backed by the `semver` crate.
///
/// Bare requirements (`1.2`) behave like caret requirements, and pre-release
/// versions only match comparators that name a pre-release on the same
/// `major.minor.patch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverResolver;

impl VersionResolver for SemverResolver {
    fn is_valid_requirement(&self, requirement: &str) -> bool {
        VersionReq::parse(requirement).is_ok()
    }

    fn resolve<'a>(&self, requirement: &str, versions: &'a [String]) -> Resolution<'a> {
        let Ok(req) = VersionReq::parse(requirement) else {
            return Resolution::default();
        };

        // Reversed so that among versions of equal precedence the
        // newest-listed entry wins. Build metadata does not count.
        let best_match = versions
            .iter()
            .rev()
            .filter_map(|raw| match Version::parse(raw) {
                Ok(version) => Some((version, raw.as_str())),
                Err(e) => {
                    tracing::debug!("skipping unparsable version {:?}: {}", raw, e);
                    None
                }
            })
            .filter(|(version, _)| req.matches(version))
            .max_by(|(a, _), (b, _)| a.cmp_precedence(b))
            .map(|(_, raw)| raw);

        Resolution {
            satisfies: best_match.is_some(),
            best_match,
        }
    }
}
