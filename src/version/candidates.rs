//! Ranking candidate versions against a range

use crate::version::implementation_version::ImplementationVersion;
use crate::version::range::VersionRange;

/// Find the greatest version matched by `range`
///
/// Templates are never selected.
pub fn newest_matching<'a>(
    range: &VersionRange,
    versions: &'a [ImplementationVersion],
) -> Option<&'a ImplementationVersion> {
    versions
        .iter()
        .filter(|v| !v.contains_template_variables() && range.matches(v))
        .max()
}

/// Sort versions from newest to oldest
pub fn sort_newest_first(versions: &mut [ImplementationVersion]) {
    versions.sort_by(|a, b| b.cmp(a));
}
