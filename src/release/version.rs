//! Tag parsing and semantic version ordering.

use super::Release;
use crate::error::{ReleaseError, Result};
use semver::Version;

/// Parse a release tag as a semantic version.
///
/// Accepts an optional leading `v`/`V` and a shortened core (`1` or `1.2`),
/// which is padded with zeros. Leading zeros in the core are dropped
/// (`v2023.01.05` is 2023.1.5). Pre-release and build metadata are kept.
pub fn parse_tag(tag: &str) -> Result<Version> {
    let trimmed = tag.trim();
    let bare = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);

    let (core, suffix) = bare.split_at(bare.find(['-', '+']).unwrap_or(bare.len()));
    let numbers = core
        .split('.')
        .map(|part| part.parse::<u64>().ok())
        .collect::<Option<Vec<_>>>();
    let normalized = match numbers.as_deref() {
        Some([major]) => format!("{major}.0.0{suffix}"),
        Some([major, minor]) => format!("{major}.{minor}.0{suffix}"),
        Some([major, minor, patch]) => format!("{major}.{minor}.{patch}{suffix}"),
        // Let semver report what is wrong with it
        _ => bare.to_string(),
    };

    Version::parse(&normalized).map_err(|source| ReleaseError::InvalidVersion {
        tag: tag.to_string(),
        source,
    })
}

/// Sort releases ascending by the semantic version of their tags.
///
/// Every tag is parsed before sorting; one unparseable tag fails the whole
/// call. Build metadata does not affect the order, and the sort is stable.
pub fn sort_releases(releases: Vec<Release>) -> Result<Vec<Release>> {
    let mut keyed = releases
        .into_iter()
        .map(|release| parse_tag(&release.tag).map(|version| (version, release)))
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(a, _), (b, _)| a.cmp_precedence(b));
    Ok(keyed.into_iter().map(|(_, release)| release).collect())
}
