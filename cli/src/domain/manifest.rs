//! Version manifest parsing and comparison.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::cmp::Ordering;

use crate::domain::error::ManifestError;

/// The only part of an installation's `package.json` the launcher cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionManifest {
    pub version: String,
}

impl VersionManifest {
    /// Parse a manifest from a JSON object, matching `version` case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Parse` if the document is not a JSON object or
    /// has no non-empty string `version` field.
    pub fn parse(json: &str) -> Result<Self, ManifestError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ManifestError::Parse(e.to_string()))?;
        let object = value
            .as_object()
            .ok_or_else(|| ManifestError::Parse("expected a JSON object".to_string()))?;
        let field = object
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("version"))
            .map(|(_, v)| v)
            .ok_or_else(|| ManifestError::Parse("missing \"version\" field".to_string()))?;
        let version = field
            .as_str()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                ManifestError::Parse("\"version\" must be a non-empty string".to_string())
            })?;
        Ok(Self {
            version: version.to_string(),
        })
    }

    /// Whether `remote` should be offered as an update over `self`.
    ///
    /// Any difference counts, including a remote that is *older* than the
    /// local install (rollback). Direction is deliberately not checked.
    #[must_use]
    pub fn differs_from(&self, remote: &VersionManifest) -> bool {
        compare_versions(&self.version, &remote.version) != Ordering::Equal
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Segment<'a> {
    Number(u64),
    Text(&'a str),
}

fn segments(version: &str) -> Vec<Segment<'_>> {
    version
        .trim()
        .trim_start_matches(['v', 'V'])
        .split(['.', '-', '+'])
        .map(|s| s.parse::<u64>().map_or(Segment::Text(s), Segment::Number))
        .collect()
}

/// Order two version strings.
///
/// Valid semver strings are ordered by semver rules. Anything else falls back
/// to a per-segment comparison where numeric segments compare as numbers
/// (`1.10` > `1.9`, `1.02` == `1.2`) and missing trailing segments count as `0`.
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let strip = |s: &str| s.trim().trim_start_matches(['v', 'V']).to_string();
    if let (Ok(left), Ok(right)) = (
        semver::Version::parse(&strip(a)),
        semver::Version::parse(&strip(b)),
    ) {
        return left.cmp(&right);
    }

    let left = segments(a);
    let right = segments(b);
    let len = left.len().max(right.len());
    for i in 0..len {
        let l = left.get(i).unwrap_or(&Segment::Number(0));
        let r = right.get(i).unwrap_or(&Segment::Number(0));
        match l.cmp(r) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}
