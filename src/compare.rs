//! Total order over packages: name first, then semantic version.

use std::cmp::Ordering;

use semver::Version;

/// Parse loosely: a leading `v` is dropped and missing minor/patch parts are
/// filled with zeros, so `v1.2` compares as `1.2.0`.
fn parse_loose(raw: &str) -> Option<Version> {
    let trimmed = raw.trim().trim_start_matches(['v', '=']);
    if let Ok(version) = Version::parse(trimmed) {
        return Some(version);
    }

    let (core, rest) = match trimmed.find(['-', '+']) {
        Some(idx) => trimmed.split_at(idx),
        None => (trimmed, ""),
    };
    let parts = core.split('.').count();
    if parts == 0 || parts > 3 {
        return None;
    }
    let padded = format!("{core}{}{rest}", ".0".repeat(3 - parts));
    Version::parse(&padded).ok()
}

/// Compare two version strings. Unparsable versions sort after parsable ones
/// and compare textually among themselves.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (parse_loose(a), parse_loose(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

pub fn compare_packages(name_a: &str, version_a: &str, name_b: &str, version_b: &str) -> Ordering {
    name_a
        .cmp(name_b)
        .then_with(|| compare_versions(version_a, version_b))
}
