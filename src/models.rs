use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::compare::compare_packages;
use crate::error::{Error, Result};
use crate::license::collection::LicenseCollection;

/// How a package entered the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DependencyType {
    Production,
    Development,
    #[default]
    Unspecified,
}

impl std::fmt::Display for DependencyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DependencyType::Production => write!(f, "production"),
            DependencyType::Development => write!(f, "development"),
            DependencyType::Unspecified => write!(f, "(none)"),
        }
    }
}

/// The three places a package's licenses are collected from.
#[derive(Debug, Clone, Default)]
pub struct LicenseSources {
    /// `license` / `licenses` fields of `package.json`.
    pub package: LicenseCollection,
    /// `LICENSE*` / `LICENCE*` files.
    pub license: LicenseCollection,
    /// `README*` files.
    pub readme: LicenseCollection,
}

/// Identity and metadata used to build a [`PackageRecord`].
#[derive(Debug, Clone, Default)]
pub struct PackageInfo {
    pub id: String,
    pub name: String,
    pub version: Option<String>,
    pub directory: PathBuf,
    pub repository: Option<String>,
    pub dependency_type: DependencyType,
}

/// One resolved dependency and the licenses found for it.
#[derive(Debug, Clone)]
pub struct PackageRecord {
    pub id: String,
    pub name: String,
    pub version: String,
    pub directory: PathBuf,
    pub repository: String,
    pub dependency_type: DependencyType,
    pub license_sources: LicenseSources,
}

impl PackageRecord {
    pub fn new(info: PackageInfo) -> Result<Self> {
        if info.id.is_empty() {
            return Err(Error::Validation("package id must be defined".into()));
        }
        if info.directory.as_os_str().is_empty() {
            return Err(Error::Validation(format!(
                "package `{}` has no directory",
                info.id
            )));
        }

        Ok(Self {
            id: info.id,
            name: info.name,
            version: info.version.unwrap_or_else(|| "0.0.0".to_string()),
            directory: info.directory,
            repository: normalize_repository(info.repository.as_deref()),
            dependency_type: info.dependency_type,
            license_sources: LicenseSources::default(),
        })
    }

    /// Every license found for this package, sorted and deduplicated;
    /// `["Unknown"]` when nothing was found.
    pub fn summary(&self) -> Vec<String> {
        let sources = &self.license_sources;
        let all: BTreeSet<String> = [&sources.package, &sources.license, &sources.readme]
            .into_iter()
            .flat_map(LicenseCollection::summary)
            .collect();

        if all.is_empty() {
            return vec!["Unknown".to_string()];
        }
        all.into_iter().collect()
    }
}

impl PartialEq for PackageRecord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageRecord {}

impl PartialOrd for PackageRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackageRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_packages(&self.name, &self.version, &other.name, &other.version)
    }
}

/// Turn a repository reference into a browsable URL.
fn normalize_repository(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return "(none)".to_string();
    };
    let url = raw.strip_prefix("git+").unwrap_or(raw);
    let url = url.replacen("git://", "http://", 1);
    url.strip_suffix(".git").unwrap_or(&url).to_string()
}
