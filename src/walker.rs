//! Dependency graph walk: one license-annotated [`PackageRecord`] per unique
//! package id, sorted by name and version.
//!
//! The walk is a breadth-first worklist. Each node id is claimed in the
//! visited map before its discovery future is issued, and discovery futures
//! run concurrently in a [`FuturesUnordered`] set. The walk ends when the
//! worklist is empty and no discovery is in flight.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};

use crate::error::{Error, Result};
use crate::finder;
use crate::license::identify::LicenseIdentifier;
use crate::license::source::{manifest_sources, FileSource};
use crate::models::{DependencyType, PackageRecord};
use crate::resolver::{Dependency, DependencyTree, PackageNode, ResolveOptions, Resolver};

const LICENSE_PATTERNS: &[&str] = &["license*", "licence*"];
const README_PATTERNS: &[&str] = &["readme*"];

#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Leave out development dependencies.
    pub production_only: bool,
    /// Maximum number of edges from the root; `None` is unbounded.
    pub max_depth: Option<usize>,
    pub extra_manifest_fields: Vec<String>,
}

/// A non-fatal problem noticed during the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub package: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.package, self.message)
    }
}

#[derive(Debug)]
pub struct WalkReport {
    pub packages: Vec<PackageRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

enum VisitState {
    Claimed,
    Complete(Box<PackageRecord>),
}

pub struct Walker<R> {
    resolver: Arc<R>,
    identifier: Arc<LicenseIdentifier>,
}

impl<R: Resolver + Send + Sync + 'static> Walker<R> {
    pub fn new(resolver: R, identifier: Arc<LicenseIdentifier>) -> Self {
        Self {
            resolver: Arc::new(resolver),
            identifier,
        }
    }

    pub async fn walk(&self, root: &Path, options: &WalkOptions) -> Result<WalkReport> {
        let tree = self.resolve(root, options).await?;

        let mut visited: HashMap<String, VisitState> = HashMap::new();
        let mut diagnostics = Vec::new();
        let mut worklist = VecDeque::from([(tree.root(), 0usize)]);
        let mut in_flight = FuturesUnordered::new();

        loop {
            while let Some((index, depth)) = worklist.pop_front() {
                let node = tree.node(index);
                if visited.contains_key(&node.id) {
                    continue;
                }
                visited.insert(node.id.clone(), VisitState::Claimed);
                in_flight.push(discover(node, Arc::clone(&self.identifier)));

                if options.max_depth.is_some_and(|max| depth >= max) {
                    continue;
                }
                for (name, dependency) in &node.dependencies {
                    match dependency {
                        Dependency::Missing(range) => {
                            tracing::warn!(
                                package = %node.id,
                                dependency = %name,
                                "declared dependency is not installed, skipping"
                            );
                            diagnostics.push(Diagnostic {
                                package: node.id.clone(),
                                message: format!("dependency {name}@{range} is not installed"),
                            });
                        }
                        Dependency::Installed(child) => {
                            let is_dev = tree.node(*child).dep_type == DependencyType::Development;
                            if options.production_only && is_dev {
                                continue;
                            }
                            worklist.push_back((*child, depth + 1));
                        }
                    }
                }
            }

            match in_flight.next().await {
                Some(result) => {
                    let record = result?;
                    visited.insert(record.id.clone(), VisitState::Complete(Box::new(record)));
                }
                None => break,
            }
        }

        let mut packages: Vec<PackageRecord> = visited
            .into_values()
            .filter_map(|state| match state {
                VisitState::Complete(record) => Some(*record),
                VisitState::Claimed => None,
            })
            .collect();
        packages.sort();

        Ok(WalkReport {
            packages,
            diagnostics,
        })
    }

    /// Resolution reads manifests synchronously, so it runs on the blocking pool.
    async fn resolve(&self, root: &Path, options: &WalkOptions) -> Result<DependencyTree> {
        let resolver = Arc::clone(&self.resolver);
        let dir = root.to_path_buf();
        let resolve_options = ResolveOptions {
            include_dev: !options.production_only,
            extra_manifest_fields: options.extra_manifest_fields.clone(),
        };

        tokio::task::spawn_blocking(move || resolver.resolve(&dir, &resolve_options))
            .await
            .map_err(|e| Error::io(root, std::io::Error::other(e)))?
    }
}

/// Build the record for one node: license files, readme files and manifest
/// fields are gathered concurrently.
async fn discover(node: &PackageNode, identifier: Arc<LicenseIdentifier>) -> Result<PackageRecord> {
    let mut record = PackageRecord::new(node.info())?;
    let dir = record.directory.clone();

    let (license_files, readme_files, declared) = futures::try_join!(
        finder::find(&dir, LICENSE_PATTERNS),
        finder::find(&dir, README_PATTERNS),
        async { manifest_sources(&node.manifest) },
    )?;

    let to_sources = |files: Vec<PathBuf>| -> Vec<FileSource> {
        files
            .into_iter()
            .map(|relative| FileSource::new(dir.join(relative), Arc::clone(&identifier)))
            .collect()
    };
    let license_sources = to_sources(license_files);
    let readme_sources = to_sources(readme_files);

    let sources = &mut record.license_sources;
    for source in declared {
        sources.package.add(source);
    }
    futures::try_join!(
        sources.license.add_many(license_sources),
        sources.readme.add_many(readme_sources),
    )?;

    tracing::debug!(
        package = %record.id,
        license_files = record.license_sources.license.len(),
        readme_files = record.license_sources.readme.len(),
        licenses = ?record.summary(),
        "collected licenses"
    );
    Ok(record)
}
