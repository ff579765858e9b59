use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::models::DependencyType;

use super::{Dependency, DependencyTree, NodeId, PackageNode, ResolveOptions, Resolver};

/// Manifest fields always kept on a [`PackageNode`].
const LICENSE_FIELDS: &[&str] = &["license", "licenses"];

/// Reads an installed Node project: `package.json` plus `node_modules/`.
#[derive(Debug, Default)]
pub struct NodeResolver;

impl NodeResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for NodeResolver {
    fn resolve(&self, root: &Path, options: &ResolveOptions) -> Result<DependencyTree> {
        let root_dir = root.canonicalize().map_err(|_| Error::NotFound {
            path: root.to_path_buf(),
        })?;
        if !root_dir.join("package.json").is_file() {
            return Err(Error::NotFound { path: root_dir });
        }

        let manifest = read_manifest(&root_dir)?;
        let fallback = root_dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("root")
            .to_string();
        let dev_edges = if options.include_dev {
            declared(&manifest, "devDependencies")
        } else {
            Vec::new()
        };

        let root_node = package_node(&root_dir, &manifest, &fallback, DependencyType::Production, options);
        let mut builder = TreeBuilder {
            tree: DependencyTree::new(root_node),
            by_dir: HashMap::from([(root_dir.clone(), 0)]),
            queue: VecDeque::from([(0, manifest)]),
            root_dir,
            options,
        };

        // Everything reachable through production edges is claimed first, so a
        // package shared between both sides stays tagged as production.
        builder.drain()?;
        let root = builder.tree.root();
        for (name, range) in dev_edges {
            if builder.tree.node(root).dependencies.contains_key(&name) {
                continue;
            }
            builder.link(root, &name, &range, false, DependencyType::Development)?;
        }
        builder.drain()?;

        tracing::debug!(packages = builder.tree.len(), "resolved dependency tree");
        Ok(builder.tree)
    }
}

struct TreeBuilder<'a> {
    tree: DependencyTree,
    by_dir: HashMap<PathBuf, NodeId>,
    queue: VecDeque<(NodeId, Map<String, Value>)>,
    root_dir: PathBuf,
    options: &'a ResolveOptions,
}

impl TreeBuilder<'_> {
    fn drain(&mut self) -> Result<()> {
        while let Some((id, manifest)) = self.queue.pop_front() {
            let dep_type = self.tree.node(id).dep_type;
            let optional: Vec<String> = declared(&manifest, "optionalDependencies")
                .into_iter()
                .map(|(name, _)| name)
                .collect();

            let mut edges = declared(&manifest, "dependencies");
            for (name, range) in declared(&manifest, "optionalDependencies") {
                if !edges.iter().any(|(n, _)| *n == name) {
                    edges.push((name, range));
                }
            }

            for (name, range) in edges {
                let is_optional = optional.contains(&name);
                self.link(id, &name, &range, is_optional, dep_type)?;
            }
        }
        Ok(())
    }

    fn link(
        &mut self,
        parent: NodeId,
        name: &str,
        range: &str,
        optional: bool,
        dep_type: DependencyType,
    ) -> Result<()> {
        let from = self.tree.node(parent).directory.clone();
        let Some(found) = locate(&from, &self.root_dir, name) else {
            if !optional {
                self.tree
                    .node_mut(parent)
                    .dependencies
                    .insert(name.to_string(), Dependency::Missing(range.to_string()));
            }
            return Ok(());
        };
        let dir = found.canonicalize().map_err(|e| Error::io(&found, e))?;

        let child = match self.by_dir.get(&dir) {
            Some(&id) => id,
            None => {
                let manifest = read_manifest(&dir)?;
                let node = package_node(&dir, &manifest, name, dep_type, self.options);
                let id = self.tree.add(node);
                self.by_dir.insert(dir, id);
                self.queue.push_back((id, manifest));
                id
            }
        };

        self.tree
            .node_mut(parent)
            .dependencies
            .insert(name.to_string(), Dependency::Installed(child));
        Ok(())
    }
}

/// Node-style lookup: `<dir>/node_modules/<name>`, then each ancestor's
/// `node_modules`, never looking above the project root.
fn locate(from: &Path, root: &Path, name: &str) -> Option<PathBuf> {
    for dir in from.ancestors() {
        if dir.file_name().is_some_and(|n| n == "node_modules") {
            continue;
        }
        let candidate = dir.join("node_modules").join(name);
        if candidate.join("package.json").is_file() {
            return Some(candidate);
        }
        if dir == root {
            break;
        }
    }
    None
}

fn read_manifest(dir: &Path) -> Result<Map<String, Value>> {
    let path = dir.join("package.json");
    let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    serde_json::from_str(&content).map_err(|source| Error::Manifest { path, source })
}

/// `(name, range)` pairs of a dependency section.
fn declared(manifest: &Map<String, Value>, section: &str) -> Vec<(String, String)> {
    manifest
        .get(section)
        .and_then(Value::as_object)
        .map(|deps| {
            deps.iter()
                .map(|(name, range)| {
                    let range = range
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or_else(|| range.to_string());
                    (name.clone(), range)
                })
                .collect()
        })
        .unwrap_or_default()
}

fn package_node(
    dir: &Path,
    manifest: &Map<String, Value>,
    fallback_name: &str,
    dep_type: DependencyType,
    options: &ResolveOptions,
) -> PackageNode {
    let name = manifest
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(fallback_name)
        .to_string();
    let version = manifest
        .get("version")
        .and_then(Value::as_str)
        .map(str::to_string);
    let id = format!("{}@{}", name, version.as_deref().unwrap_or("0.0.0"));

    let repository = match manifest.get("repository") {
        Some(Value::String(url)) => Some(url.clone()),
        Some(Value::Object(repo)) => repo.get("url").and_then(Value::as_str).map(str::to_string),
        _ => None,
    };

    let kept = LICENSE_FIELDS
        .iter()
        .copied()
        .chain(options.extra_manifest_fields.iter().map(String::as_str));
    let mut fields = Map::new();
    for field in kept {
        if let Some(value) = manifest.get(field) {
            fields.insert(field.to_string(), value.clone());
        }
    }

    PackageNode {
        id,
        name,
        version,
        directory: dir.to_path_buf(),
        repository,
        dep_type,
        manifest: fields,
        dependencies: Default::default(),
    }
}
