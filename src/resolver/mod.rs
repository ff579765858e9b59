//! Resolution of an installed dependency tree.
//!
//! A [`Resolver`] turns a project directory into a [`DependencyTree`]: an arena
//! of [`PackageNode`]s whose edges are indices, so shared packages and cycles
//! are just repeated [`NodeId`]s.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::Result;
use crate::models::{DependencyType, PackageInfo};

pub mod node;

pub type NodeId = usize;

/// A declared dependency edge.
#[derive(Debug, Clone, PartialEq)]
pub enum Dependency {
    Installed(NodeId),
    /// Declared but not installed; holds the requested range.
    Missing(String),
}

/// One installed package version.
#[derive(Debug, Clone)]
pub struct PackageNode {
    pub id: String,
    pub name: String,
    pub version: Option<String>,
    pub directory: PathBuf,
    pub repository: Option<String>,
    pub dep_type: DependencyType,
    /// License fields plus any extra manifest fields that were requested.
    pub manifest: Map<String, Value>,
    pub dependencies: BTreeMap<String, Dependency>,
}

impl PackageNode {
    pub fn info(&self) -> PackageInfo {
        PackageInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            directory: self.directory.clone(),
            repository: self.repository.clone(),
            dependency_type: self.dep_type,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DependencyTree {
    nodes: Vec<PackageNode>,
    root: NodeId,
}

impl DependencyTree {
    pub fn new(root: PackageNode) -> Self {
        Self {
            nodes: vec![root],
            root: 0,
        }
    }

    pub fn add(&mut self, node: PackageNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &PackageNode {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut PackageNode {
        &mut self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Follow the root's `devDependencies`.
    pub include_dev: bool,
    /// Manifest fields copied into [`PackageNode::manifest`] besides the
    /// license fields.
    pub extra_manifest_fields: Vec<String>,
}

pub trait Resolver {
    fn resolve(&self, root: &Path, options: &ResolveOptions) -> Result<DependencyTree>;
}
