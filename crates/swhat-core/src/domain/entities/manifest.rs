use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{
    entities::{
        backend::BackendTarget, common::RelativePath, registry::AssetRegistry, report::NodeKind,
    },
    error::DomainError,
    value_objects::{AssetKind, Backend},
};

/// Project-local directory that scopes swhat's working files.
pub const WORKSPACE_DIR: &str = ".swhat";

/// How an entry reconciles with whatever is already on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncStrategy {
    /// Materialise only if absent. An existing path is never touched.
    CreateOnly,
    /// Always materialise, replacing previous content.
    Overwrite,
}

/// What an entry puts on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestNode {
    Directory,
    File { content: &'static str },
}

impl ManifestNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Directory => NodeKind::Directory,
            Self::File { .. } => NodeKind::File,
        }
    }
}

/// Why an entry is in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EntryOrigin {
    WorkspaceMarker,
    Asset { backend: Backend, kind: AssetKind },
}

/// One path to synchronise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub path: RelativePath,
    pub node: ManifestNode,
    pub strategy: SyncStrategy,
    pub origin: EntryOrigin,
}

impl ManifestEntry {
    /// The `.swhat/` directory. Owned by the user once it exists.
    pub fn workspace_marker() -> Self {
        Self {
            path: RelativePath::new(WORKSPACE_DIR),
            node: ManifestNode::Directory,
            strategy: SyncStrategy::CreateOnly,
            origin: EntryOrigin::WorkspaceMarker,
        }
    }

    /// A bundled document. Always forced to match the current content.
    pub fn asset(target: &BackendTarget, kind: AssetKind, content: &'static str) -> Self {
        Self {
            path: target.asset_path(kind),
            node: ManifestNode::File { content },
            strategy: SyncStrategy::Overwrite,
            origin: EntryOrigin::Asset {
                backend: target.backend,
                kind,
            },
        }
    }
}

/// Ordered list of everything one `sync` writes.
///
/// Built fresh per invocation from the compiled-in registry, so it always
/// describes the running binary's documents.
#[derive(Debug, Clone)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Workspace marker first, then each backend in declaration order with
    /// its documents in [`AssetKind::ALL`] order.
    pub fn build(assets: &AssetRegistry) -> Result<Self, DomainError> {
        let targets = BackendTarget::all();
        let mut entries = Vec::with_capacity(1 + assets.len());
        entries.push(ManifestEntry::workspace_marker());

        for target in &targets {
            for (kind, content) in assets.documents(target.backend) {
                entries.push(ManifestEntry::asset(target, kind, content));
            }
        }

        let manifest = Self::from_entries(entries);
        manifest.validate()?;
        Ok(manifest)
    }

    /// Wrap pre-built entries without validating them.
    pub fn from_entries(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyManifest);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: entry.path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.node, ManifestNode::File { .. }))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ManifestEntry;
    type IntoIter = std::slice::Iter<'a, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
