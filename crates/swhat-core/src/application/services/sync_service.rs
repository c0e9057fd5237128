//! Sync Service - installs swhat's documents into a project.
//!
//! Each run:
//! 1. Builds the manifest from the asset registry
//! 2. Reconciles every entry with the filesystem, in manifest order
//! 3. Reports what happened to each path
//!
//! The first failure aborts the run. Entries already written stay on disk.

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, PathState},
    },
    domain::{
        AssetRegistry, Manifest, ManifestEntry, ManifestNode, NodeKind, SyncReport, SyncStrategy,
        WriteAction, WriteResult,
    },
    error::SwhatResult,
};

/// Materialises the workspace marker and every backend document.
pub struct SyncService {
    assets: AssetRegistry,
    filesystem: Box<dyn Filesystem>,
}

impl SyncService {
    /// Create a new sync service over the given documents and filesystem.
    pub fn new(assets: AssetRegistry, filesystem: Box<dyn Filesystem>) -> Self {
        Self { assets, filesystem }
    }

    /// The manifest a sync would apply. Already validated.
    pub fn manifest(&self) -> SwhatResult<Manifest> {
        Ok(Manifest::build(&self.assets)?)
    }

    /// Synchronise `root` with the bundled documents.
    ///
    /// `root` does not need to exist. The workspace marker is only created
    /// when absent; documents are always rewritten.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn sync(&self, root: impl AsRef<Path>) -> SwhatResult<SyncReport> {
        let root = root.as_ref();
        let manifest = self.manifest()?;
        debug!(entries = manifest.len(), "Manifest built");

        let mut report = SyncReport::new();
        for entry in &manifest {
            let action = self.apply(root, entry)?;
            debug!(path = %entry.path, %action, "Entry synchronised");

            report.push(WriteResult {
                path: entry.path.clone(),
                kind: entry.node.kind(),
                action,
                origin: entry.origin,
            });
        }

        info!(
            created = report.created(),
            updated = report.updated(),
            skipped = report.skipped(),
            "Sync completed"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn apply(&self, root: &Path, entry: &ManifestEntry) -> SwhatResult<WriteAction> {
        let path = entry.path.under(root);
        let expected = entry.node.kind();

        match entry.strategy {
            SyncStrategy::CreateOnly => {
                if self.is_present(&path, expected)? {
                    return Ok(WriteAction::Skipped);
                }
                self.ensure_parent(&path, &entry.node)?;
                self.materialise(&path, &entry.node)?;
                Ok(WriteAction::Created)
            }
            SyncStrategy::Overwrite => {
                self.ensure_parent(&path, &entry.node)?;
                let existed = self.is_present(&path, expected)?;
                self.materialise(&path, &entry.node)?;
                Ok(if existed {
                    WriteAction::Updated
                } else {
                    WriteAction::Created
                })
            }
        }
    }

    /// `true` if `path` already holds the expected kind, `false` if empty.
    fn is_present(&self, path: &Path, expected: NodeKind) -> SwhatResult<bool> {
        match (self.filesystem.probe(path)?, expected) {
            (PathState::Missing, _) => Ok(false),
            (PathState::Directory, NodeKind::Directory) | (PathState::File, NodeKind::File) => {
                Ok(true)
            }
            (found, expected) => {
                warn!(path = %path.display(), %found, "Path occupied by the wrong kind of entry");
                Err(ApplicationError::PathConflict {
                    path: path.to_path_buf(),
                    expected,
                    found,
                }
                .into())
            }
        }
    }

    fn ensure_parent(&self, path: &Path, node: &ManifestNode) -> SwhatResult<()> {
        match (node, path.parent()) {
            (ManifestNode::File { .. }, Some(parent)) => self.filesystem.create_dir_all(parent),
            _ => Ok(()),
        }
    }

    fn materialise(&self, path: &Path, node: &ManifestNode) -> SwhatResult<()> {
        match node {
            ManifestNode::Directory => self.filesystem.create_dir_all(path),
            ManifestNode::File { content } => self.filesystem.write_file(path, content),
        }
    }
}
