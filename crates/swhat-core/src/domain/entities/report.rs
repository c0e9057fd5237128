use std::fmt;

use serde::Serialize;

use crate::domain::entities::{common::RelativePath, manifest::EntryOrigin};

/// What `sync` did to one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteAction {
    Created,
    Updated,
    Skipped,
}

impl WriteAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Updated => "Updated",
            Self::Skipped => "Skipped",
        }
    }
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

/// Outcome for a single manifest entry. `path` is relative to the sync root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteResult {
    pub path: RelativePath,
    pub kind: NodeKind,
    pub action: WriteAction,
    pub origin: EntryOrigin,
}

/// Every [`WriteResult`] of one `sync`, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    results: Vec<WriteResult>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: WriteResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[WriteResult] {
        &self.results
    }

    pub fn count(&self, action: WriteAction) -> usize {
        self.results.iter().filter(|r| r.action == action).count()
    }

    pub fn created(&self) -> usize {
        self.count(WriteAction::Created)
    }

    pub fn updated(&self) -> usize {
        self.count(WriteAction::Updated)
    }

    pub fn skipped(&self) -> usize {
        self.count(WriteAction::Skipped)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
