//! In-memory filesystem adapter for testing and dry runs.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use swhat_core::{
    application::{ApplicationError, Filesystem, PathState},
    error::SwhatResult,
};

/// In-memory filesystem. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SwhatResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: current,
                    reason: "Not a directory".into(),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SwhatResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Is a directory".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn probe(&self, path: &Path) -> SwhatResult<PathState> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        Ok(if inner.files.contains_key(path) {
            PathState::File
        } else if inner.directories.contains(path) {
            PathState::Directory
        } else {
            PathState::Missing
        })
    }
}
