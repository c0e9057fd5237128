//! Filesystem that reads through to a real one but keeps every write in memory.

use std::path::Path;

use swhat_core::{
    application::{Filesystem, PathState},
    error::SwhatResult,
};
use tracing::debug;

use super::MemoryFilesystem;

/// Previews a sync without touching disk.
///
/// Probes consult the overlay first and fall back to `base`, so a dry run
/// reports exactly the actions a real run would take from the current state.
#[derive(Debug, Clone)]
pub struct DryRunFilesystem<F> {
    base: F,
    overlay: MemoryFilesystem,
}

impl<F: Filesystem> DryRunFilesystem<F> {
    pub fn new(base: F) -> Self {
        Self {
            base,
            overlay: MemoryFilesystem::new(),
        }
    }

    /// Writes the run would have made.
    pub fn overlay(&self) -> &MemoryFilesystem {
        &self.overlay
    }
}

impl<F: Filesystem> Filesystem for DryRunFilesystem<F> {
    fn create_dir_all(&self, path: &Path) -> SwhatResult<()> {
        debug!(path = %path.display(), "dry run: would create directory");
        self.overlay.create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> SwhatResult<()> {
        debug!(path = %path.display(), "dry run: would write file");
        self.overlay.write_file(path, content)
    }

    fn probe(&self, path: &Path) -> SwhatResult<PathState> {
        match self.overlay.probe(path)? {
            PathState::Missing => self.base.probe(path),
            state => Ok(state),
        }
    }
}
