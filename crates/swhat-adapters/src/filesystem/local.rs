//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use swhat_core::{
    application::{ApplicationError, Filesystem, PathState},
    error::{SwhatError, SwhatResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SwhatResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SwhatResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn probe(&self, path: &Path) -> SwhatResult<PathState> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(PathState::Directory),
            Ok(meta) if meta.is_file() => Ok(PathState::File),
            Ok(_) => Ok(PathState::Other),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // A dangling symlink still occupies the path.
                match std::fs::symlink_metadata(path) {
                    Ok(_) => Err(map_io_error(path, e, "follow symlink")),
                    Err(_) => Ok(PathState::Missing),
                }
            }
            Err(e) => Err(map_io_error(path, e, "inspect path")),
        }
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SwhatError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
