//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `swhat-adapters` crate provides implementations.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::SwhatResult;

/// What currently occupies a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathState {
    Missing,
    File,
    Directory,
    /// Exists but is neither a regular file nor a directory.
    Other,
}

impl fmt::Display for PathState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Missing => "nothing",
            Self::File => "a file",
            Self::Directory => "a directory",
            Self::Other => "a special file",
        })
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `swhat_adapters::filesystem::LocalFilesystem` (production)
/// - `swhat_adapters::filesystem::MemoryFilesystem` (testing)
/// - `swhat_adapters::filesystem::DryRunFilesystem` (`init --dry-run`)
///
/// ## Design Notes
///
/// - Paths arrive already joined onto the sync root
/// - `probe` follows symlinks; a dangling or looping link is an error,
///   not `Missing`
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. No error if present.
    fn create_dir_all(&self, path: &Path) -> SwhatResult<()>;

    /// Write content to a file, replacing anything already there.
    fn write_file(&self, path: &Path, content: &str) -> SwhatResult<()>;

    /// Report what currently occupies `path`.
    fn probe(&self, path: &Path) -> SwhatResult<PathState>;
}
