use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if path is absolute. Callers only pass compile-time backend
    /// conventions.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {:?}",
            path
        );
        Self(path)
    }

    /// Resolve against a root directory.
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    /// Always `/`-separated so reports read the same on every platform.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in self.0.components() {
            if !first {
                f.write_str("/")?;
            }
            write!(f, "{}", component.as_os_str().to_string_lossy())?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for RelativePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
