//! Application layer errors.
//!
//! These errors represent failures in orchestration, not registry rules.
//! Registry and manifest errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::PathState;
use crate::domain::{NodeKind, TemplateSummary, listing_lines};
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Requested template has no case-insensitive match.
    #[error("Template not found: {requested}")]
    TemplateNotFound {
        requested: String,
        available: Vec<TemplateSummary>,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Path exists but is not the kind of entry the manifest needs there.
    #[error("Path conflict at {path}: expected {expected:?}, found {found}")]
    PathConflict {
        path: PathBuf,
        expected: NodeKind,
        found: PathState,
    },

    /// Shared adapter state was poisoned by a panicking thread.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { available, .. } => listing_lines(available),
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::PathConflict { path, expected, .. } => vec![
                format!(
                    "'{}' must be a {}",
                    path.display(),
                    match expected {
                        NodeKind::Directory => "directory",
                        NodeKind::File => "regular file",
                    }
                ),
                "Move or remove the conflicting entry and run the command again".into(),
            ],
            Self::LockPoisoned => vec!["This is likely a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::PathConflict { .. } => ErrorCategory::Filesystem,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
