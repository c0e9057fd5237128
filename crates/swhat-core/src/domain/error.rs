// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::{AssetKind, Backend, TemplateName};

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside `SwhatError`, which is `Clone`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown template: '{name}'")]
    UnknownTemplate { name: String },

    // ========================================================================
    // Registry Construction Errors
    // ========================================================================
    #[error("Template '{name}' registered more than once")]
    DuplicateTemplate { name: TemplateName },

    #[error("Template '{name}' has no registered content")]
    MissingTemplate { name: TemplateName },

    #[error("Asset '{kind}' registered more than once for backend '{backend}'")]
    DuplicateAsset { backend: Backend, kind: AssetKind },

    #[error("Backend '{backend}' is missing its {kind} document")]
    MissingAsset { backend: Backend, kind: AssetKind },

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("Duplicate path in manifest: {path}")]
    DuplicatePath { path: String },

    #[error("Manifest is empty")]
    EmptyManifest,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplate { name } => {
                let mut suggestions = vec![format!("No template is named '{}'", name)];
                suggestions.push(format!(
                    "Known templates: {}",
                    TemplateName::ALL
                        .iter()
                        .map(TemplateName::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
                suggestions.push("Try: swhat template --list".into());
                suggestions
            }
            Self::DuplicateTemplate { .. }
            | Self::MissingTemplate { .. }
            | Self::DuplicateAsset { .. }
            | Self::MissingAsset { .. } => vec![
                "The bundled document set is inconsistent".into(),
                "This is a packaging bug, please report it".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Offending path: {}", path),
                "Backend directory conventions must be relative and distinct".into(),
            ],
            Self::EmptyManifest => vec!["No backends are registered".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownTemplate { .. } => ErrorCategory::NotFound,
            Self::DuplicatePath { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
