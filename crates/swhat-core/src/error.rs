//! Unified error handling for swhat core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for swhat core operations.
#[derive(Debug, Error, Clone)]
pub enum SwhatError {
    /// Errors from the domain layer (registry and manifest rules).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl SwhatError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type SwhatResult<T> = Result<T, SwhatError>;
