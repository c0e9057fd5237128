//! Application layer for swhat.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (SyncService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but owns no tables
//! itself. Registries and manifest rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{SyncService, TemplateLookup, TemplateService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, PathState};

pub use error::ApplicationError;
