// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for swhat.
//!
//! This module contains pure logic with ZERO I/O. Filesystem access is
//! handled via the `Filesystem` port defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable tables**: Registries are built once and never mutated
//! - **Closed sets**: Templates, backends and documents are enums, not strings
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    backend::BackendTarget,
    common::RelativePath,
    manifest::{
        EntryOrigin, Manifest, ManifestEntry, ManifestNode, SyncStrategy, WORKSPACE_DIR,
    },
    registry::{
        AssetRegistry, AssetRegistryBuilder, TemplateEntry, TemplateRegistry,
        TemplateRegistryBuilder, TemplateSummary, listing_lines,
    },
    report::{NodeKind, SyncReport, WriteAction, WriteResult},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{AssetKind, AssetLocation, Backend, TemplateName};
