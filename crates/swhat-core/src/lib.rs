//! swhat core - domain and application layers.
//!
//! This crate owns the rules for materialising swhat's bundled documents:
//! which templates exist, where each agent backend expects its commands
//! and skills, and how a sync reconciles those files with a project
//! directory. It performs no I/O itself.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            swhat-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (SyncService, TemplateService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │             (Filesystem)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     swhat-adapters (Infrastructure)     │
//! │  (LocalFilesystem, builtin registries)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (TemplateRegistry, Manifest, Backends)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use swhat_core::prelude::*;
//!
//! let service = SyncService::new(assets, Box::new(filesystem));
//! let report = service.sync("./my-project")?;
//! println!("{} created", report.created());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Filesystem, PathState, SyncService, TemplateLookup, TemplateService,
    };
    pub use crate::domain::{
        AssetKind, AssetRegistry, Backend, BackendTarget, NodeKind, SyncReport, TemplateName,
        TemplateRegistry, TemplateSummary, WriteAction, WriteResult,
    };
    pub use crate::error::{SwhatError, SwhatResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
