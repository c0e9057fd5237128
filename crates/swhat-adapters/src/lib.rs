//! Infrastructure adapters for swhat.
//!
//! This crate implements the ports defined in `swhat_core::application::ports`
//! and owns the compiled-in documents. It contains all I/O.

pub mod builtin;
pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{DryRunFilesystem, LocalFilesystem, MemoryFilesystem};
