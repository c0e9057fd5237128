pub mod backend;
pub mod common;
pub mod manifest;
pub mod registry;
pub mod report;

pub use crate::domain::DomainError;
pub use backend::BackendTarget;
pub use manifest::{Manifest, ManifestEntry};
pub use registry::{AssetRegistry, TemplateRegistry};
pub use report::{SyncReport, WriteResult};
