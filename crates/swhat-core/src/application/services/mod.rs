//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! the two use cases: "sync bundled documents" and "resolve template".

pub mod sync_service;
pub mod template_service;

pub use sync_service::SyncService;
pub use template_service::{TemplateLookup, TemplateService};
