//! Filesystem adapters.

mod dry_run;
mod local;
mod memory;

pub use dry_run::DryRunFilesystem;
pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
