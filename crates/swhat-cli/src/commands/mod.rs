//! Command handlers. Each one translates parsed arguments into service
//! calls and renders the result; no business logic lives here.

pub mod completions;
pub mod config;
pub mod init;
pub mod template;
