//! Data models
//!
//! Canonical shapes consumed by the view-model. Wire-level variations are
//! adapted at the client boundary before they reach these types.
//! All IDs are `i64`.

pub mod category;

// Re-exports
pub use category::*;
