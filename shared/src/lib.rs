//! Shared types for Mart Admin
//!
//! Canonical data models, error codes and response structures used by
//! both the view-model crate and the HTTP client.

pub mod error;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
