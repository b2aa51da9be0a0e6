//! View-model error types

use thiserror::Error;

use crate::source::SourceError;
use crate::validation::ValidationError;

/// Error returned by view-model operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Rejected locally; nothing was sent to the source
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The source failed; local state is unchanged
    #[error("category source error: {0}")]
    Source(#[from] SourceError),

    /// Another submission has not settled yet
    #[error("a category change is already being submitted")]
    MutationInFlight,
}

impl TreeError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for view-model operations
pub type TreeResult<T> = Result<T, TreeError>;
