//! Category source: the collaborator that owns canonical category data

use std::sync::Arc;

use async_trait::async_trait;
use shared::error::{AppError, ErrorCode};
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use thiserror::Error;

/// Remote failure relayed from the source
///
/// Opaque to the view-model: it carries the transport or server message
/// and, when the server sent one, its error code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SourceError {
    pub code: Option<ErrorCode>,
    pub message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }
}

impl From<AppError> for SourceError {
    fn from(err: AppError) -> Self {
        Self::with_code(err.code, err.message)
    }
}

/// Supplier of the category tree and sink for structural edits
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Full forest with nested children
    async fn fetch_tree(&self) -> Result<Vec<Category>, SourceError>;

    /// Root categories only
    async fn fetch_roots(&self) -> Result<Vec<Category>, SourceError>;

    /// Direct children of `parent_id`
    async fn fetch_children(&self, parent_id: i64) -> Result<Vec<Category>, SourceError>;

    async fn create(&self, payload: &CategoryCreate) -> Result<Category, SourceError>;

    async fn update(&self, payload: &CategoryUpdate) -> Result<Category, SourceError>;

    async fn delete(&self, id: i64) -> Result<(), SourceError>;
}

#[async_trait]
impl<S: CategorySource + ?Sized> CategorySource for Arc<S> {
    async fn fetch_tree(&self) -> Result<Vec<Category>, SourceError> {
        (**self).fetch_tree().await
    }

    async fn fetch_roots(&self) -> Result<Vec<Category>, SourceError> {
        (**self).fetch_roots().await
    }

    async fn fetch_children(&self, parent_id: i64) -> Result<Vec<Category>, SourceError> {
        (**self).fetch_children(parent_id).await
    }

    async fn create(&self, payload: &CategoryCreate) -> Result<Category, SourceError> {
        (**self).create(payload).await
    }

    async fn update(&self, payload: &CategoryUpdate) -> Result<Category, SourceError> {
        (**self).update(payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), SourceError> {
        (**self).delete(id).await
    }
}
