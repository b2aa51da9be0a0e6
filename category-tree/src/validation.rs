//! Local input validation
//!
//! Runs before any call to the category source. Lengths are counted in
//! characters as typed, so accented names are measured the way the user
//! sees them. A name made only of whitespace is rejected outright.

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

// ── Text length limits ──────────────────────────────────────────────

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must be {min}-{max} characters, got {actual}")]
    NameLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("name must not be blank")]
    BlankName,

    #[error("description must be {min}-{max} characters, got {actual}")]
    DescriptionLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("category {id} cannot be placed under {parent_id}")]
    InvalidParent { id: i64, parent_id: i64 },
}

impl ValidationError {
    /// Form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameLength { .. } | Self::BlankName => "name",
            Self::DescriptionLength { .. } => "description",
            Self::InvalidParent { .. } => "parentId",
        }
    }

    /// Structured error in the API's error format
    pub fn to_app_error(&self) -> AppError {
        let code = match self {
            Self::InvalidParent { .. } => ErrorCode::CategoryInvalidParent,
            _ => ErrorCode::ValidationFailed,
        };
        AppError::with_message(code, self.to_string()).with_detail("field", self.field())
    }
}

// ── Validation helpers ──────────────────────────────────────────────

/// Validate a category name length
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if !name.is_empty() && name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }
    let actual = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&actual) {
        return Err(ValidationError::NameLength {
            min: NAME_MIN_LEN,
            max: NAME_MAX_LEN,
            actual,
        });
    }
    Ok(())
}

/// Validate a category description length
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    let actual = description.chars().count();
    if !(DESCRIPTION_MIN_LEN..=DESCRIPTION_MAX_LEN).contains(&actual) {
        return Err(ValidationError::DescriptionLength {
            min: DESCRIPTION_MIN_LEN,
            max: DESCRIPTION_MAX_LEN,
            actual,
        });
    }
    Ok(())
}

/// Form data for a new category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryInput {
    pub name: String,
    pub description: String,
    /// Explicit parent; falls back to the selected parent when absent
    pub parent_id: Option<i64>,
}

impl CategoryInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parent_id: None,
        }
    }

    pub fn under(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Every field error, in form order
    pub fn errors(&self) -> Vec<ValidationError> {
        [validate_name(&self.name), validate_description(&self.description)]
            .into_iter()
            .filter_map(Result::err)
            .collect()
    }

    /// First field error, if any
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_description(&self.description)
    }
}

/// Form data for a partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<i64>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.parent_id.is_none()
    }

    /// Validate the fields that are present
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }
}
