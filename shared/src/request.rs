//! Request types for the shared crate
//!
//! Search request body used by the paginated list endpoints.

use serde::{Deserialize, Serialize};

/// Sort clause of a search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    /// "asc" or "desc"
    pub direction: String,
}

/// Filter clause of a search request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub field: String,
    pub operator: String,
    pub value: serde_json::Value,
}

/// Paginated search request
///
/// `page` is 0-based on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub page: u32,
    pub size: u32,
    #[serde(default)]
    pub sorts: Vec<SortSpec>,
    #[serde(default)]
    pub filters: Vec<FilterSpec>,
}

impl SearchRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sorts: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a sort clause
    pub fn sort_by(mut self, field: impl Into<String>, descending: bool) -> Self {
        self.sorts.push(SortSpec {
            field: field.into(),
            direction: if descending { "desc" } else { "asc" }.to_string(),
        });
        self
    }

    /// Add a filter clause
    pub fn filter(
        mut self,
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.filters.push(FilterSpec {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        });
        self
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::new(0, 20)
    }
}
