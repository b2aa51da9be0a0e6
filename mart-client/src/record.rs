//! Wire shape of a category as the API returns it
//!
//! Some endpoints key categories by `id`, others by `categoryId`, and
//! nested children do not always repeat their parent fields. Records are
//! normalised into [`Category`] here so nothing past the client sees
//! either variation.

use serde::Deserialize;
use shared::models::Category;

use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<CategoryRecord>>,
}

impl CategoryRecord {
    /// Canonical id (`id` wins over `categoryId`)
    pub fn key(&self) -> Option<i64> {
        self.id.or(self.category_id)
    }

    /// Convert a top-level record
    pub fn into_category(self) -> ClientResult<Category> {
        self.convert(None)
    }

    fn convert(self, parent: Option<(i64, &str)>) -> ClientResult<Category> {
        let id = self.key().ok_or_else(|| {
            ClientError::InvalidResponse(format!("category '{}' has no id", self.name))
        })?;
        if self.name.trim().is_empty() {
            return Err(ClientError::InvalidResponse(format!(
                "category {} has an empty name",
                id
            )));
        }

        let (parent_id, parent_name) = match parent {
            Some((structural_id, structural_name)) => {
                if self.parent_id.is_some_and(|p| p != structural_id) {
                    tracing::warn!(
                        id,
                        parent_id = ?self.parent_id,
                        structural_parent = structural_id,
                        "Category parentId disagrees with tree position, using tree position"
                    );
                }
                let name = match self.parent_name {
                    Some(name) if self.parent_id.is_none_or(|p| p == structural_id) => name,
                    _ => structural_name.to_string(),
                };
                (Some(structural_id), Some(name))
            }
            None => (self.parent_id, self.parent_name),
        };

        let children = match self.children {
            Some(records) => Some(
                records
                    .into_iter()
                    .map(|child| child.convert(Some((id, &self.name))))
                    .collect::<ClientResult<Vec<_>>>()?,
            ),
            None => None,
        };

        Ok(Category {
            id,
            name: self.name,
            description: self.description.unwrap_or_default(),
            parent_id,
            parent_name,
            children,
        })
    }
}

/// Convert a list of top-level records
pub fn into_categories(records: Vec<CategoryRecord>) -> ClientResult<Vec<Category>> {
    records.into_iter().map(CategoryRecord::into_category).collect()
}
