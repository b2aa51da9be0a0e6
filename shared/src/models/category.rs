//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// `children` is only populated on tree-shaped responses. `None` means the
/// children were not loaded in this shape, not that there are none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Parent category ID (None for root categories)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    /// Denormalized parent name, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Category>>,
}

impl Category {
    /// Create a root category without loaded children
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            parent_id: None,
            parent_name: None,
            children: None,
        }
    }

    /// Set the parent reference
    pub fn with_parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Set the loaded children
    pub fn with_children(mut self, children: Vec<Category>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Loaded children, empty when none were loaded
    pub fn child_nodes(&self) -> &[Category] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Copy of this category with its nested children dropped
    pub fn detached(&self) -> Category {
        Category {
            children: None,
            ..self.clone()
        }
    }
}

/// Create category payload
///
/// `parent_id` absent creates a root category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

/// Update category payload (partial update)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_camel_case() {
        let cat = Category::new(2, "Dairy", "Milk and cheese").with_parent(1);
        let json = serde_json::to_value(&cat).unwrap();
        assert_eq!(json["parentId"], 1);
        assert!(json.get("parentName").is_none());
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_child_nodes_defaults_to_empty() {
        let cat = Category::new(1, "Food", "");
        assert!(cat.child_nodes().is_empty());
        assert!(cat.is_root());

        let cat = cat.with_children(vec![Category::new(2, "Dairy", "").with_parent(1)]);
        assert_eq!(cat.child_nodes().len(), 1);
        assert!(cat.detached().children.is_none());
    }

    #[test]
    fn test_create_payload_omits_missing_parent() {
        let payload = CategoryCreate {
            name: "Snacks".to_string(),
            description: "Chips and such".to_string(),
            parent_id: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"Snacks","description":"Chips and such"}"#);
    }
}
