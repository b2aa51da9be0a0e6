//! Render-ready category nodes
//!
//! [`annotate`] decorates the canonical tree with level, expansion and
//! selection; [`flatten`] turns the annotated tree into visible rows;
//! [`filter`] narrows the rows by a search term. All three are pure.

use std::collections::HashSet;

use serde::Serialize;
use shared::models::Category;

use crate::arena::CategoryArena;

/// A category decorated with view state
///
/// Rebuilt from scratch on every change; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryViewNode {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub parent_id: Option<i64>,
    pub parent_name: Option<String>,
    /// Depth from the root ancestor (roots are 0)
    pub level: usize,
    pub is_expanded: bool,
    /// Pending "add child" target
    pub is_selected: bool,
    pub children: Vec<CategoryViewNode>,
}

impl CategoryViewNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Case-insensitive substring test on name or description.
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Canonical category this node was built from (without children)
    pub fn to_category(&self) -> Category {
        Category {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            parent_id: self.parent_id,
            parent_name: self.parent_name.clone(),
            children: None,
        }
    }
}

struct Annotator<'a> {
    arena: &'a CategoryArena,
    expanded: &'a HashSet<i64>,
    selected: Option<i64>,
}

impl Annotator<'_> {
    fn node(&self, id: i64, level: usize) -> Option<CategoryViewNode> {
        let category = self.arena.get(id)?;
        let children = self
            .arena
            .children_of(id)
            .iter()
            .filter_map(|child| self.node(*child, level + 1))
            .collect();

        Some(CategoryViewNode {
            id,
            name: category.name.clone(),
            description: category.description.clone(),
            parent_id: category.parent_id,
            parent_name: category.parent_name.clone(),
            level,
            is_expanded: self.expanded.contains(&id),
            is_selected: self.selected == Some(id),
            children,
        })
    }
}

/// Annotate every node of the arena, depth-first in sibling order.
///
/// Children are annotated whether or not their parent is expanded;
/// visibility is decided by [`flatten`].
pub fn annotate(
    arena: &CategoryArena,
    expanded: &HashSet<i64>,
    selected_parent: Option<i64>,
) -> Vec<CategoryViewNode> {
    let annotator = Annotator {
        arena,
        expanded,
        selected: selected_parent,
    };
    arena
        .roots()
        .iter()
        .filter_map(|id| annotator.node(*id, 0))
        .collect()
}

/// Annotate a nested forest as supplied by the source
pub fn annotate_forest(
    forest: &[Category],
    expanded: &HashSet<i64>,
    selected_parent: Option<i64>,
) -> Vec<CategoryViewNode> {
    annotate(&CategoryArena::from_forest(forest), expanded, selected_parent)
}

/// Pre-order rows of the annotated tree, skipping collapsed subtrees
pub fn flatten(nodes: &[CategoryViewNode]) -> Vec<&CategoryViewNode> {
    let mut rows = Vec::new();
    push_visible(nodes, &mut rows);
    rows
}

fn push_visible<'a>(nodes: &'a [CategoryViewNode], rows: &mut Vec<&'a CategoryViewNode>) {
    for node in nodes {
        rows.push(node);
        if node.is_expanded {
            push_visible(&node.children, rows);
        }
    }
}

/// Keep the rows whose name or description contains `search_term`,
/// ignoring case. A blank term returns the rows unchanged.
///
/// This is a flat filter over rendered rows: a parent matching does not
/// keep its children, and a child matching does not pull in its parent.
pub fn filter<'a>(rows: Vec<&'a CategoryViewNode>, search_term: &str) -> Vec<&'a CategoryViewNode> {
    if search_term.trim().is_empty() {
        return rows;
    }
    let needle = search_term.to_lowercase();
    rows.into_iter().filter(|node| node.matches(&needle)).collect()
}

/// Return a copy of `expanded` with `id` toggled
pub fn toggle_expand(id: i64, expanded: &HashSet<i64>) -> HashSet<i64> {
    let mut next = expanded.clone();
    if !next.remove(&id) {
        next.insert(id);
    }
    next
}
